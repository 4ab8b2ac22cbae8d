/// Reformat a use-case tag into the enumeration name the Glide API expects
///
/// Inserts an underscore at every boundary where a lowercase letter is
/// directly followed by an uppercase letter, then uppercases the whole
/// string: "GetPhoneNumber" becomes "GET_PHONE_NUMBER". Input that is
/// already in wire form passes through unchanged.
pub fn normalize_use_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_lowercase = false;

    for c in raw.chars() {
        if prev_lowercase && c.is_uppercase() {
            out.push('_');
        }
        prev_lowercase = c.is_lowercase();
        out.push(c);
    }

    out.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_gets_underscored_and_uppercased() {
        assert_eq!(normalize_use_case("GetPhoneNumber"), "GET_PHONE_NUMBER");
        assert_eq!(
            normalize_use_case("VerifyPhoneNumber"),
            "VERIFY_PHONE_NUMBER"
        );
    }

    #[test]
    fn test_leading_lowercase_still_splits_at_boundaries() {
        assert_eq!(normalize_use_case("getPhoneNumber"), "GET_PHONE_NUMBER");
    }

    #[test]
    fn test_wire_form_is_unchanged() {
        assert_eq!(normalize_use_case("GET_PHONE_NUMBER"), "GET_PHONE_NUMBER");
    }

    #[test]
    fn test_no_boundary_means_no_underscores() {
        assert_eq!(normalize_use_case("prepare"), "PREPARE");
        assert_eq!(normalize_use_case(""), "");
    }
}
