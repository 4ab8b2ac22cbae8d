//! Phone-auth domain - relays verification requests to the Glide magic-auth API
//!
//! Responsibilities:
//! - Use-case tag normalization ("GetPhoneNumber" → GET_PHONE_NUMBER)
//! - Carrier/phone resolution with the default-carrier fallback
//! - Opaque credential/session conversion into the API's typed shapes
//! - Prepare-response shaping (eligibility refusals, legacy envelope)

pub mod errors;
pub mod models;
pub mod normalize;
pub mod service;

pub use errors::PhoneAuthError;
pub use normalize::normalize_use_case;
