// Business domains
pub mod phone_auth;
