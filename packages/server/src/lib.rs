// Glide Phone Auth Relay - Server Core
//
// This crate provides the HTTP relay between the verification frontend and
// the Glide magic-auth API: inbound requests are normalized into the API's
// call format, forwarded through the client crate, and the API's response
// is returned unmodified.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
