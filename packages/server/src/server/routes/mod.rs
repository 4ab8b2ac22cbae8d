// HTTP routes
pub mod health;
pub mod phone_auth;

pub use health::*;
pub use phone_auth::*;
