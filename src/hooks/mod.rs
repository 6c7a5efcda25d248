pub mod auth_context;
pub mod use_auth;

pub use auth_context::*;
pub use use_auth::*;
