// Shared data models (wire format matches the catalog backend)

pub mod auth;
pub mod movie;
pub mod user;

pub use auth::*;
pub use movie::*;
pub use user::*;
