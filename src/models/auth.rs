use serde::{Deserialize, Serialize};

/// Closed set of roles known to the catalog backend.
/// Membership checks are exhaustive on purpose; there is no implicit
/// hierarchy (a superadmin is NOT an admin unless a screen lists both).
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }
}

/// Profile of the signed-in principal, as returned by the backend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Opaque bearer token proving the Identity to the backend.
#[derive(Clone, PartialEq, Debug)]
pub struct Credential {
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub user: Identity,
    pub token: String,
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiError {
    pub message: String,
}
