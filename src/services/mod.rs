// ============================================================================
// SERVICES - HTTP communication only (stateless)
// ============================================================================

pub mod auth_service;
pub mod movie_service;
pub mod user_service;

pub use auth_service::*;
pub use movie_service::*;
pub use user_service::*;

use gloo_net::http::{RequestBuilder, Response};

use crate::models::ApiError;
use crate::utils::{load_raw, STORAGE_KEY_TOKEN};

/// Attach `Authorization: Bearer <token>` when a credential is persisted.
/// Unauthenticated requests go out bare; the backend rejects them itself.
pub fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match load_raw(STORAGE_KEY_TOKEN) {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Pull the backend's error text out of a non-2xx response so screens can
/// show it verbatim.
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.is_empty() => match serde_json::from_str::<ApiError>(&body) {
            Ok(err) => err.message,
            Err(_) => body,
        },
        _ => format!("HTTP {}", status),
    }
}
