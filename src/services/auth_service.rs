use gloo_net::http::Request;

use crate::models::{Credential, Identity, LoginRequest, LoginResponse};
use crate::utils::BACKEND_URL;

use super::error_message;

/// Exchange credentials for the (Identity, Credential) pair.
/// A non-2xx response surfaces the backend's message unchanged; no retry.
pub async fn perform_login(email: &str, password: &str) -> Result<(Identity, Credential), String> {
    let url = format!("{}/auth/login", BACKEND_URL);
    let request_body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Logging in {}", email);

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let message = error_message(response).await;
        log::error!("❌ Login rejected: {}", message);
        return Err(message);
    }

    let login = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    log::info!("✅ Login ok for {}", login.user.email);
    Ok((login.user, Credential { token: login.token }))
}
