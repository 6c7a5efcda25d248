use gloo_net::http::Request;

use crate::models::{UserInput, UserPageResponse, UserRecord, UserWriteResponse};
use crate::utils::BACKEND_URL;

use super::{error_message, with_auth};

pub async fn fetch_users(page: u32, limit: u32) -> Result<UserPageResponse, String> {
    let url = format!("{}/users?page={}&limit={}", BACKEND_URL, page, limit);
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<UserPageResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn fetch_user(id: &str) -> Result<UserRecord, String> {
    let url = format!("{}/users/{}", BACKEND_URL, id);
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<UserRecord>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create_user(input: &UserInput) -> Result<UserWriteResponse, String> {
    let url = format!("{}/users", BACKEND_URL);
    let response = with_auth(Request::post(&url))
        .json(input)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<UserWriteResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update_user(id: &str, input: &UserInput) -> Result<UserWriteResponse, String> {
    let url = format!("{}/users/{}", BACKEND_URL, id);
    let response = with_auth(Request::put(&url))
        .json(input)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<UserWriteResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete_user(id: &str) -> Result<UserWriteResponse, String> {
    let url = format!("{}/users/{}", BACKEND_URL, id);
    let response = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<UserWriteResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
