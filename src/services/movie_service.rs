use gloo_net::http::Request;

use crate::models::{Movie, MovieInput, MoviePageResponse, MovieWriteResponse};
use crate::utils::BACKEND_URL;

use super::{error_message, with_auth};

/// List movies, newest first, one page at a time.
pub async fn fetch_movies(page: u32, limit: u32) -> Result<MoviePageResponse, String> {
    let url = format!("{}/movies?page={}&limit={}", BACKEND_URL, page, limit);
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<MoviePageResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Full-text search over the catalog.
pub async fn search_movies(query: &str, page: u32, limit: u32) -> Result<MoviePageResponse, String> {
    let url = format!(
        "{}/movies/search?q={}&page={}&limit={}",
        BACKEND_URL,
        urlencode(query),
        page,
        limit
    );
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<MoviePageResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn fetch_movie(id: &str) -> Result<Movie, String> {
    let url = format!("{}/movies/{}", BACKEND_URL, id);
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Movie>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a movie. The backend queues the write and answers with an
/// acknowledgement message the UI shows as-is.
pub async fn create_movie(input: &MovieInput) -> Result<MovieWriteResponse, String> {
    let url = format!("{}/movies", BACKEND_URL);
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
        .json::<MovieWriteResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update_movie(id: &str, input: &MovieInput) -> Result<MovieWriteResponse, String> {
    let url = format!("{}/movies/{}", BACKEND_URL, id);
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
        .json::<MovieWriteResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete_movie(id: &str) -> Result<MovieWriteResponse, String> {
    let url = format!("{}/movies/{}", BACKEND_URL, id);
    let response = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<MovieWriteResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Minimal percent-encoding for query strings.
fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push_str("%20"),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::urlencode;

    #[test]
    fn encodes_spaces_and_punctuation() {
        assert_eq!(urlencode("the godfather"), "the%20godfather");
        assert_eq!(urlencode("50/50"), "50%2F50");
        assert_eq!(urlencode("plain-title_1.0~x"), "plain-title_1.0~x");
    }
}
