/// Base URL of the catalog backend.
/// Configured at compile time:
/// - Development: http://localhost:5000/api (default)
/// - Production: via BACKEND_URL env var (see build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// localStorage key holding the raw bearer token.
pub const STORAGE_KEY_TOKEN: &str = "token";

/// localStorage key holding the JSON-serialized user identity.
pub const STORAGE_KEY_USER: &str = "user";

/// Rows per page on paginated screens.
pub const PAGE_SIZE: u32 = 8;
