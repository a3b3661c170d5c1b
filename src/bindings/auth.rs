//! Authentication boundary for the admin panel
//!
//! Credentials go to the backend, a token comes back. There is deliberately
//! no client-side credential fallback: if the backend rejects or is
//! unreachable, login fails.

use serde::{Deserialize, Serialize};

use super::http::post_json;

/// Login form contents.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange credentials for a session token.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, String> {
    post_json("/api/auth/login", credentials).await
}
