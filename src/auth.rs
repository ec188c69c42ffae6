//! API key authentication
//!
//! Callers identify themselves with the `X-Auth-User` header carrying an
//! opaque API key. The key resolves to a row in the users table; requests
//! with a missing or unknown key are rejected with 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::db::UserRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the caller's API key
pub const AUTH_HEADER: &str = "X-Auth-User";

/// Authenticated user extracted from the `X-Auth-User` header.
///
/// Add this as a handler parameter to require authentication. Lookup
/// takes the first user with the given key in insertion order; the schema
/// does not enforce key uniqueness.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub api_key: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let api_key = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let user = UserRepository::new(state.db())
            .find_by_api_key(api_key)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(AuthUser {
            id: user.id,
            api_key: user.api_key,
        })
    }
}
