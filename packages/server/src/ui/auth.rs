//! Bearer token authentication helper.

use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::domain::AuthorId;

use super::{error::ApiError, state::AppState};

/// Resolve the calling identity or reject with 401.
///
/// Runs before any payload validation so an unauthenticated caller always
/// sees 401, never 400.
pub(crate) async fn require_author(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthorId, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError::AuthenticationRequired)?;
    state
        .sessions
        .verify(token)
        .await
        .ok_or(ApiError::AuthenticationRequired)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
