use crate::errors::auth_error::AuthError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authentication middleware that validates bearer tokens
///
/// API-secret mode only: the bearer token is compared against the
/// configured `AUTH_API_SECRET`. When auth is not required the request
/// passes through untouched.
///
/// The middleware:
/// 1. Extracts the Authorization header and parses the bearer token
/// 2. Compares the token with the configured API secret
/// 3. Returns 401 if validation fails, or passes the request through
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // Skip authentication if auth is not required
    if !state.config.auth_required {
        tracing::debug!("Authentication disabled, passing request through");
        return Ok(next.run(request).await);
    }

    let request_method = request.method().to_string();
    let request_path = request.uri().path().to_string();

    // Extract the Authorization header
    let auth_header = request
        .headers()
        .get("authorization")
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    // Parse the Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?;

    let secret = state
        .config
        .auth_api_secret
        .as_deref()
        .ok_or_else(|| AuthError::ConfigError("API secret not configured".to_string()))?;

    if constant_time_eq(token.as_bytes(), secret.as_bytes()) {
        tracing::info!(
            method = %request_method,
            path = %request_path,
            "API secret authentication successful"
        );
        Ok(next.run(request).await)
    } else {
        tracing::warn!(
            method = %request_method,
            path = %request_path,
            "API secret authentication failed: token mismatch"
        );
        Err(AuthError::Unauthorized("Invalid API secret".to_string()))
    }
}

/// Constant-time byte comparison, so token checks don't leak length-prefix
/// timing.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
