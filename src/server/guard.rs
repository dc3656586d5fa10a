//! Static access-token guard for the gateway's own routes.
//!
//! Inbound requests must carry an `Authorization` header equal to the
//! configured `API_ACCESS_TOKEN`. This protects the gateway surface
//! only; it is unrelated to the upstream bearer token.

use crate::server::AppState;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Rejects requests whose `Authorization` header does not match the
/// configured access token. The comparison is constant-time so the
/// token cannot be probed byte by byte.
pub async fn require_access_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|presented| {
            bool::from(presented.as_bytes().ct_eq(state.access_token.as_bytes()))
        });

    if !authorized {
        debug!("rejected request to {} without valid access token", request.uri().path());
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}
