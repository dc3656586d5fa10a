//! JSON HTTP gateway over the client.
//!
//! The route layer is a thin pass-through: it shapes path parameters
//! into client calls and translates the error taxonomy into HTTP
//! statuses. Domain failures become 400 with the upstream message;
//! authentication and transport failures become 502 (the gateway
//! itself is fine, the upstream is not).

pub mod guard;
pub mod routes;

use crate::application::client::CcrClient;
use crate::error::AppError;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// The single shared client instance
    pub client: Arc<CcrClient>,
    /// Static bearer token expected on inbound requests
    pub access_token: String,
}

/// Builds the gateway router.
///
/// Every route except `GET /test` sits behind the access-token guard.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/cantones/{provinceCode}", get(routes::cantons))
        .route("/provinces/{code}/{description}", get(routes::provinces))
        .route("/districts/{provinceCode}/{cantonCode}", get(routes::districts))
        .route(
            "/neighborhoods/{provinceCode}/{cantonCode}/{districtCode}",
            get(routes::neighborhoods),
        )
        .route(
            "/postalCode/{provinceCode}/{cantonCode}/{districtCode}",
            get(routes::postal_code),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_access_token,
        ));

    Router::new()
        .route("/test", get(routes::health))
        .merge(protected)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Logs one line per request with method, path, status and latency
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status(),
        start.elapsed()
    );
    response
}

/// Error wrapper giving [`AppError`] an HTTP rendering
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            AppError::Domain(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Authentication(_) | AppError::RemoteCall(_) | AppError::UnexpectedPayload(_) => {
                warn!("upstream failure: {}", self.0);
                (StatusCode::BAD_GATEWAY, "upstream service failure".to_string())
            }
            AppError::Config(_) | AppError::Io(_) => {
                warn!("internal failure: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": detail }))).into_response()
    }
}
