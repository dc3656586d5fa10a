//! Route handlers: path parameters in, client call, JSON out.
//!
//! Axum guarantees the path parameters are present (a route without
//! them simply does not match), so no argument validation happens
//! here.

use crate::application::models::{GeographicItem, Neighborhood};
use crate::server::{ApiError, AppState};
use axum::Json;
use axum::extract::{Path, State};

/// Health check; unauthenticated
pub async fn health() -> &'static str {
    "test"
}

/// `GET /cantones/{provinceCode}`
pub async fn cantons(
    State(state): State<AppState>,
    Path(province_code): Path<String>,
) -> Result<Json<Vec<GeographicItem>>, ApiError> {
    Ok(Json(state.client.get_cantons(&province_code).await?))
}

/// `GET /provinces/{code}/{description}`
pub async fn provinces(
    State(state): State<AppState>,
    Path((code, description)): Path<(String, String)>,
) -> Result<Json<Vec<GeographicItem>>, ApiError> {
    Ok(Json(state.client.get_provinces(&code, &description).await?))
}

/// `GET /districts/{provinceCode}/{cantonCode}`
pub async fn districts(
    State(state): State<AppState>,
    Path((province_code, canton_code)): Path<(String, String)>,
) -> Result<Json<Vec<GeographicItem>>, ApiError> {
    Ok(Json(
        state.client.get_districts(&province_code, &canton_code).await?,
    ))
}

/// `GET /neighborhoods/{provinceCode}/{cantonCode}/{districtCode}`
pub async fn neighborhoods(
    State(state): State<AppState>,
    Path((province_code, canton_code, district_code)): Path<(String, String, String)>,
) -> Result<Json<Vec<Neighborhood>>, ApiError> {
    Ok(Json(
        state
            .client
            .get_neighborhoods(&province_code, &canton_code, &district_code)
            .await?,
    ))
}

/// `GET /postalCode/{provinceCode}/{cantonCode}/{districtCode}`
///
/// Returns the postal code as a plain string body.
pub async fn postal_code(
    State(state): State<AppState>,
    Path((province_code, canton_code, district_code)): Path<(String, String, String)>,
) -> Result<String, ApiError> {
    Ok(state
        .client
        .get_postal_code(&province_code, &canton_code, &district_code)
        .await?)
}
