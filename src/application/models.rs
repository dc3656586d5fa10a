//! Domain records and the pure mappers from raw payload fields.
//!
//! Mapping is field renaming only: Spanish wire names become stable
//! English fields, values pass through untouched and upstream order is
//! preserved. A missing field means the upstream broke its contract
//! and surfaces as [`AppError::UnexpectedPayload`].

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A code/description pair; used for provinces, cantons and districts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographicItem {
    /// Upstream `Codigo`
    pub code: String,
    /// Upstream `Descripcion`
    pub description: String,
}

/// A neighborhood with its serving branch office
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    /// Upstream `CodBarrio`
    pub neighborhood_code: String,
    /// Upstream `CodSucursal`
    pub branch_code: String,
    /// Upstream `Nombre`
    pub name: String,
}

/// Reads a string field or fails naming the missing field
fn str_field(value: &Value, field: &str) -> Result<String, AppError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::UnexpectedPayload(format!("missing field {field}")))
}

/// The XML layer yields an object for a single entry and an array for
/// several; normalize both to a slice-like iteration.
fn entries(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Maps a geographic list payload (`Cantones`, `Provincias`,
/// `Distritos`) into ordered [`GeographicItem`]s.
pub fn geographic_items(payload: &Value, list_field: &str) -> Result<Vec<GeographicItem>, AppError> {
    let list = payload
        .get(list_field)
        .and_then(|v| v.get("ccrItemGeografico"))
        .ok_or_else(|| {
            AppError::UnexpectedPayload(format!("missing field {list_field}.ccrItemGeografico"))
        })?;

    entries(list)
        .into_iter()
        .map(|item| {
            Ok(GeographicItem {
                code: str_field(item, "Codigo")?,
                description: str_field(item, "Descripcion")?,
            })
        })
        .collect()
}

/// Maps a `Barrios` payload into ordered [`Neighborhood`]s.
pub fn neighborhoods(payload: &Value) -> Result<Vec<Neighborhood>, AppError> {
    let list = payload
        .get("Barrios")
        .and_then(|v| v.get("ccrBarrio"))
        .ok_or_else(|| {
            AppError::UnexpectedPayload("missing field Barrios.ccrBarrio".to_string())
        })?;

    entries(list)
        .into_iter()
        .map(|item| {
            Ok(Neighborhood {
                neighborhood_code: str_field(item, "CodBarrio")?,
                branch_code: str_field(item, "CodSucursal")?,
                name: str_field(item, "Nombre")?,
            })
        })
        .collect()
}

/// Extracts the `CodPostal` field.
pub fn postal_code(payload: &Value) -> Result<String, AppError> {
    str_field(payload, "CodPostal")
}

/// Extracts the `NumeroEnvio` waybill number.
///
/// The XML layer delivers numbers as strings; a JSON number is
/// accepted too.
pub fn guide_number(payload: &Value) -> Result<u64, AppError> {
    let field = payload
        .get("NumeroEnvio")
        .ok_or_else(|| AppError::UnexpectedPayload("missing field NumeroEnvio".to_string()))?;

    match field {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
    .ok_or_else(|| AppError::UnexpectedPayload("NumeroEnvio is not a number".to_string()))
}
