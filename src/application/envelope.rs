//! Response envelope validation.
//!
//! Every upstream result carries `CodRespuesta` and `MensajeRespuesta`
//! alongside the operation-specific fields. `"00"` is the only success
//! code; anything else is a business failure whose message comes from
//! the service itself.

use crate::constants::SUCCESS_CODE;
use crate::error::AppError;
use serde_json::Value;

/// Checks the envelope's response code and passes the payload through.
///
/// Returns `raw` unchanged on success so callers can pick the fields
/// they need. A non-success code fails with [`AppError::Domain`]
/// carrying `MensajeRespuesta` verbatim; an envelope without a
/// response code is a contract breach.
pub fn validate(raw: Value) -> Result<Value, AppError> {
    let code = raw
        .get("CodRespuesta")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::UnexpectedPayload("envelope missing CodRespuesta".to_string()))?;

    if code != SUCCESS_CODE {
        let message = raw
            .get("MensajeRespuesta")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(AppError::Domain(message));
    }

    Ok(raw)
}
