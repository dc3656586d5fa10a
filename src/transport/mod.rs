//! SOAP-over-HTTP transport.
//!
//! The dispatcher talks to the upstream through [`SoapTransport`], so
//! tests can substitute an in-memory double. [`SoapHttpTransport`] is
//! the production implementation: one shared `reqwest` client posting
//! SOAP 1.1 envelopes to the configured endpoint. The bearer token is
//! passed per invocation; the transport holds no authentication state
//! of its own.

pub mod xml;

use crate::application::operation::CcrMethod;
use crate::constants::{SOAP_NAMESPACE, USER_AGENT};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Invokes one remote operation and returns its response element as a
/// loosely-typed value.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    /// Calls `method` with `args`, attaching `token` for authorization.
    ///
    /// The returned value is the content of the `<method>Response`
    /// element; the caller extracts the `<method>Result` field from it.
    async fn invoke(
        &self,
        method: CcrMethod,
        args: &BTreeMap<String, String>,
        token: &str,
    ) -> Result<Value, AppError>;
}

/// Production transport posting SOAP envelopes over HTTP
pub struct SoapHttpTransport {
    http: Client,
    endpoint: String,
}

impl SoapHttpTransport {
    /// Creates a transport bound to the given SOAP endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("reqwest client");

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SoapTransport for SoapHttpTransport {
    async fn invoke(
        &self,
        method: CcrMethod,
        args: &BTreeMap<String, String>,
        token: &str,
    ) -> Result<Value, AppError> {
        let envelope = xml::request_envelope(method, args);
        debug!("invoking {} at {}", method, self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{SOAP_NAMESPACE}{method}\""))
            .header(AUTHORIZATION, token)
            .body(envelope)
            .send()
            .await
            .map_err(|e| AppError::RemoteCall(format!("soap request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::RemoteCall(format!("failed to read soap response: {e}")))?;
        trace!("soap response ({status}): {text}");

        let doc = xml::document_to_value(&text)
            .map_err(|e| AppError::RemoteCall(format!("invalid soap response: {e}")))?;

        if let Some(fault) = doc.get("Body").and_then(|b| b.get("Fault")) {
            let detail = fault
                .get("faultstring")
                .and_then(Value::as_str)
                .unwrap_or("unspecified fault");
            return Err(AppError::RemoteCall(format!("soap fault: {detail}")));
        }

        if !status.is_success() {
            return Err(AppError::RemoteCall(format!(
                "soap endpoint returned status {status}"
            )));
        }

        doc.get("Body")
            .and_then(|b| b.get(method.response_element()))
            .cloned()
            .ok_or_else(|| {
                AppError::RemoteCall(format!(
                    "response missing element {}",
                    method.response_element()
                ))
            })
    }
}
