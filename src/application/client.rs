//! The public client: one method per lookup operation.
//!
//! `CcrClient` owns the token manager and the SOAP transport; both are
//! injected at construction, nothing is ambient. Every call runs the
//! same chain: ensure a valid token, invoke the operation, extract its
//! result element, validate the envelope, map the payload.

use crate::application::envelope;
use crate::application::models::{self, GeographicItem, Neighborhood};
use crate::application::operation::CcrMethod;
use crate::config::Config;
use crate::error::AppError;
use crate::session::TokenManager;
use crate::transport::{SoapHttpTransport, SoapTransport};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Authenticated client for the Correos de Costa Rica SOAP service
pub struct CcrClient {
    session: TokenManager,
    transport: Arc<dyn SoapTransport>,
}

impl CcrClient {
    /// Creates a client with the production HTTP transport
    pub fn new(config: &Config) -> Self {
        let transport = Arc::new(SoapHttpTransport::new(config.soap_url.clone()));
        Self::from_parts(
            TokenManager::new(config.credentials.clone(), config.token_url.clone()),
            transport,
        )
    }

    /// Creates a client from explicit collaborators
    pub fn from_parts(session: TokenManager, transport: Arc<dyn SoapTransport>) -> Self {
        Self { session, transport }
    }

    /// Authenticates eagerly so startup fails fast on bad credentials.
    ///
    /// Optional; the first lookup authenticates lazily otherwise.
    pub async fn start(&self) -> Result<(), AppError> {
        self.session.authenticate().await.map(|_| ())
    }

    /// Invokes one remote operation and returns its validated result.
    ///
    /// Ensures a valid token, invokes the transport, extracts the
    /// `<operation>Result` object and checks the response envelope.
    /// The returned value still carries `CodRespuesta` and
    /// `MensajeRespuesta` next to the operation-specific fields.
    ///
    /// The typed lookup methods cover the geographic operations; rate
    /// quotes, shipment registration and tracking are reachable here
    /// with a caller-built argument map.
    pub async fn call(
        &self,
        method: CcrMethod,
        args: BTreeMap<String, String>,
    ) -> Result<Value, AppError> {
        let token = self.session.ensure_valid().await?;
        debug!("dispatching {}", method);

        let response = self.transport.invoke(method, &args, &token.value).await?;

        let raw = response
            .get(method.result_field())
            .cloned()
            .ok_or_else(|| {
                AppError::RemoteCall(format!("response missing field {}", method.result_field()))
            })?;

        envelope::validate(raw)
    }

    /// Lists the cantons of a province.
    pub async fn get_cantons(&self, province_code: &str) -> Result<Vec<GeographicItem>, AppError> {
        let args = BTreeMap::from([("CodProvincia".to_string(), province_code.to_string())]);
        let data = self.call(CcrMethod::CodCanton, args).await?;

        models::geographic_items(&data, "Cantones")
    }

    /// Lists provinces matching a code and description.
    pub async fn get_provinces(
        &self,
        code: &str,
        description: &str,
    ) -> Result<Vec<GeographicItem>, AppError> {
        let args = BTreeMap::from([
            ("Codigo".to_string(), code.to_string()),
            ("Descripción".to_string(), description.to_string()),
        ]);
        let data = self.call(CcrMethod::CodProvincia, args).await?;

        models::geographic_items(&data, "Provincias")
    }

    /// Lists the districts of a canton.
    pub async fn get_districts(
        &self,
        province_code: &str,
        canton_code: &str,
    ) -> Result<Vec<GeographicItem>, AppError> {
        let args = BTreeMap::from([
            ("CodProvincia".to_string(), province_code.to_string()),
            ("CodCanton".to_string(), canton_code.to_string()),
        ]);
        let data = self.call(CcrMethod::CodDistrito, args).await?;

        models::geographic_items(&data, "Distritos")
    }

    /// Lists the neighborhoods of a district.
    pub async fn get_neighborhoods(
        &self,
        province_code: &str,
        canton_code: &str,
        district_code: &str,
    ) -> Result<Vec<Neighborhood>, AppError> {
        let args = BTreeMap::from([
            ("CodProvincia".to_string(), province_code.to_string()),
            ("CodCanton".to_string(), canton_code.to_string()),
            ("CodDistrito".to_string(), district_code.to_string()),
        ]);
        let data = self.call(CcrMethod::CodBarrio, args).await?;

        models::neighborhoods(&data)
    }

    /// Returns the postal code of a district.
    pub async fn get_postal_code(
        &self,
        province_code: &str,
        canton_code: &str,
        district_code: &str,
    ) -> Result<String, AppError> {
        let args = BTreeMap::from([
            ("CodProvincia".to_string(), province_code.to_string()),
            ("CodCanton".to_string(), canton_code.to_string()),
            ("CodDistrito".to_string(), district_code.to_string()),
        ]);
        let data = self.call(CcrMethod::CodPostal, args).await?;

        models::postal_code(&data)
    }

    /// Generates a new waybill number.
    pub async fn generate_guide(&self) -> Result<u64, AppError> {
        let data = self.call(CcrMethod::GenerarGuia, BTreeMap::new()).await?;

        models::guide_number(&data)
    }
}
