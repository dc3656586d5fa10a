//! Startup configuration, loaded once from the environment.
//!
//! Mirrors the env surface of the service deployment: `CCR_*` variables
//! carry the upstream credentials, `API_ACCESS_TOKEN` protects the
//! gateway's own routes, `SERVER_HOST`/`SERVER_PORT` bind the listener.
//! Required variables missing at startup fail fast with
//! [`AppError::Config`] instead of surfacing mid-request.

use crate::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_TOKEN_URL};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, require_env};
use serde::{Deserialize, Serialize};

/// Authentication credentials for the Correos de Costa Rica web service
///
/// Supplied once at construction and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Username for the token endpoint
    pub username: String,
    /// Password for the token endpoint
    pub password: String,
    /// User identifier assigned by Correos
    pub user_id: String,
    /// Contracted service identifier
    pub service_id: String,
    /// Client code assigned by Correos
    pub client_code: String,
    /// System identifier sent as `Sistema` during authentication
    pub system: String,
}

/// Bind address of the HTTP gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to listen on
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Main configuration for the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream credentials
    pub credentials: Credentials,
    /// URL of the SOAP endpoint
    pub soap_url: String,
    /// URL of the token-issuing endpoint
    pub token_url: String,
    /// Static bearer token expected on inbound requests
    pub access_token: String,
    /// HTTP listener settings
    pub server: ServerConfig,
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// `CCR_USERNAME`, `CCR_PASSWORD`, `CCR_USER_ID`, `CCR_SERVICE_ID`,
    /// `CCR_CLIENT_CODE`, `CCR_SOAP_URL`, `CCR_SYSTEM` and
    /// `API_ACCESS_TOKEN` are required; the rest fall back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Config {
            credentials: Credentials {
                username: require_env("CCR_USERNAME")?,
                password: require_env("CCR_PASSWORD")?,
                user_id: require_env("CCR_USER_ID")?,
                service_id: require_env("CCR_SERVICE_ID")?,
                client_code: require_env("CCR_CLIENT_CODE")?,
                system: require_env("CCR_SYSTEM")?,
            },
            soap_url: require_env("CCR_SOAP_URL")?,
            token_url: get_env_or_default("CCR_TOKEN_URL", String::from(DEFAULT_TOKEN_URL)),
            access_token: require_env("API_ACCESS_TOKEN")?,
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", String::from(DEFAULT_SERVER_HOST)),
                port: get_env_or_default("SERVER_PORT", DEFAULT_SERVER_PORT),
            },
        })
    }
}
