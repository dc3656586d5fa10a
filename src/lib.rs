//! # ccr-gateway
//!
//! A small JSON HTTP gateway over the Correos de Costa Rica SOAP
//! geographic-lookup service.
//!
//! The heart of the crate is [`application::client::CcrClient`]: an
//! authenticated SOAP client that manages a short-lived bearer token,
//! wraps every remote procedure call with a uniform success/failure
//! contract, and maps the loosely-typed SOAP responses into stable
//! domain records (provinces, cantons, districts, neighborhoods,
//! postal codes). The [`server`] module exposes those lookups as JSON
//! routes behind a static access token.
//!
//! ## Example
//! ```ignore
//! use ccr_gateway::prelude::*;
//!
//! let config = Config::from_env()?;
//! let client = CcrClient::new(&config);
//! let cantons = client.get_cantons("1").await?;
//! ```

/// Client façade, dispatcher, envelope validation and domain models
pub mod application;
/// Startup configuration loaded from the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Commonly used types in one import
pub mod prelude;
/// HTTP gateway routes and middleware
pub mod server;
/// Bearer token lifecycle against the upstream identity endpoint
pub mod session;
/// SOAP-over-HTTP transport
pub mod transport;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
