//! Convenient re-exports of the most commonly used types.
//!
//! ```ignore
//! use ccr_gateway::prelude::*;
//! ```

/// Startup configuration
pub use crate::config::{Config, Credentials, ServerConfig};

/// Main error type for the library
pub use crate::error::AppError;

/// The authenticated client
pub use crate::application::client::CcrClient;

/// Remote operation enumeration
pub use crate::application::operation::CcrMethod;

/// Domain records
pub use crate::application::models::{GeographicItem, Neighborhood};

/// Token lifecycle
pub use crate::session::{Token, TokenManager};

/// Transport seam
pub use crate::transport::{SoapHttpTransport, SoapTransport};

/// Gateway router and state
pub use crate::server::{AppState, router};

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Library version
pub use crate::VERSION;
