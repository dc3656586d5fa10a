//! Error taxonomy for the gateway core.
//!
//! Three failure classes cross the client boundary:
//! - [`AppError::Authentication`]: the token endpoint rejected the
//!   credentials or was unreachable.
//! - [`AppError::RemoteCall`]: the SOAP transport itself failed
//!   (network, malformed envelope, missing result element).
//! - [`AppError::Domain`]: the service answered but signaled a business
//!   failure through its response envelope; the variant carries the
//!   service-provided message verbatim.
//!
//! Nothing is retried or swallowed inside the core; every error
//! propagates to the caller unchanged.

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The identity endpoint rejected the credentials or was unreachable
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The SOAP transport failed before a valid envelope came back
    #[error("remote call failed: {0}")]
    RemoteCall(String),

    /// The remote service signaled a business failure; carries the
    /// upstream `MensajeRespuesta` verbatim
    #[error("{0}")]
    Domain(String),

    /// A success envelope was missing a field the contract guarantees
    #[error("unexpected payload shape: {0}")]
    UnexpectedPayload(String),

    /// Startup configuration is missing or invalid
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the error originated in the remote service's envelope
    /// rather than in this process or the transport.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, AppError::Domain(_))
    }
}
