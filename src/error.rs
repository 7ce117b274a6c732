//! Error types for DID resolution operations.
//!
//! This module provides the error types that can occur while resolving a DID
//! through a registered method backend. It uses the `thiserror` crate for error
//! handling.

use thiserror::Error;

/// Type-erased error returned by method backends
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during DID resolution
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The DID does not have the `scheme:method:method-specific-id` shape
    #[error("wrong format did input")]
    InvalidDIDFormat,

    /// No backend is registered for the DID method
    #[error("did method {0} not supported")]
    MethodNotSupported(String),

    /// The method backend failed to read the DID Document
    #[error("did method {method} read failed")]
    ReadFailed {
        /// Name of the method whose backend failed
        method: String,
        /// The backend's own error
        #[source]
        source: BoxError,
    },

    /// The backend returned bytes that are not a DID Document
    #[error("invalid DID Document")]
    InvalidDocument(#[source] serde_json::Error),

    /// The DID Document does not conform to the DID Document data model
    #[error("DID Document does not conform to the data model: {0}")]
    InvalidDocumentModel(String),

    /// The requested result type is not produced by this resolver
    #[error("result type 'resolution-result' not supported")]
    ResultTypeNotSupported,
}

/// Errors raised by the bundled `did:web` backend
#[derive(Error, Debug)]
pub enum WebError {
    /// The DID is not a `did:web` identifier
    #[error("not a did:web identifier: {0}")]
    InvalidDid(String),

    /// The port in the DID could not be parsed
    #[error("invalid port in did:web identifier: {0}")]
    InvalidPort(String),

    /// The server answered with a non-success status
    #[error("HTTP {0} when fetching DID Document")]
    NonSuccessResponse(reqwest::StatusCode),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// URL parse error
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),
}
