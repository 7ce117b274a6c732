//! DID parsing functionality.
//!
//! This module splits a DID into the segments the resolver needs for method
//! dispatch. Only the structural shape `scheme:method:method-specific-id` is
//! checked here; the generic DID grammar is not enforced.

use std::fmt;

use crate::error::ResolutionError;

/// Represents a DID split into its three top-level segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Did {
    /// The scheme, conventionally `did`
    pub scheme: String,
    /// The method name used for backend lookup
    pub method: String,
    /// Everything after the second colon, left untouched
    pub method_specific_id: String,
}

impl Did {
    /// Creates a new Did instance
    pub fn new(scheme: String, method: String, method_specific_id: String) -> Self {
        Self { scheme, method, method_specific_id }
    }

    /// Parses a DID string on its first two colons
    ///
    /// Fails with [`ResolutionError::InvalidDIDFormat`] unless the input splits
    /// into exactly three non-empty segments.
    pub fn parse(did: &str) -> Result<Self, ResolutionError> {
        let parts: Vec<&str> = did.splitn(3, ':').collect();
        if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
            return Err(ResolutionError::InvalidDIDFormat);
        }

        Ok(Self::new(
            parts[0].to_string(),
            parts[1].to_string(),
            parts[2].to_string(),
        ))
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.scheme, self.method, self.method_specific_id)
    }
}
