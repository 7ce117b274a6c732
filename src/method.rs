//! The capability every DID method backend provides.

use crate::error::BoxError;
use crate::types::VersionId;

/// A method-specific source of raw DID Documents
///
/// `read` returns the serialized DID Document for `did`. An empty buffer with
/// no error means the DID does not exist. `version_time` is RFC 3339 text, or
/// empty when the caller did not ask for a point in time.
///
/// Implementations are called concurrently when the owning resolver is shared
/// across threads and are responsible for their own synchronization.
pub trait DidMethod: Send + Sync {
    /// Reads the raw DID Document for `did`
    fn read(
        &self,
        did: &str,
        version_id: Option<&VersionId>,
        version_time: &str,
        no_cache: bool,
    ) -> Result<Vec<u8>, BoxError>;
}

impl<F> DidMethod for F
where
    F: Fn(&str, Option<&VersionId>, &str, bool) -> Result<Vec<u8>, BoxError> + Send + Sync,
{
    fn read(
        &self,
        did: &str,
        version_id: Option<&VersionId>,
        version_time: &str,
        no_cache: bool,
    ) -> Result<Vec<u8>, BoxError> {
        self(did, version_id, version_time, no_cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(did: &str, version_id: Option<&VersionId>, version_time: &str, no_cache: bool) -> Result<Vec<u8>, BoxError> {
        Ok(format!("{did}|{version_id:?}|{version_time}|{no_cache}").into_bytes())
    }

    #[test]
    fn test_fn_backend() {
        let bytes = echo.read("did:example:1", Some(&VersionId::Number(2)), "", true).unwrap();
        assert_eq!(bytes, b"did:example:1|Some(Number(2))||true");
    }
}
