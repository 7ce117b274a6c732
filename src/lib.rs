//! A DID resolver dispatching to pluggable, method-specific backends.
//!
//! The resolver itself knows nothing about how a DID Document is obtained. It
//! splits the DID, looks up the backend registered for its method, and decodes
//! and validates the bytes that backend returns. Backends implement
//! [`DidMethod`]; a `did:web` backend is bundled as [`WebMethod`].

mod error;
mod types;
mod did;
mod method;
mod options;
mod resolver;
mod web;

pub use error::{BoxError, ResolutionError, WebError};
pub use types::{
    DIDDocument,
    ResultType,
    Service,
    VerificationMethod,
    VerificationRelationship,
    VersionId,
};
pub use did::Did;
pub use method::DidMethod;
pub use options::ResolveOptions;
pub use resolver::{Resolver, ResolverBuilder};
pub use web::WebMethod;

/// Resolves a DID against a resolver with default options
///
/// # Example
/// ```no_run
/// use did_resolver::{resolve, Resolver, WebMethod};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let resolver = Resolver::builder()
///         .with_did_method("web", WebMethod::https())
///         .build();
///
///     if let Some(document) = resolve(&resolver, "did:web:example.com")? {
///         println!("Resolved DID Document: {:?}", document);
///     }
///     Ok(())
/// }
/// ```
pub fn resolve(resolver: &Resolver, did: &str) -> Result<Option<DIDDocument>, ResolutionError> {
    resolver.resolve(did, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_example(
        did: &str,
        _version_id: Option<&VersionId>,
        _version_time: &str,
        _no_cache: bool,
    ) -> Result<Vec<u8>, BoxError> {
        match did {
            "did:example:123" => Ok(br#"{"@context": "https://www.w3.org/ns/did/v1", "id": "did:example:123"}"#.to_vec()),
            _ => Ok(Vec::new()),
        }
    }

    #[test]
    fn test_basic_resolution() {
        let resolver = Resolver::builder().with_did_method("example", read_example).build();

        let document = resolve(&resolver, "did:example:123").unwrap().unwrap();
        assert_eq!(document.id, "did:example:123");
        assert!(resolve(&resolver, "did:example:456").unwrap().is_none());
        assert!(matches!(
            resolve(&resolver, "not-a-valid-did"),
            Err(ResolutionError::InvalidDIDFormat)
        ));
        assert!(matches!(
            resolve(&resolver, "did:unknownmethod:abc"),
            Err(ResolutionError::MethodNotSupported(method)) if method == "unknownmethod"
        ));
    }
}
