//! Core DID resolution functionality.
//!
//! This module provides the method registry and the resolution pipeline:
//! parsing a DID, dispatching it to the backend registered for its method,
//! and decoding and validating whatever the backend returns.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::did::Did;
use crate::error::ResolutionError;
use crate::method::DidMethod;
use crate::options::ResolveOptions;
use crate::types::{DIDDocument, ResultType};

/// Builder collecting method registrations for a [`Resolver`]
#[derive(Default)]
pub struct ResolverBuilder {
    did_methods: HashMap<String, Arc<dyn DidMethod>>,
}

impl ResolverBuilder {
    /// Registers `method` as the backend for DIDs of method `name`
    ///
    /// A later registration for the same name replaces the earlier one.
    pub fn with_did_method(mut self, name: impl Into<String>, method: impl DidMethod + 'static) -> Self {
        self.did_methods.insert(name.into(), Arc::new(method));
        self
    }

    /// Registers an already shared backend for DIDs of method `name`
    pub fn with_shared_did_method(mut self, name: impl Into<String>, method: Arc<dyn DidMethod>) -> Self {
        self.did_methods.insert(name.into(), method);
        self
    }

    /// Finishes construction; the registry cannot change afterwards
    pub fn build(self) -> Resolver {
        Resolver { did_methods: self.did_methods }
    }
}

/// Resolver dispatching DIDs to their registered method backends
///
/// A resolver holds no per-call state and can be shared across threads.
pub struct Resolver {
    /// Registered backends keyed by method name
    did_methods: HashMap<String, Arc<dyn DidMethod>>,
}

impl Resolver {
    /// Starts building a resolver with an empty method registry
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Returns the names of all registered methods, sorted
    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.did_methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether a backend is registered for `method`
    pub fn supports(&self, method: &str) -> bool {
        self.did_methods.contains_key(method)
    }

    /// Resolves a DID to its DID Document
    ///
    /// Returns `Ok(None)` when the backend reports that the DID does not exist.
    ///
    /// # Arguments
    /// * `did` - The DID to resolve
    /// * `options` - Optional resolution parameters
    ///
    /// # Example
    /// ```no_run
    /// use did_resolver::{BoxError, Resolver, ResolveOptions, VersionId};
    ///
    /// fn read_example(
    ///     _did: &str,
    ///     _version_id: Option<&VersionId>,
    ///     _version_time: &str,
    ///     _no_cache: bool,
    /// ) -> Result<Vec<u8>, BoxError> {
    ///     Ok(br#"{"@context": "https://www.w3.org/ns/did/v1", "id": "did:example:123"}"#.to_vec())
    /// }
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let resolver = Resolver::builder()
    ///         .with_did_method("example", read_example)
    ///         .build();
    ///
    ///     let document = resolver.resolve(
    ///         "did:example:123",
    ///         Some(ResolveOptions::new().with_no_cache(true)),
    ///     )?;
    ///     println!("Resolved DID Document: {:?}", document);
    ///     Ok(())
    /// }
    /// ```
    pub fn resolve(
        &self,
        did: &str,
        options: Option<ResolveOptions>,
    ) -> Result<Option<DIDDocument>, ResolutionError> {
        let options = options.unwrap_or_default();

        // Only the three-segment shape is checked, not the full DID grammar
        let parsed = Did::parse(did)?;

        let method = self
            .did_methods
            .get(&parsed.method)
            .ok_or_else(|| ResolutionError::MethodNotSupported(parsed.method.clone()))?;

        tracing::debug!("resolving {did} with did method {}", parsed.method);
        tracing::trace!(
            "resolve options: version_id={:?} version_time={:?} no_cache={}",
            options.version_id,
            options.version_time,
            options.no_cache
        );

        let bytes = method
            .read(did, options.version_id.as_ref(), options.version_time_str(), options.no_cache)
            .map_err(|source| {
                tracing::warn!("did method {} failed to read {did}: {source}", parsed.method);
                ResolutionError::ReadFailed { method: parsed.method.clone(), source }
            })?;

        if bytes.is_empty() {
            tracing::debug!("no DID Document found for {did}");
            return Ok(None);
        }

        let document = DIDDocument::from_bytes(&bytes)?;
        document.validate()?;

        if options.result_type == ResultType::ResolutionResult {
            return Err(ResolutionError::ResultTypeNotSupported);
        }

        Ok(Some(document))
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").field("did_methods", &self.methods()).finish()
    }
}
