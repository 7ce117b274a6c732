//! Core types for DID resolution.
//!
//! This module provides the DID Document model returned by the resolver, the
//! decoder and validation hook applied to raw backend output, and the
//! selector types carried in resolve options.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ResolutionError;

/// A complete DID Document as defined in the DID Core specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DIDDocument {
    /// The context of the DID Document
    #[serde(rename = "@context")]
    #[serde(default, deserialize_with = "one_or_many")]
    pub context: Vec<String>,

    /// The DID itself
    pub id: String,

    /// Entities allowed to make changes to this DID Document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "optional_one_or_many")]
    pub controller: Option<Vec<String>>,

    /// Other DIDs that are associated with this DID Document
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "alsoKnownAs")]
    pub also_known_as: Option<Vec<String>>,

    /// Verification methods associated with this DID
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "verificationMethod")]
    pub verification_method: Option<Vec<VerificationMethod>>,

    /// Authentication verification methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<VerificationRelationship>>,

    /// Assertion verification methods
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "assertionMethod")]
    pub assertion_method: Option<Vec<VerificationRelationship>>,

    /// Key agreement verification methods
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "keyAgreement")]
    pub key_agreement: Option<Vec<VerificationRelationship>>,

    /// Capability invocation verification methods
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "capabilityInvocation")]
    pub capability_invocation: Option<Vec<VerificationRelationship>>,

    /// Capability delegation verification methods
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "capabilityDelegation")]
    pub capability_delegation: Option<Vec<VerificationRelationship>>,

    /// Services associated with this DID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<Service>>,

    /// Deactivation status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
}

impl DIDDocument {
    /// Decodes a DID Document from its JSON serialization
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ResolutionError> {
        serde_json::from_slice(bytes).map_err(ResolutionError::InvalidDocument)
    }

    /// Checks the document against the DID Document data model
    ///
    /// Conformance rules are not enforced yet; every decoded document passes.
    pub fn validate(&self) -> Result<(), ResolutionError> {
        Ok(())
    }
}

/// A verification method in a DID Document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationMethod {
    /// The unique identifier for this verification method
    pub id: String,

    /// The type of the verification method
    #[serde(rename = "type")]
    pub method_type: String,

    /// The controller of this verification method
    pub controller: String,

    /// The public key in multibase format
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "publicKeyMultibase")]
    pub public_key_multibase: Option<String>,

    /// The public key as a JSON Web Key
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "publicKeyJwk")]
    pub public_key_jwk: Option<serde_json::Value>,
}

/// A verification relationship entry, either a reference or an embedded method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerificationRelationship {
    /// The id of a verification method listed elsewhere in the document
    Reference(String),
    /// A verification method usable only for this relationship
    Embedded(VerificationMethod),
}

/// A service endpoint in a DID Document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// The unique identifier for this service
    pub id: String,

    /// The type of the service
    #[serde(rename = "type")]
    pub service_type: String,

    /// The endpoint URL or object
    #[serde(rename = "serviceEndpoint")]
    pub service_endpoint: serde_json::Value,
}

/// The kind of result a caller asks the resolver to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultType {
    /// The bare DID Document
    #[default]
    DidDocument,
    /// The DID Resolution Result envelope, not produced by this resolver
    ResolutionResult,
}

/// Selector for a specific version of a DID Document
///
/// Interpretation is left to the method backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionId {
    /// A numeric version, such as a sequence number
    Number(u64),
    /// An opaque textual version identifier
    String(String),
}

impl From<u64> for VersionId {
    fn from(value: u64) -> Self {
        VersionId::Number(value)
    }
}

impl From<&str> for VersionId {
    fn from(value: &str) -> Self {
        VersionId::String(value.to_string())
    }
}

impl From<String> for VersionId {
    fn from(value: String) -> Self {
        VersionId::String(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(single) => vec![single],
            OneOrMany::Many(many) => many,
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

fn optional_one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<OneOrMany>::deserialize(deserializer).map(|value| value.map(Vec::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DID_JSON: &str = r#"{
        "@context": "https://www.w3.org/ns/did/v1",
        "id": "did:web:localhost",
        "verificationMethod": [{
            "id": "did:web:localhost#key1",
            "type": "Ed25519VerificationKey2018",
            "controller": "did:web:localhost",
            "publicKeyJwk": {
                "kty": "OKP",
                "crv": "Ed25519",
                "x": "G80iskrv_nE69qbGLSpeOHJgmV4MKIzsy5l5iT6pCww"
            }
        }],
        "assertionMethod": ["did:web:localhost#key1"],
        "service": [{
            "id": "did:web:localhost#linked-domain",
            "type": "LinkedDomains",
            "serviceEndpoint": "https://localhost"
        }]
    }"#;

    #[test]
    fn test_from_bytes() {
        let doc = DIDDocument::from_bytes(DID_JSON.as_bytes()).unwrap();

        assert_eq!(doc.id, "did:web:localhost");
        assert_eq!(doc.context, vec!["https://www.w3.org/ns/did/v1".to_string()]);
        assert_eq!(doc.controller, None);

        let vms = doc.verification_method.unwrap();
        assert_eq!(vms.len(), 1);
        assert_eq!(vms[0].method_type, "Ed25519VerificationKey2018");
        assert!(vms[0].public_key_multibase.is_none());
        assert!(vms[0].public_key_jwk.is_some());

        assert_eq!(
            doc.assertion_method.unwrap(),
            vec![VerificationRelationship::Reference("did:web:localhost#key1".to_string())]
        );
        assert_eq!(doc.service.unwrap()[0].service_type, "LinkedDomains");
    }

    #[test]
    fn test_embedded_relationship() {
        let json = r#"{
            "@context": ["https://www.w3.org/ns/did/v1", "https://w3id.org/security/multikey/v1"],
            "id": "did:example:123",
            "controller": "did:example:bcehfew7h32f32h7af3",
            "authentication": [{
                "id": "did:example:123#key-1",
                "type": "Multikey",
                "controller": "did:example:123",
                "publicKeyMultibase": "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"
            }]
        }"#;

        let doc = DIDDocument::from_bytes(json.as_bytes()).unwrap();
        assert_eq!(doc.context.len(), 2);
        assert_eq!(doc.controller, Some(vec!["did:example:bcehfew7h32f32h7af3".to_string()]));
        assert!(matches!(
            &doc.authentication.unwrap()[0],
            VerificationRelationship::Embedded(vm) if vm.id == "did:example:123#key-1"
        ));
    }

    #[test]
    fn test_invalid_bytes() {
        let invalid_inputs = vec!["not json", "{}", "[1, 2, 3]", r#"{"id": 42}"#];

        for input in invalid_inputs {
            assert!(matches!(
                DIDDocument::from_bytes(input.as_bytes()),
                Err(ResolutionError::InvalidDocument(_))
            ));
        }
    }

    #[test]
    fn test_validate_accepts_decoded_documents() {
        let doc = DIDDocument::from_bytes(DID_JSON.as_bytes()).unwrap();
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_result_type_serde() {
        assert_eq!(ResultType::default(), ResultType::DidDocument);
        assert_eq!(serde_json::to_string(&ResultType::ResolutionResult).unwrap(), "\"resolution-result\"");
        assert_eq!(
            serde_json::from_str::<ResultType>("\"did-document\"").unwrap(),
            ResultType::DidDocument
        );
    }

    #[test]
    fn test_version_id() {
        assert_eq!(VersionId::from(3u64), VersionId::Number(3));
        assert_eq!(VersionId::from("1-QmHash"), VersionId::String("1-QmHash".to_string()));
        assert_eq!(serde_json::from_str::<VersionId>("7").unwrap(), VersionId::Number(7));
        assert_eq!(
            serde_json::from_str::<VersionId>("\"abc\"").unwrap(),
            VersionId::String("abc".to_string())
        );
    }
}
