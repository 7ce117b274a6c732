//! Per-call resolution options.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::types::{ResultType, VersionId};

/// Options for a single DID resolution
///
/// Built fresh for each call. Setting the same field twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveOptions {
    /// Kind of result to produce
    pub result_type: ResultType,

    /// Specific version to resolve, interpreted by the method backend
    pub version_id: Option<VersionId>,

    /// Point in time to resolve the DID at, as RFC 3339 text
    pub version_time: Option<String>,

    /// Whether the backend must bypass any cache
    pub no_cache: bool,
}

impl ResolveOptions {
    /// Creates options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a certain type of result
    pub fn with_result_type(mut self, result_type: ResultType) -> Self {
        self.result_type = result_type;
        self
    }

    /// Requests a specific version of the DID Document
    pub fn with_version_id(mut self, version_id: impl Into<VersionId>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// Requests the DID Document as it was at `version_time`
    ///
    /// The timestamp is stored in its RFC 3339 form with second precision,
    /// using `Z` for UTC.
    pub fn with_version_time(mut self, version_time: impl Into<DateTime<FixedOffset>>) -> Self {
        let version_time = version_time.into();
        self.version_time = Some(version_time.to_rfc3339_opts(SecondsFormat::Secs, true));
        self
    }

    /// Turns caching on or off
    pub fn with_no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    /// Version time as handed to backends, empty when unset
    pub fn version_time_str(&self) -> &str {
        self.version_time.as_deref().unwrap_or_default()
    }
}
