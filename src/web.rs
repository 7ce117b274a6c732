//! `did:web` method backend.
//!
//! Maps `did:web` identifiers to the HTTPS location of their DID Document and
//! fetches it. Register it on a resolver under the `web` method name:
//!
//! ```no_run
//! use did_resolver::{Resolver, WebMethod};
//!
//! let resolver = Resolver::builder()
//!     .with_did_method("web", WebMethod::https())
//!     .build();
//! let document = resolver.resolve("did:web:example.com", None);
//! ```

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT, CACHE_CONTROL};
use reqwest::StatusCode;
use url::Url;

use crate::error::{BoxError, WebError};
use crate::method::DidMethod;
use crate::types::VersionId;

const DID_WEB_PREFIX: &str = "did:web:";

/// Backend fetching `did:web` DID Documents over HTTP(S)
#[derive(Debug, Clone)]
pub struct WebMethod {
    /// HTTP client for fetching DID Documents
    client: Client,
    /// URL scheme, `https` outside of tests
    scheme: &'static str,
}

impl WebMethod {
    /// Creates a backend fetching over HTTPS
    pub fn https() -> Self {
        Self::with_client(Client::new(), "https")
    }

    /// Creates a backend fetching over plain HTTP, for local servers
    pub fn http() -> Self {
        Self::with_client(Client::new(), "http")
    }

    fn with_client(client: Client, scheme: &'static str) -> Self {
        Self { client, scheme }
    }

    /// Converts a `did:web` identifier to the URL of its DID Document
    ///
    /// The domain must consist of host characters only; path segments are
    /// percent-encoded as needed.
    pub fn to_url(&self, did: &str) -> Result<Url, WebError> {
        let invalid = || WebError::InvalidDid(did.to_string());

        let id = did
            .strip_prefix(DID_WEB_PREFIX)
            .filter(|id| !id.is_empty())
            .ok_or_else(invalid)?;

        let mut segments = id.split(':');
        let host_and_port = segments
            .next()
            .unwrap_or_default()
            .replace("%3A", ":")
            .replace("%3a", ":");
        let path: Vec<&str> = segments.collect();

        // Handle port if present
        let (domain, port) = match host_and_port.split_once(':') {
            Some((domain, port)) => (
                domain,
                Some(port.parse::<u16>().map_err(|_| WebError::InvalidPort(port.to_string()))?),
            ),
            None => (host_and_port.as_str(), None),
        };
        if !is_host_name(domain) {
            return Err(invalid());
        }
        if path.iter().any(|segment| segment.is_empty() || *segment == "." || *segment == "..") {
            return Err(invalid());
        }

        let mut url = Url::parse(&format!("{}://localhost", self.scheme))?;
        url.set_host(Some(domain))?;
        url.set_port(port).map_err(|_| invalid())?;
        {
            let mut url_path = url.path_segments_mut().map_err(|_| invalid())?;
            url_path.clear();
            if path.is_empty() {
                url_path.push(".well-known");
            } else {
                url_path.extend(&path);
            }
            url_path.push("did.json");
        }

        Ok(url)
    }

    fn fetch(&self, url: Url, no_cache: bool) -> Result<Vec<u8>, WebError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/did+json, application/json"));
        if no_cache {
            request = request.header(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        }

        let response = request.send().map_err(|e| {
            tracing::error!("error sending DID resolution request to {url}: {e}");
            WebError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::trace!("no DID Document at {url}");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(WebError::NonSuccessResponse(status));
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Whether `domain` is made of DNS host characters only
fn is_host_name(domain: &str) -> bool {
    !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

impl Default for WebMethod {
    fn default() -> Self {
        Self::https()
    }
}

impl DidMethod for WebMethod {
    fn read(
        &self,
        did: &str,
        version_id: Option<&VersionId>,
        version_time: &str,
        no_cache: bool,
    ) -> Result<Vec<u8>, BoxError> {
        if version_id.is_some() || !version_time.is_empty() {
            tracing::trace!("did:web has no version history, ignoring version selectors for {did}");
        }

        let url = self.to_url(did)?;
        tracing::debug!("fetching DID Document for {did} from {url}");
        Ok(self.fetch(url, no_cache)?)
    }
}
