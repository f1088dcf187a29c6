//! Blocking HTTP transport.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::Transport;
use crate::config::{DEFAULT_SCHEME, DOCUMENTS_ENDPOINT, REQUEST_TIMEOUT};
use crate::error::FetchError;

/// Transport that talks to the device's web interface.
///
/// Every request is `POST <base>/documents/<location>` with an empty body.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `host` (e.g. `"10.11.99.1"` or `"localhost:8080"`).
    ///
    /// Hosts without a scheme get `http://`.
    pub fn new(host: &str) -> Result<Self, FetchError> {
        let base_url = Self::base_url_for(host);
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::transport(base_url.clone(), e))?;
        Ok(Self { client, base_url })
    }

    /// Normalize a host into a base URL without a trailing slash.
    pub fn base_url_for(host: &str) -> String {
        let host = host.trim().trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else {
            format!("{}{}", DEFAULT_SCHEME, host)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Listing URL for a location token.
    pub fn listing_url(&self, location: &str) -> String {
        format!("{}/{}/{}", self.base_url, DOCUMENTS_ENDPOINT, location)
    }
}

impl Transport for HttpTransport {
    fn request(&self, location: &str) -> Result<String, FetchError> {
        let url = self.listing_url(location);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "text/plain")
            .send()
            .map_err(|e| FetchError::transport(url.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|e| FetchError::transport(url, e))
    }
}
