//! Archive download

use super::error::ProbeError;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Default upper bound for a single archive download
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Retrieves the raw bytes behind a URL
pub trait ArchiveFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ProbeError>;
}

impl<T: ArchiveFetcher + ?Sized> ArchiveFetcher for &T {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ProbeError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher with a fixed timeout and no retries
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn client(&self) -> reqwest::Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_TIMEOUT)
    }
}

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ProbeError> {
        debug!(url, timeout_secs = self.timeout.as_secs(), "Downloading archive");

        let fetch_error = |e: reqwest::Error| ProbeError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client()
            .map_err(fetch_error)?
            .get(url)
            .send()
            .map_err(fetch_error)?;

        if !response.status().is_success() {
            return Err(ProbeError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().map_err(fetch_error)?;
        if bytes.is_empty() {
            return Err(ProbeError::EmptyBody {
                url: url.to_string(),
            });
        }

        debug!(url, bytes = bytes.len(), "Archive downloaded");
        Ok(bytes.to_vec())
    }
}
