use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

const USER_AGENT: &str = concat!("lyricsd/", env!("CARGO_PKG_VERSION"), " (lyrics fetch service)");

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("could not build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Fetches the text body of a remote page.
///
/// The handler depends on this trait rather than on reqwest directly so
/// tests can substitute a stub that records calls.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError>;
}

/// reqwest-backed [`PageFetcher`].
///
/// The client is built once and reused across requests. Upstream HTTP error
/// statuses are not errors here: the body text is returned either way, and
/// only transport failures (connect, timeout, body read) surface as
/// [`ScrapeError`].
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given per-request timeout.
    ///
    /// `None` leaves the client at reqwest's default of no timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ScrapeError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ScrapeError::ClientBuild)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ScrapeError::Request)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, %status, "Upstream returned non-success status");
        }

        response.text().await.map_err(ScrapeError::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds_without_timeout() {
        assert!(HttpFetcher::new(None).is_ok());
    }

    #[test]
    fn test_fetcher_builds_with_timeout() {
        assert!(HttpFetcher::new(Some(Duration::from_secs(30))).is_ok());
    }
}
