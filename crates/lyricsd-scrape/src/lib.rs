pub mod extract;
pub mod fetch;

pub use extract::extract_lyrics;
pub use fetch::{HttpFetcher, PageFetcher, ScrapeError};

/// Fetch a song page and extract its lyrics text.
///
/// One outbound GET, one parse. Any transport failure surfaces as a
/// [`ScrapeError`]; a page with no lyrics container is still a success and
/// yields the empty string.
pub async fn fetch_lyrics(fetcher: &dyn PageFetcher, url: &str) -> Result<String, ScrapeError> {
    tracing::info!(url = %url, "Fetching song page");
    let html = fetcher.fetch_text(url).await?;
    tracing::info!(bytes = html.len(), "Received HTML");

    let lyrics = extract::extract_lyrics(&html);
    tracing::info!(chars = lyrics.len(), "Extracted lyrics text");

    Ok(lyrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixtureFetcher {
        html: String,
    }

    #[async_trait]
    impl PageFetcher for FixtureFetcher {
        async fn fetch_text(&self, _url: &str) -> Result<String, ScrapeError> {
            Ok(self.html.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher for FailingFetcher {
        async fn fetch_text(&self, _url: &str) -> Result<String, ScrapeError> {
            Err(ScrapeError::Other("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_fetch_and_extract() {
        let fetcher = FixtureFetcher {
            html: r#"<div data-lyrics-container>  Hello  </div>"#.to_string(),
        };
        let lyrics = fetch_lyrics(&fetcher, "https://example.com/song").await.unwrap();
        assert_eq!(lyrics, "Hello");
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let result = fetch_lyrics(&FailingFetcher, "https://example.com/song").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_containerless_page_is_success() {
        let fetcher = FixtureFetcher {
            html: "<html><body><p>404 not found</p></body></html>".to_string(),
        };
        let lyrics = fetch_lyrics(&fetcher, "https://example.com/song").await.unwrap();
        assert_eq!(lyrics, "");
    }
}
