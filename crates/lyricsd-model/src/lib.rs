use serde::{Deserialize, Serialize};

/// Query-string parameters accepted by the fetch-lyrics endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LyricsQuery {
    /// Song page URL to fetch. Untrusted; checked for presence only.
    pub url: Option<String>,
}

impl LyricsQuery {
    /// The URL, if present and non-empty. An empty string counts as missing.
    pub fn song_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Success response body: `{"lyrics": "..."}`.
///
/// `lyrics` is the trimmed text of the first lyrics container on the page,
/// or the empty string when the page has none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LyricsEnvelope {
    pub lyrics: String,
}

/// Failure response body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    /// 400 body for a request with no usable `url` parameter.
    pub fn missing_url() -> Self {
        Self {
            error: "Missing song URL".to_string(),
        }
    }

    /// 500 body for any fetch or parse failure.
    pub fn fetch_failed() -> Self {
        Self {
            error: "Failed to fetch lyrics".to_string(),
        }
    }
}
