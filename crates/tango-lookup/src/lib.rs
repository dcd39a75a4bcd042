use std::time::Duration;

use tango_types::SeedKey;

/// Unparsed document returned by a lookup source, possibly `null`
pub type RawResponse = serde_json::Value;

/// Lookup source interface
#[async_trait::async_trait]
pub trait Lookup: Send + Sync {
    /// Query the source once for `key`.
    ///
    /// Implementations make exactly one attempt and keep no cache.
    async fn lookup(&self, key: &str) -> Result<RawResponse, LookupFailed>;

    /// Source metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub url: String,
}

/// A single key could not be looked up
#[derive(Debug, thiserror::Error)]
#[error("lookup failed for {key}: {cause}")]
pub struct LookupFailed {
    pub key: SeedKey,
    #[source]
    pub cause: LookupCause,
}

impl LookupFailed {
    pub fn new(key: impl Into<SeedKey>, cause: impl Into<LookupCause>) -> Self {
        Self {
            key: key.into(),
            cause: cause.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupCause {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid response body: {0}")]
    InvalidBody(String),
}
