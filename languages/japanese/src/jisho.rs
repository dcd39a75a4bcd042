use std::time::Duration;

use async_trait::async_trait;
use tango_config::lookup::LookupConfig;
use tango_lookup::{Lookup, LookupCause, LookupFailed, RawResponse, SourceMetadata};

/// Jisho.org word-search client
#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    api_url: String,
    timeout: Duration,
}

impl JishoClient {
    pub fn new(config: &LookupConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            timeout,
        })
    }

    fn failure(&self, key: &str, error: reqwest::Error) -> LookupFailed {
        let cause = if error.is_timeout() {
            LookupCause::Timeout(self.timeout)
        } else if error.is_decode() {
            LookupCause::InvalidBody(error.to_string())
        } else {
            LookupCause::Network(error)
        };
        LookupFailed::new(key, cause)
    }
}

#[async_trait]
impl Lookup for JishoClient {
    async fn lookup(&self, key: &str) -> Result<RawResponse, LookupFailed> {
        tracing::debug!("GET {}?keyword={}", self.api_url, key);
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("keyword", key)])
            .send()
            .await
            .map_err(|e| self.failure(key, e))?;

        if !response.status().is_success() {
            return Err(LookupFailed::new(
                key,
                LookupCause::Status(response.status().as_u16()),
            ));
        }

        response
            .json::<RawResponse>()
            .await
            .map_err(|e| self.failure(key, e))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Jisho".to_string(),
            url: self.api_url.clone(),
        }
    }
}
