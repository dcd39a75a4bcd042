use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://jisho.org/api/v1/search/words".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

/// Pause after every lookup; Jisho asks crawlers to keep it slow
fn default_delay_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    concat!("tango/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LookupConfig {
    /// Dictionary search endpoint, queried with `?keyword=<word>`
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request bound, the call is abandoned afterwards
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
            delay_ms: default_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl LookupConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = var("JISHO_API_URL").unwrap_or(defaults.api_url);

        let timeout_seconds = var("LOOKUP_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        let delay_ms = var("LOOKUP_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.delay_ms);

        let user_agent = var("LOOKUP_USER_AGENT").unwrap_or(defaults.user_agent);

        Self {
            api_url,
            timeout_seconds,
            delay_ms,
            user_agent,
        }
    }
}
