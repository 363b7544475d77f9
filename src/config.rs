// Runtime configuration.
// Reads the target account and access token from the environment.

use std::time::Duration;

use crate::error::{FolioError, Result};

/// Account shown when GITHUB_USERNAME is not set.
pub const DEFAULT_USERNAME: &str = "devFarzad";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// How long fetched data stays fresh: 1 hour.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the data layer.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Account whose profile and repositories are shown.
    pub username: String,
    /// Optional access token. Raises the rate limit when present.
    pub token: Option<String>,
    /// Base URL of the GitHub REST API.
    pub api_base: String,
    /// Freshness window for cached responses.
    pub cache_ttl: Duration,
    /// Additional attempts after a retryable failure.
    pub retries: u32,
    /// Fixed pause between attempts.
    pub retry_delay: Duration,
    /// Upper bound on a single HTTP request.
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Settings {
    /// Load settings from GITHUB_USERNAME and GITHUB_TOKEN.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let settings = Self {
            token: non_empty("GITHUB_TOKEN"),
            ..Self::default()
        };
        match non_empty("GITHUB_USERNAME") {
            Some(username) => settings.with_username(username),
            None => Ok(settings),
        }
    }

    /// Replace the account handle, rejecting anything that would not form a
    /// single URL path segment.
    pub fn with_username(mut self, username: impl Into<String>) -> Result<Self> {
        let username = username.into().trim().to_string();
        if username.is_empty() || username.contains('/') || username.contains(char::is_whitespace)
        {
            return Err(FolioError::Config(format!(
                "not a valid account handle: {username:?}"
            )));
        }
        self.username = username;
        Ok(self)
    }

    /// Point the client at a different API host.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Override retry count and delay.
    pub fn with_retries(mut self, retries: u32, retry_delay: Duration) -> Self {
        self.retries = retries;
        self.retry_delay = retry_delay;
        self
    }

    /// Whether requests carry a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
