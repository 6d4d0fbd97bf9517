//! Build-time client configuration.
//!
//! The app runs in the browser, so there is no runtime environment to read.
//! Values come from `option_env!` at compile time, falling back to the
//! defaults the backend ships with.

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub poll_interval: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// `QA_API_BASE` and `QA_POLL_SECS` as set when the crate was built.
    pub fn from_build_env() -> Self {
        let mut config = Self::new(option_env!("QA_API_BASE").unwrap_or(DEFAULT_API_BASE));
        if let Some(secs) = option_env!("QA_POLL_SECS").and_then(|s| s.parse::<u64>().ok()) {
            if secs > 0 {
                config.poll_interval = Duration::from_secs(secs);
            }
        }
        config
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        assert_eq!(ApiConfig::new("http://qa.internal:9000//").base_url, "http://qa.internal:9000");
    }

    #[test]
    fn test_blank_base_falls_back() {
        assert_eq!(ApiConfig::new("  ").base_url, DEFAULT_API_BASE);
    }
}
