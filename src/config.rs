//! Application configuration
//!
//! A single immutable value provided to the component tree through the Dioxus
//! context. Defaults come from `shared::constants` and can be overridden at
//! build time with `BABYSTEPS_API_URL`, `BABYSTEPS_TOP_K` and
//! `BABYSTEPS_TIMEOUT_SECS` (the WASM bundle has no process environment).

use std::time::Duration;

use crate::domain::models::CollectionPolicy;
use crate::shared::constants::{
    API_BASE_URL, DEFAULT_TOP_K, RESERVED_COLLECTION, REQUEST_TIMEOUT, THEME_STORAGE_KEY,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub reserved_collection: Option<String>,
    pub top_k: usize,
    pub theme_storage_key: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Defaults plus any overrides baked in at compile time
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("BABYSTEPS_API_URL"),
            option_env!("BABYSTEPS_TOP_K"),
            option_env!("BABYSTEPS_TIMEOUT_SECS"),
        )
    }

    /// Blank or unparsable values keep the current setting
    fn with_overrides(
        self,
        base_url: Option<&str>,
        top_k: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Self {
        let mut config = self;

        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config = config.with_base_url(url);
        }
        if let Some(top_k) = top_k
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|top_k| *top_k > 0)
        {
            config = config.with_top_k(top_k);
        }
        if let Some(secs) = timeout_secs
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        config
    }

    /// Selection rule derived from the reserved collection
    pub fn collection_policy(&self) -> CollectionPolicy {
        CollectionPolicy::new(self.reserved_collection.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            reserved_collection: Some(RESERVED_COLLECTION.to_string()),
            top_k: DEFAULT_TOP_K,
            theme_storage_key: THEME_STORAGE_KEY.to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend_contract() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.reserved_collection.as_deref(), Some("slack"));
        assert_eq!(config.top_k, 5);
        assert_eq!(config.theme_storage_key, "darkMode");
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = AppConfig::default().with_overrides(
            Some(" http://kb.internal:9000 "),
            Some("3"),
            Some("5"),
        );

        assert_eq!(config.api_base_url, "http://kb.internal:9000");
        assert_eq!(config.top_k, 3);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.reserved_collection.as_deref(), Some("slack"));
    }

    #[test]
    fn test_invalid_overrides_keep_defaults() {
        let config = AppConfig::default().with_overrides(Some("  "), Some("0"), Some("soon"));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::default().with_overrides(None, Some("-1"), Some("0"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_policy_without_reserved_collection() {
        let config = AppConfig {
            reserved_collection: None,
            ..AppConfig::default()
        };
        assert!(config.collection_policy().is_selectable("slack"));
    }
}
