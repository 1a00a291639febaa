//! API endpoint and credential configuration.
//!
//! Values are fixed at build time from `NOTEHUB_API_URL` and `NOTEHUB_TOKEN`
//! so the same bundle works during SSR and after hydration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use notes::DEFAULT_API_BASE_URL;

/// Resolved API root and bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    /// Build a config, normalizing the base URL and dropping a blank token.
    pub fn new(base_url: Option<&str>, token: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let token = token.map(str::trim).filter(|t| !t.is_empty()).map(ToOwned::to_owned);
        Self { base_url, token }
    }

    /// Config captured from the build environment.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("NOTEHUB_API_URL"), option_env!("NOTEHUB_TOKEN"))
    }

    /// `Authorization` header value, if a token is configured.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(notes::bearer)
    }
}
