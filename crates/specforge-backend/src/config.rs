//! Startup configuration.
//!
//! Two values are read once at startup: the service endpoint URL and the
//! public API key. Validation fails fast with a descriptive message; when
//! it fails no client is constructed and the application falls back to a
//! static configuration-error view.

use url::Url;

use crate::error::{BackendError, Result};

/// Environment variable holding the service endpoint URL.
pub const ENV_URL: &str = "SPECFORGE_BACKEND_URL";
/// Environment variable holding the public API key.
pub const ENV_KEY: &str = "SPECFORGE_BACKEND_KEY";

/// Hostname suffix every valid endpoint must carry.
const PROVIDER_SUFFIX: &str = ".supabase.co";

/// Validated backend credentials.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    url: Url,
    api_key: String,
}

impl BackendConfig {
    /// Validate raw credentials into a usable config.
    pub fn new(url: &str, api_key: &str) -> Result<Self> {
        if let Some(message) = config_error(url, api_key) {
            return Err(BackendError::Config(message));
        }
        // config_error already proved the URL parses.
        let url = Url::parse(url.trim()).map_err(|e| BackendError::Config(e.to_string()))?;
        Ok(Self {
            url,
            api_key: api_key.trim().to_string(),
        })
    }

    /// Read and validate the two startup values from the environment.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(ENV_URL).unwrap_or_default();
        let key = std::env::var(ENV_KEY).unwrap_or_default();
        Self::new(&url, &key)
    }

    /// The validated endpoint URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The endpoint as a display string, without a trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.url.as_str().trim_end_matches('/').to_string()
    }

    /// The public API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Validate raw credentials, returning a descriptive message on failure.
///
/// Checks, in order: both values present, the URL parseable, and the
/// hostname ending in the expected provider domain suffix.
#[must_use]
pub fn config_error(url: &str, api_key: &str) -> Option<String> {
    let url = url.trim();
    let api_key = api_key.trim();

    if url.is_empty() {
        return Some(format!("Missing backend URL: set {ENV_URL}."));
    }
    if api_key.is_empty() {
        return Some(format!("Missing backend API key: set {ENV_KEY}."));
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => return Some(format!("Backend URL '{url}' is not a valid URL: {err}.")),
    };

    let host = parsed.host_str().unwrap_or_default();
    if !host.ends_with(PROVIDER_SUFFIX) {
        return Some(format!(
            "Backend URL host '{host}' does not look like a Supabase project \
             (expected a hostname ending in {PROVIDER_SUFFIX})."
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_pass() {
        assert_eq!(config_error("https://abc.supabase.co", "anon-key"), None);
        let config = BackendConfig::new("https://abc.supabase.co", "anon-key").unwrap();
        assert_eq!(config.endpoint(), "https://abc.supabase.co");
    }

    #[test]
    fn absent_credentials_fail_with_the_variable_name() {
        let msg = config_error("", "key").unwrap();
        assert!(msg.contains(ENV_URL));
        let msg = config_error("https://abc.supabase.co", "  ").unwrap();
        assert!(msg.contains(ENV_KEY));
    }

    #[test]
    fn unparseable_url_fails() {
        let msg = config_error("not a url", "key").unwrap();
        assert!(msg.contains("not a valid URL"));
    }

    #[test]
    fn wrong_provider_suffix_fails() {
        let msg = config_error("https://example.com", "key").unwrap();
        assert!(msg.contains("example.com"));
        assert!(msg.contains(".supabase.co"));
    }

    #[test]
    fn no_client_is_constructed_on_invalid_config() {
        assert!(matches!(
            BackendConfig::new("https://example.com", "key"),
            Err(BackendError::Config(_))
        ));
    }
}
