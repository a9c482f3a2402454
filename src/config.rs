//! Client configuration.
//!
//! Credentials and connection settings can be supplied directly, read from
//! the environment, or loaded from a YAML file:
//!
//! ```yaml
//! username: shop@example.com
//! api_password: s3cret
//! api_key: 00000000-0000-0000-0000-000000000000
//! base_url: https://app.billbee.io/api/v1   # optional
//! timeout_secs: 30                          # optional
//! ```
//!
//! Environment variables: `BILLBEE_USERNAME`, `BILLBEE_API_PASSWORD`,
//! `BILLBEE_API_KEY`, `BILLBEE_BASE_URL`, `BILLBEE_HTTP_TIMEOUT_SECS`,
//! `BILLBEE_PROXY_URL`. When no password is set, the OS keyring entry
//! `billbee/<username>` is consulted.

use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://app.billbee.io/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const KEYRING_SERVICE: &str = "billbee";

#[derive(Clone)]
pub struct BillbeeConfig {
    pub username: String,
    pub api_password: String,
    pub api_key: String,
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP transport.
    pub timeout: Duration,
    pub user_agent: String,
    pub proxy_url: Option<String>,
}

impl BillbeeConfig {
    pub fn new(
        username: impl Into<String>,
        api_password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            api_password: api_password.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
            proxy_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Build from `BILLBEE_*` environment variables, falling back to the OS
    /// keyring for the API password.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        if config.api_password.is_empty() && !config.username.is_empty() {
            if let Some(password) = password_from_keyring(&config.username) {
                config.api_password = password;
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(
            lookup("BILLBEE_USERNAME").unwrap_or_default(),
            lookup("BILLBEE_API_PASSWORD").unwrap_or_default(),
            lookup("BILLBEE_API_KEY").unwrap_or_default(),
        );
        if let Some(url) = lookup("BILLBEE_BASE_URL").filter(|s| !s.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(secs) = lookup("BILLBEE_HTTP_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config.proxy_url = lookup("BILLBEE_PROXY_URL").filter(|s| !s.trim().is_empty());
        config
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(yaml).map_err(|e| {
            Error::configuration_with_context(
                "Invalid configuration file",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("config"),
            )
        })?;
        let mut config = Self::new(
            file.username,
            file.api_password.unwrap_or_default(),
            file.api_key,
        );
        if let Some(url) = file.base_url {
            config.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(ua) = file.user_agent {
            config.user_agent = ua;
        }
        config.proxy_url = file.proxy_url;
        if config.api_password.is_empty() && !config.username.is_empty() {
            if let Some(password) = password_from_keyring(&config.username) {
                config.api_password = password;
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Check required credentials and the base URL.
    pub fn validate(&self) -> Result<()> {
        require(&self.username, "Username is required", "username")?;
        require(&self.api_password, "API password is required", "api_password")?;
        require(&self.api_key, "API key is required", "api_key")?;

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                "Base URL is not a valid URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(e.to_string())
                    .with_source("config"),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "Base URL must use http or https",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(format!("scheme: {}", parsed.scheme()))
                    .with_source("config"),
            ));
        }
        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "Timeout must be greater than zero",
                ErrorContext::new()
                    .with_field_path("timeout")
                    .with_source("config"),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for BillbeeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BillbeeConfig")
            .field("username", &self.username)
            .field("api_password", &"<redacted>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("proxy_url", &self.proxy_url)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    username: String,
    api_password: Option<String>,
    api_key: String,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
    proxy_url: Option<String>,
}

fn require(value: &str, message: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::configuration_with_context(
            message,
            ErrorContext::new()
                .with_field_path(field)
                .with_source("config"),
        ));
    }
    Ok(())
}

fn default_user_agent() -> String {
    format!("billbee-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn password_from_keyring(username: &str) -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, username).ok()?;
    entry.get_password().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn message(err: Error) -> String {
        match err {
            Error::Configuration { message, .. } => message,
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let config = BillbeeConfig::new("user", "pw", "key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("billbee-rs/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_credentials_are_rejected_in_order() {
        let err = BillbeeConfig::new("", "pw", "key").validate().unwrap_err();
        assert_eq!(message(err), "Username is required");
        let err = BillbeeConfig::new("user", "", "key").validate().unwrap_err();
        assert_eq!(message(err), "API password is required");
        let err = BillbeeConfig::new("user", "pw", " ").validate().unwrap_err();
        assert_eq!(message(err), "API key is required");
    }

    #[test]
    fn base_url_must_be_http() {
        let err = BillbeeConfig::new("user", "pw", "key")
            .with_base_url("ftp://example.com")
            .validate()
            .unwrap_err();
        assert_eq!(message(err), "Base URL must use http or https");

        let err = BillbeeConfig::new("user", "pw", "key")
            .with_base_url("not a url")
            .validate()
            .unwrap_err();
        assert_eq!(message(err), "Base URL is not a valid URL");
    }

    #[test]
    fn lookup_reads_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BILLBEE_USERNAME", "shop"),
            ("BILLBEE_API_PASSWORD", "pw"),
            ("BILLBEE_API_KEY", "key"),
            ("BILLBEE_BASE_URL", "http://localhost:8080/api/v1"),
            ("BILLBEE_HTTP_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();
        let config = BillbeeConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.username, "shop");
        assert_eq!(config.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.proxy_url, None);
    }

    #[test]
    fn yaml_config() {
        let config = BillbeeConfig::from_yaml_str(
            "username: shop\napi_password: pw\napi_key: key\ntimeout_secs: 10\n",
        )
        .unwrap();
        assert_eq!(config.username, "shop");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn yaml_unknown_field_is_rejected() {
        let err = BillbeeConfig::from_yaml_str(
            "username: shop\napi_password: pw\napi_key: key\nretries: 3\n",
        )
        .unwrap_err();
        assert_eq!(message(err), "Invalid configuration file");
    }

    #[test]
    fn debug_redacts_secrets() {
        let rendered = format!("{:?}", BillbeeConfig::new("user", "hunter2", "abc-key"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("abc-key"));
    }
}
