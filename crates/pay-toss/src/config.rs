//! # Toss Payments Configuration
//!
//! Credentials and options for the Toss Payments integration. Construction
//! fails immediately on missing credentials or an unsupported API version.

use serde::Deserialize;
use serde_json::{Map, Value};
use session_core::ProcessorError;
use std::env;

/// The only Toss Payments API version this processor speaks
pub const SUPPORTED_API_VERSION: &str = "2022-11-16";

/// Production API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.tosspayments.com";

/// Toss Payments API configuration
#[derive(Debug, Clone)]
pub struct TossConfig {
    /// Secret key (test_sk_... or live_sk_...)
    pub secret_key: String,

    /// API version, must equal [`SUPPORTED_API_VERSION`]
    pub api_version: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Log request/response payloads of every operation
    pub debug: bool,
}

/// Flat TOML form of the configuration
#[derive(Debug, Deserialize)]
struct TossConfigFile {
    secret_key: Option<String>,
    api_version: Option<String>,
    #[serde(default)]
    debug: bool,
    api_base_url: Option<String>,
}

impl TossConfig {
    /// Create and validate a config.
    pub fn new(
        secret_key: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self, ProcessorError> {
        let secret_key = secret_key.into();
        let api_version = api_version.into();

        if secret_key.is_empty() || api_version.is_empty() {
            return Err(ProcessorError::Configuration(
                "Failed to detect secret key or api version".to_string(),
            ));
        }

        if api_version != SUPPORTED_API_VERSION {
            return Err(ProcessorError::Configuration(format!(
                "Toss Payments api version {} is not supported, only {} is",
                api_version, SUPPORTED_API_VERSION
            )));
        }

        Ok(Self {
            secret_key,
            api_version,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debug: false,
        })
    }

    /// Load from the host's plugin options.
    ///
    /// Recognized keys:
    /// - `tosspayments_key` (required)
    /// - `tosspayments_version` (required)
    /// - `is_debug` (optional)
    pub fn from_options(options: &Map<String, Value>) -> Result<Self, ProcessorError> {
        let key = options.get("tosspayments_key").and_then(Value::as_str);
        let version = options.get("tosspayments_version").and_then(Value::as_str);

        let (Some(key), Some(version)) = (key, version) else {
            return Err(ProcessorError::Configuration(
                "Toss Payments processor needs tosspayments_key and tosspayments_version in its options"
                    .to_string(),
            ));
        };

        let debug = options
            .get("is_debug")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Ok(Self::new(key, version)?.with_debug(debug))
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `TOSSPAYMENTS_SECRET_KEY`
    /// - `TOSSPAYMENTS_VERSION`
    ///
    /// Optional: `TOSSPAYMENTS_DEBUG` (`true`/`1`)
    pub fn from_env() -> Result<Self, ProcessorError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ProcessorError> {
        let secret_key = var("TOSSPAYMENTS_SECRET_KEY").ok_or_else(|| {
            ProcessorError::Configuration("TOSSPAYMENTS_SECRET_KEY not set".to_string())
        })?;

        let api_version = var("TOSSPAYMENTS_VERSION").ok_or_else(|| {
            ProcessorError::Configuration("TOSSPAYMENTS_VERSION not set".to_string())
        })?;

        let debug = var("TOSSPAYMENTS_DEBUG")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self::new(secret_key, api_version)?.with_debug(debug))
    }

    /// Load from a TOML document with `secret_key`, `api_version` and
    /// optional `debug` / `api_base_url`.
    pub fn from_toml_str(content: &str) -> Result<Self, ProcessorError> {
        let file: TossConfigFile = toml::from_str(content)
            .map_err(|e| ProcessorError::Configuration(format!("Invalid config file: {}", e)))?;

        let config = Self::new(
            file.secret_key.unwrap_or_default(),
            file.api_version.unwrap_or_default(),
        )?
        .with_debug(file.debug);

        Ok(match file.api_base_url {
            Some(url) => config.with_api_base_url(url),
            None => config,
        })
    }

    /// Check if using a test key
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("test_sk_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Basic {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: toggle payload logging
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
