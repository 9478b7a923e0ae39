use std::fmt;

use serde::Deserialize;

use crate::utils::constants::{DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_PAGE_SIZE};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub controller: ControllerConfig,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Controller connection
/// ================================
#[derive(Deserialize, Clone)]
pub struct ControllerConfig {
    /// e.g. `https://omada.local:8043`, without trailing slash
    pub base_url: String,
    pub omadac_id: String,
    pub client_id: String,
    pub client_secret: String,
    /// accept self-signed controller certificates
    #[serde(default)]
    pub disable_cert_verification: bool,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// per-call transport timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ControllerConfig {
    pub fn new(
        base_url: impl Into<String>,
        omadac_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            omadac_id: omadac_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            disable_cert_verification: false,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }

    pub fn with_disable_cert_verification(mut self, disable: bool) -> Self {
        self.disable_cert_verification = disable;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

// client_secret stays out of logs
impl fmt::Debug for ControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerConfig")
            .field("base_url", &self.base_url)
            .field("omadac_id", &self.omadac_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("disable_cert_verification", &self.disable_cert_verification)
            .field("page_size", &self.page_size)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

fn default_log_format() -> LogFormat {
    LogFormat::from_env()
}
