//! Authenticated controller client.
//!
//! - `auth`: token call against the controller
//! - `executor`: token attachment, session expiry detection and the single retry
//! - `request`: request templates handed to the executor

pub mod auth;
pub mod executor;
pub mod request;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::cache::{Token, TokenState, TokenStatus};
use crate::config::settings::ControllerConfig;
use crate::error::{OmadaError, Result};
use crate::observability::metrics::ClientMetrics;

/// Client for one Omada controller.
///
/// Safe to share between tasks; all callers use the same cached access token.
pub struct OmadaClient {
    http_client: Client,
    base_url: String,
    api_base: Url,
    omadac_id: String,
    client_id: String,
    client_secret: String,
    page_size: u32,
    token: TokenState,
    metrics: ClientMetrics,
}

impl OmadaClient {
    /// Build the client. No network traffic happens until the first operation.
    pub fn new(config: ControllerConfig) -> Result<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(config.disable_cert_verification)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(OmadaError::ClientBuild)?;

        let base_url = config.base_url.trim_end_matches('/').to_owned();
        let invalid = |reason: String| OmadaError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };
        let mut api_base = Url::parse(&base_url).map_err(|err| invalid(err.to_string()))?;
        api_base
            .path_segments_mut()
            .map_err(|_| invalid("cannot be used as a base".to_owned()))?
            .pop_if_empty()
            .extend(["openapi", "v1", config.omadac_id.as_str()]);

        Ok(Self {
            http_client,
            base_url,
            api_base,
            omadac_id: config.omadac_id,
            client_id: config.client_id,
            client_secret: config.client_secret,
            page_size: config.page_size,
            token: TokenState::new(),
            metrics: ClientMetrics::new()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn omadac_id(&self) -> &str {
        &self.omadac_id
    }

    /// Page size used by paginated list operations.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
    }

    pub fn metrics(&self) -> &ClientMetrics {
        &self.metrics
    }

    pub async fn token_status(&self) -> TokenStatus {
        self.token.status().await
    }

    /// Currently cached token, if any.
    pub async fn cached_token(&self) -> Option<Token> {
        self.token.snapshot().await
    }

    /// Drop the cached token; the next operation authenticates again.
    pub async fn invalidate_token(&self) {
        self.token.invalidate().await;
        self.metrics.token_active.set(0);
    }

    /// `{base}/openapi/v1/{omadacId}/{segments...}`, each segment percent-encoded.
    pub(crate) fn api_url(&self, segments: &[&str]) -> String {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url.into()
    }
}
