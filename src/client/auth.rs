use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::api::envelope::ApiResponse;
use crate::cache::Token;
use crate::client::OmadaClient;
use crate::error::{AuthenticationError, Result};
use crate::utils::constants::{AUTHORIZE_PATH, GRANT_TYPE_CLIENT_CREDENTIALS};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessTokenResult {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
}

pub type AccessTokenResponse = ApiResponse<AccessTokenResult>;

impl OmadaClient {
    /// Raw client credentials token call. Does not touch the cached token.
    pub async fn get_token(&self) -> Result<AccessTokenResponse> {
        Ok(self.request_token().await?)
    }

    async fn request_token(&self) -> Result<AccessTokenResponse, AuthenticationError> {
        let url = format!("{}{}", self.base_url, AUTHORIZE_PATH);
        debug!(url = %url, "requesting access token");

        let response = self
            .http_client
            .post(&url)
            .query(&[
                ("grant_type", GRANT_TYPE_CLIENT_CREDENTIALS),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .json(&json!({ "omadacId": self.omadac_id }))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() != StatusCode::OK {
            return Err(AuthenticationError::Status { status: response.status() });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(AuthenticationError::Decode)
    }

    /// Token call used by the cache: anything but a usable token is an error.
    pub(crate) async fn authenticate(&self) -> Result<Token> {
        self.metrics.auth_requests.inc();

        let outcome = self.request_token().await.and_then(|response| {
            if !response.is_success() {
                return Err(AuthenticationError::Rejected {
                    code: response.error_code(),
                    message: response.message().to_owned(),
                });
            }
            if response.result.access_token.is_empty() {
                return Err(AuthenticationError::EmptyToken);
            }
            let result = response.result;
            Ok(Token::new(
                result.access_token,
                result.token_type,
                result.expires_in,
                result.refresh_token,
            ))
        });

        match outcome {
            Ok(token) => {
                self.metrics.token_active.set(1);
                Ok(token)
            }
            Err(err) => {
                self.metrics.auth_failures.with_label_values(&[err.reason()]).inc();
                Err(err.into())
            }
        }
    }
}

// the request url carries the client secret in its query
fn transport_error(err: reqwest::Error) -> AuthenticationError {
    AuthenticationError::Transport(err.without_url())
}
