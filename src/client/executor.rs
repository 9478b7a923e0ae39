use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::envelope::Envelope;
use crate::client::request::RequestTemplate;
use crate::client::OmadaClient;
use crate::error::{OmadaError, Result};
use crate::observability::metrics::{
    OUTCOME_DECODE, OUTCOME_SESSION_EXPIRED, OUTCOME_STATUS, OUTCOME_SUCCESS, OUTCOME_TRANSPORT,
};
use crate::utils::constants::{ACCESS_TOKEN_PREFIX, MAX_REQUEST_ATTEMPTS};

impl OmadaClient {
    /// Perform an authenticated call and decode the response into `T`.
    ///
    /// A token is acquired first when none is cached. The controller reports a
    /// rejected token with status 200 and the session expired `errorCode`; in
    /// that case the rejected token is dropped, unless a concurrent caller has
    /// already replaced it, and the call is repeated once with a current one. Any other `errorCode` is decoded into `T` for the caller to inspect.
    pub async fn execute<T: DeserializeOwned>(&self, template: &RequestTemplate) -> Result<T> {
        let method = template.method.as_str();

        for attempt in 1..=MAX_REQUEST_ATTEMPTS {
            let token = self.token.ensure_token(|| self.authenticate()).await?;

            debug!(method, url = %template.url, attempt, "sending request");
            let timer = self
                .metrics
                .api_request_duration
                .with_label_values(&[method])
                .start_timer();
            let sent = template
                .build(&self.http_client)
                .header(AUTHORIZATION, format!("{}{}", ACCESS_TOKEN_PREFIX, token))
                .send()
                .await;
            timer.observe_duration();

            let response = sent.inspect_err(|_| self.metrics.observe_request(method, OUTCOME_TRANSPORT))?;

            // errors come back as 200 too, anything else is a transport failure
            if response.status() != StatusCode::OK {
                self.metrics.observe_request(method, OUTCOME_STATUS);
                return Err(OmadaError::Status { status: response.status() });
            }

            let body = response
                .bytes()
                .await
                .inspect_err(|_| self.metrics.observe_request(method, OUTCOME_TRANSPORT))?;

            let envelope: Envelope = serde_json::from_slice(&body)
                .inspect_err(|_| self.metrics.observe_request(method, OUTCOME_DECODE))?;

            if envelope.is_session_expired() {
                self.metrics.observe_request(method, OUTCOME_SESSION_EXPIRED);
                self.metrics.session_expired.inc();
                // another caller may have refreshed it already
                if self.token.invalidate_if(&token).await {
                    self.metrics.token_active.set(0);
                }
                warn!(url = %template.url, attempt, "access token rejected as expired");
                continue;
            }

            let decoded = serde_json::from_slice(&body)
                .inspect_err(|_| self.metrics.observe_request(method, OUTCOME_DECODE))?;
            self.metrics.observe_request(method, OUTCOME_SUCCESS);
            return Ok(decoded);
        }

        self.metrics.retry_exhausted.inc();
        Err(OmadaError::RetryExhausted { attempts: MAX_REQUEST_ATTEMPTS })
    }
}
