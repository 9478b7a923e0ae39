use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = OmadaError> = std::result::Result<T, E>;

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum OmadaError {
    /// Controller answered with something other than 200.
    #[error("unexpected response status {status}")]
    Status { status: StatusCode },

    /// Network, timeout or request construction failure.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("authentication failed")]
    Authentication(#[from] AuthenticationError),

    /// The session was reported expired again right after re-authenticating.
    #[error("could not perform request after refreshing token ({attempts} attempts)")]
    RetryExhausted { attempts: u32 },

    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),

    #[error("invalid controller url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build http client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("failed to register metrics")]
    Metrics(#[from] prometheus::Error),
}

/// Failures of the token call. None of them are retried.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("token endpoint returned status {status}")]
    Status { status: StatusCode },

    #[error("token request failed")]
    Transport(#[source] reqwest::Error),

    #[error("token response is not valid json")]
    Decode(#[source] serde_json::Error),

    #[error("token error response: {code}: {message}")]
    Rejected { code: i64, message: String },

    #[error("token response carried an empty access token")]
    EmptyToken,
}

impl AuthenticationError {
    /// Short label used for the failure metric.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthenticationError::Status { .. } => "status",
            AuthenticationError::Transport(_) => "transport",
            AuthenticationError::Decode(_) => "decode",
            AuthenticationError::Rejected { .. } => "rejected",
            AuthenticationError::EmptyToken => "empty_token",
        }
    }
}

impl OmadaError {
    /// True for failures reported by the transport rather than the controller payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, OmadaError::Status { .. } | OmadaError::Transport(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, OmadaError::Authentication(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_exhausted_keeps_the_original_wording() {
        let err = OmadaError::RetryExhausted { attempts: 2 };
        assert!(err
            .to_string()
            .starts_with("could not perform request after refreshing token"));
        assert!(!err.is_transport());
    }

    #[test]
    fn rejected_token_reports_code_and_message() {
        let err: OmadaError = AuthenticationError::Rejected {
            code: -44106,
            message: "Invalid client credentials.".to_owned(),
        }
        .into();
        assert!(err.is_authentication());
        assert_eq!(err.to_string(), "authentication failed");
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "authentication failed: token error response: -44106: Invalid client credentials."
        );
    }

    #[test]
    fn source_is_printed_once_in_the_chain() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause_text = cause.to_string();
        let err = OmadaError::from(cause);

        assert_eq!(err.to_string(), "failed to decode response body");
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches(&cause_text).count(), 1, "{chain}");
    }

    #[test]
    fn status_error_is_transport() {
        let err = OmadaError::Status { status: StatusCode::BAD_GATEWAY };
        assert!(err.is_transport());
    }
}
