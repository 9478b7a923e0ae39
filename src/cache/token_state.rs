use std::future::Future;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::token::{Token, TokenStatus, TOKEN_VALUE_STUB};
use crate::error::{AuthenticationError, Result};

#[derive(Debug)]
struct Inner {
    status: TokenStatus,
    token: Option<Token>,
}

/// Cached access token of one client.
///
/// Every read and write goes through the same lock. `ensure_token` keeps the
/// lock for the whole authentication round-trip, so concurrent callers that
/// find the state absent queue behind a single token request.
#[derive(Debug)]
pub struct TokenState {
    inner: Mutex<Inner>,
}

impl Default for TokenState {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                status: TokenStatus::Absent,
                token: None,
            }),
        }
    }

    /// Run `authenticate` if no token is held, store its result and return the
    /// value held when the lock is released.
    ///
    /// On failure the state stays absent and the error is returned unchanged.
    pub async fn ensure_token<F, Fut>(&self, authenticate: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Token>>,
    {
        let mut inner = self.inner.lock().await;
        if inner.status == TokenStatus::Active {
            if let Some(token) = &inner.token {
                return Ok(token.value.to_owned());
            }
        }

        debug!("no active token, authenticating");
        let token = authenticate().await?;
        if token.value.is_empty() {
            return Err(AuthenticationError::EmptyToken.into());
        }

        info!(token_type = %token.token_type, expires_in = token.expires_in, "access token acquired");
        let value = token.value.to_owned();
        inner.token = Some(token);
        inner.status = TokenStatus::Active;
        Ok(value)
    }

    /// Current token value, empty when none is held.
    pub async fn current_value(&self) -> String {
        self.inner
            .lock()
            .await
            .token
            .as_ref()
            .map(|token| token.value.to_owned())
            .unwrap_or_else(|| TOKEN_VALUE_STUB.to_owned())
    }

    pub async fn invalidate(&self) {
        let mut inner = self.inner.lock().await;
        inner.status = TokenStatus::Absent;
        inner.token = None;
    }

    /// Drop the held token only if it is still `rejected`.
    ///
    /// A caller whose request was answered with an expired session may find
    /// that another caller already replaced the token; that newer token is kept.
    /// Returns whether the token was dropped.
    pub async fn invalidate_if(&self, rejected: &str) -> bool {
        let mut inner = self.inner.lock().await;
        let still_held = inner.token.as_ref().is_some_and(|token| token.value == rejected);
        if still_held {
            inner.status = TokenStatus::Absent;
            inner.token = None;
        }
        still_held
    }

    pub async fn status(&self) -> TokenStatus {
        self.inner.lock().await.status
    }

    /// Copy of the held token for diagnostics.
    pub async fn snapshot(&self) -> Option<Token> {
        self.inner.lock().await.token.clone()
    }
}
