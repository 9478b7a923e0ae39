use chrono::{DateTime, Utc};
use serde::Serialize;

pub const TOKEN_VALUE_STUB: &'static str = "";

/// Access token issued by the controller.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub value: String,
    pub token_type: String,
    /// Lifetime advertised by the controller, seconds. Informational only.
    pub expires_in: i64,
    pub refresh_token: String,
    pub obtained_at: DateTime<Utc>,
}

impl Token {
    pub fn new(value: String, token_type: String, expires_in: i64, refresh_token: String) -> Self {
        Self {
            value,
            token_type,
            expires_in,
            refresh_token,
            obtained_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Absent,
    Active,
}
