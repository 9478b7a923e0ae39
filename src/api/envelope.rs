use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::constants::SESSION_EXPIRED_CODE;

/// Status fields present at the top of every controller response.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Envelope {
    #[serde(rename = "errorCode", default, deserialize_with = "null_as_default")]
    pub error_code: i64,
    #[serde(rename = "msg", default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl Envelope {
    pub fn is_session_expired(&self) -> bool {
        self.error_code == SESSION_EXPIRED_CODE
    }
}

/// Envelope plus the endpoint specific `result`.
///
/// A non-zero `error_code` is an application level answer from the controller
/// and is handed back as is; `result` then holds whatever the controller sent,
/// or the default value when it sent nothing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: T,
}

impl<T> ApiResponse<T> {
    pub fn error_code(&self) -> i64 {
        self.envelope.error_code
    }

    pub fn message(&self) -> &str {
        &self.envelope.message
    }

    pub fn is_success(&self) -> bool {
        self.envelope.error_code == 0
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Paginated `result` payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page<T> {
    pub total_rows: i64,
    pub current_page: i32,
    pub current_size: i32,
    pub data: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_rows: 0,
            current_page: 0,
            current_size: 0,
            data: Vec::new(),
        }
    }
}
