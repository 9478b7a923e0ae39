//! Shared constants and invariants

/// `errorCode` the controller puts in a 200 response once the access token is no longer accepted.
pub const SESSION_EXPIRED_CODE: i64 = -44112;
/// First attempt plus one retry after re-authenticating.
pub const MAX_REQUEST_ATTEMPTS: u32 = 2;

pub const AUTHORIZE_PATH: &str = "/openapi/authorize/token";
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const ACCESS_TOKEN_PREFIX: &str = "AccessToken=";

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;
