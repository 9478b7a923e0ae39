//! # Omada Controller Client Library
//!
//! Typed access to the Omada controller OpenAPI. The client obtains an
//! access token on first use, caches it, attaches it to every request and
//! transparently re-authenticates once when the controller reports the
//! session as expired.
//!
//! Modules:
//! - `cache`: access token state shared by all callers of a client
//! - `client`: authentication and the authenticated request executor
//! - `api`: response envelope and typed endpoint operations
//! - `config`: YAML configuration and validation
//! - `observability`: per-client Prometheus metrics

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod utils;

#[cfg(test)]
pub mod tests;


pub use crate::client::OmadaClient;
pub use crate::config::settings::ControllerConfig;
pub use crate::error::{AuthenticationError, OmadaError};
