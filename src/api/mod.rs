//! Typed controller endpoints. Each operation builds a request template and
//! runs it through [`OmadaClient::execute`](crate::OmadaClient::execute).

pub mod clients;
pub mod envelope;
pub mod roles;
pub mod sites;

pub use envelope::{ApiResponse, Envelope, Page};
