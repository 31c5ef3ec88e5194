//! Remote service directory: the wire-level port and the rules built on it.

pub mod api;
pub mod service;

pub use api::ServiceApi;
pub use service::ServiceDirectory;
