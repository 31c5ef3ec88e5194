//! HTTP access to the remote service directory.

pub mod client;
pub mod types;

pub use client::HttpServiceApi;
