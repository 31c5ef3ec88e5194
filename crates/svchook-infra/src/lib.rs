//! Infrastructure layer for svchook.
//!
//! Contains implementations of the traits defined in `svchook-core`:
//! the SQLite-backed `DataStore` (`ClientStore`), the reqwest-backed
//! `HttpServiceApi` (`ServiceApi`), and the configuration loader.

pub mod config;
pub mod http;
pub mod sqlite;
