//! Shared domain types for svchook.
//!
//! This crate contains the types used across the harness: clients and their
//! balances, services and the service catalog, the static configuration, and
//! the error taxonomy every operation reports through.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod client;
pub mod config;
pub mod error;
pub mod service;
