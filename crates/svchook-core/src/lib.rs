//! Business rules and port definitions for svchook.
//!
//! This crate defines the traits the infrastructure layer implements
//! (`ClientStore` for the relational store, `ServiceApi` for the remote
//! directory) and the rules layered on top of them. It depends only on
//! `svchook-types` -- never on `svchook-infra`, sqlx, or reqwest.

pub mod directory;
pub mod flow;
pub mod store;

#[cfg(test)]
mod testing;
