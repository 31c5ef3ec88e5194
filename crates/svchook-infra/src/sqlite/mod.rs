//! SQLite storage layer.
//!
//! A single connection to the clients database; no pool, no migrations.
//! The `CLIENTS` and `BALANCES` tables are owned by the billing service.

pub mod store;

pub use store::DataStore;
