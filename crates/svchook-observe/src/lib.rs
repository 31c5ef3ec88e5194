//! Observability for svchook: structured logging setup.

pub mod tracing_setup;
