//! Task management HTTP API backed by MySQL.
//!
//! Exposed as a library so tests can mount the router over an
//! in-memory store.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
