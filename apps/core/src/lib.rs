//! Member messages question answering.
//!
//! `brain` holds the rule-based answer pipeline; the other modules are the
//! HTTP service around it.

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod telemetry;
pub mod upstream;

#[cfg(test)]
mod tests;
