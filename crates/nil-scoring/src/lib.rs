//! Deterministic compliance and fair-market-value scoring for athlete NIL deals.

pub mod config;
pub mod engines;
pub mod error;
pub mod scoring;
pub mod telemetry;
