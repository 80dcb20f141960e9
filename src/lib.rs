//! Subsidized-housing eligibility engine.
//!
//! This crate decides whether a household qualifies for a subsidized-housing
//! program, and under which of two income tiers, from its composition and its
//! gross and net income. The decision logic is pure; the `api` module wraps it
//! in an HTTP service.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
