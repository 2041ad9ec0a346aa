//! Test helpers shared across crates.
//!
//! This crate currently provides environment snapshot builders and a capture
//! harness for asserting on emitted `tracing` warnings.

pub mod env;
pub mod logging;
