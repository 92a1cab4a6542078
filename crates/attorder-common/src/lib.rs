//! Common utilities for attorder.
//!
//! This crate provides shared infrastructure used by the markup library and the CLI:
//! - **Warning System** - deduplicated, colored diagnostics on standard error

pub mod warning;
