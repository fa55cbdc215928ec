//! Diagnostic logging for the experiment-kit binary
//!
//! This module provides:
//! - Bracketed event formatting
//! - Subscriber setup writing to stderr, filtered by `RUST_LOG`
//!
//! Run logs written by [`crate::run_log::Logger`] are separate from these diagnostics.

mod formatter;
mod setup;

pub use formatter::BracketedFormatter;
pub use setup::{setup_logging, DEFAULT_LOG_FILTER};
