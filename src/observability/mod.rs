//! Observability module for monitoring and metrics.
//!
//! This module provides operation counters for the contact directory and a
//! timer that reports durations through `tracing`.

pub mod metrics;

pub use metrics::{DirectoryMetrics, Timer};
