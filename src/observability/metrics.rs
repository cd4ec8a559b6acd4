//! Directory operation metrics.
//!
//! Counters for every directory operation, shared cheaply between clones,
//! plus a timer that logs how long an operation took.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for a contact directory.
#[derive(Debug, Clone)]
pub struct DirectoryMetrics {
    contacts_added_total: Arc<AtomicU64>,
    contacts_updated_total: Arc<AtomicU64>,
    contacts_deleted_total: Arc<AtomicU64>,
    lookups_total: Arc<AtomicU64>,
    lookup_misses_total: Arc<AtomicU64>,
    rejected_total: Arc<AtomicU64>,
}

impl DirectoryMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            contacts_updated_total: Arc::new(AtomicU64::new(0)),
            contacts_deleted_total: Arc::new(AtomicU64::new(0)),
            lookups_total: Arc::new(AtomicU64::new(0)),
            lookup_misses_total: Arc::new(AtomicU64::new(0)),
            rejected_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn track_add(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn track_update(&self) {
        self.contacts_updated_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn track_delete(&self) {
        self.contacts_deleted_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a lookup by ID.
    pub fn track_lookup(&self, contact_id: &str, hit: bool) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
        if hit {
            tracing::trace!(contact_id = %contact_id, "Lookup hit");
        } else {
            self.lookup_misses_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(contact_id = %contact_id, "Lookup miss");
        }
    }

    /// Track an operation rejected with an invalid argument.
    pub fn track_rejection(&self, operation: &str, reason: &str) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(operation = %operation, reason = %reason, "Operation rejected");
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn contacts_updated_total(&self) -> u64 {
        self.contacts_updated_total.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        self.contacts_deleted_total.load(Ordering::Relaxed)
    }

    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    pub fn lookup_misses_total(&self) -> u64 {
        self.lookup_misses_total.load(Ordering::Relaxed)
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total.load(Ordering::Relaxed)
    }

    /// Get the lookup hit rate (0.0 to 1.0).
    pub fn lookup_hit_rate(&self) -> f64 {
        let total = self.lookups_total() as f64;
        if total == 0.0 {
            0.0
        } else {
            (total - self.lookup_misses_total() as f64) / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Contacts Added: {}\n\
             Contacts Updated: {}\n\
             Contacts Deleted: {}\n\
             Lookups: {} ({:.2}% hit rate)\n\
             Rejected Operations: {}",
            self.contacts_added_total(),
            self.contacts_updated_total(),
            self.contacts_deleted_total(),
            self.lookups_total(),
            self.lookup_hit_rate() * 100.0,
            self.rejected_total(),
        )
    }
}

impl Default for DirectoryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer with a specific status, returning elapsed microseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_us = self.start.elapsed().as_micros();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_us = duration_us,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_us = duration_us,
                "Operation failed"
            );
        }

        duration_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = DirectoryMetrics::new();
        assert_eq!(metrics.contacts_added_total(), 0);
        assert_eq!(metrics.contacts_updated_total(), 0);
        assert_eq!(metrics.contacts_deleted_total(), 0);
        assert_eq!(metrics.lookups_total(), 0);
        assert_eq!(metrics.rejected_total(), 0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = DirectoryMetrics::new();
        let clone = metrics.clone();

        clone.track_add();
        clone.track_add();
        metrics.track_delete();

        assert_eq!(metrics.contacts_added_total(), 2);
        assert_eq!(clone.contacts_deleted_total(), 1);
    }

    #[test]
    fn test_lookup_hit_rate() {
        let metrics = DirectoryMetrics::new();
        assert_eq!(metrics.lookup_hit_rate(), 0.0);

        metrics.track_lookup("1", true);
        metrics.track_lookup("1", true);
        metrics.track_lookup("2", false);

        assert_eq!(metrics.lookups_total(), 3);
        assert_eq!(metrics.lookup_misses_total(), 1);
        assert!((metrics.lookup_hit_rate() - 0.6667).abs() < 0.001);
    }

    #[test]
    fn test_track_rejection() {
        let metrics = DirectoryMetrics::new();
        metrics.track_rejection("add_contact", "duplicate");
        assert_eq!(metrics.rejected_total(), 1);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::new("test_operation");
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(timer.finish_with_status(true) >= 2_000);
    }

    #[test]
    fn test_summary() {
        let metrics = DirectoryMetrics::new();
        metrics.track_add();
        metrics.track_lookup("1", true);

        let summary = metrics.summary();
        assert!(summary.contains("Contacts Added: 1"));
        assert!(summary.contains("Lookups: 1 (100.00% hit rate)"));
    }
}
