//! Atomic hit/miss accounting for width measurements
//!
//! Counters are independent relaxed atomics; a snapshot taken while other
//! threads are reporting may be torn across fields, which is fine for
//! telemetry.

use std::sync::atomic::{AtomicU64, Ordering};

use super::snapshot::{IntervalCounts, MetricsSnapshot};

/// Lock-free measurement metrics with cache-line alignment
#[repr(align(64))]
#[derive(Debug)]
pub struct MetricsCollector {
    /// Running total of width lookups served from the cache
    hits: AtomicU64,
    /// Running total of width lookups that went to the oracle
    misses: AtomicU64,
    /// Whole paths handed to a label, independent of measurement count
    paths: AtomicU64,
    /// Hits since the last `take_interval`
    interval_hits: AtomicU64,
    /// Misses since the last `take_interval`
    interval_misses: AtomicU64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            paths: AtomicU64::new(0),
            interval_hits: AtomicU64::new(0),
            interval_misses: AtomicU64::new(0),
        }
    }

    /// Record one width lookup
    #[inline(always)]
    pub fn report_measurement(&self, is_hit: bool) {
        if is_hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
            self.interval_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            self.interval_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record that a new full path was assigned for display
    #[inline(always)]
    pub fn report_new_string(&self) {
        self.paths.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn total_hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn total_misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn total_queries(&self) -> u64 {
        self.total_hits() + self.total_misses()
    }

    #[inline(always)]
    pub fn paths_processed(&self) -> u64 {
        self.paths.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of the running totals
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_hits: self.total_hits(),
            total_misses: self.total_misses(),
            paths_processed: self.paths_processed(),
        }
    }

    /// Counts since the previous call; starts a new interval
    pub fn take_interval(&self) -> IntervalCounts {
        let hits = self.interval_hits.swap(0, Ordering::Relaxed);
        let misses = self.interval_misses.swap(0, Ordering::Relaxed);
        IntervalCounts {
            hits,
            misses,
            queries: hits + misses,
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.paths.store(0, Ordering::Relaxed);
        self.interval_hits.store(0, Ordering::Relaxed);
        self.interval_misses.store(0, Ordering::Relaxed);
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_hits_and_misses_accumulate() {
        let metrics = MetricsCollector::new();
        metrics.report_measurement(false);
        metrics.report_measurement(true);
        metrics.report_measurement(true);

        assert_eq!(metrics.total_hits(), 2);
        assert_eq!(metrics.total_misses(), 1);
        assert_eq!(metrics.total_queries(), 3);
    }

    #[test]
    fn test_paths_are_counted_separately() {
        let metrics = MetricsCollector::new();
        metrics.report_new_string();
        for _ in 0..5 {
            metrics.report_measurement(false);
        }
        assert_eq!(metrics.paths_processed(), 1);
        assert_eq!(metrics.total_queries(), 5);
    }

    #[test]
    fn test_take_interval_restarts_but_keeps_totals() {
        let metrics = MetricsCollector::new();
        metrics.report_measurement(true);
        metrics.report_measurement(false);

        let first = metrics.take_interval();
        assert_eq!(first, IntervalCounts { hits: 1, misses: 1, queries: 2 });

        metrics.report_measurement(true);
        let second = metrics.take_interval();
        assert_eq!(second, IntervalCounts { hits: 1, misses: 0, queries: 1 });

        assert_eq!(metrics.total_hits(), 2);
        assert_eq!(metrics.total_misses(), 1);
    }

    #[test]
    fn test_reset() {
        let metrics = MetricsCollector::new();
        metrics.report_measurement(true);
        metrics.report_new_string();
        metrics.reset();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
        assert_eq!(metrics.take_interval(), IntervalCounts::default());
    }

    #[test]
    fn test_concurrent_reporting() {
        let metrics = Arc::new(MetricsCollector::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.report_measurement(i % 2 == 0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(metrics.total_hits(), 2000);
        assert_eq!(metrics.total_misses(), 2000);
    }
}
