//! Snapshot types and derived ratios
//!
//! Ratios are computed on read from the stored counters and guard every
//! division against a zero denominator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of running totals (no heap allocations)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_hits: u64,
    pub total_misses: u64,
    pub paths_processed: u64,
}

impl MetricsSnapshot {
    /// Every width lookup is one cache query
    #[inline]
    pub fn total_queries(&self) -> u64 {
        self.total_hits + self.total_misses
    }

    /// Share of queries served from the cache, `0.0` before any query
    pub fn hit_percentage(&self) -> f64 {
        let queries = self.total_queries();
        if queries == 0 {
            0.0
        } else {
            self.total_hits as f64 / queries as f64 * 100.0
        }
    }

    /// Hits per miss, reported under the "measurement calls per text string"
    /// counter name. `0.0` while there are no misses.
    pub fn measurement_calls_per_string(&self) -> f64 {
        if self.total_misses == 0 {
            0.0
        } else {
            self.total_hits as f64 / self.total_misses as f64
        }
    }

    /// Named readings for a polling transport
    pub fn counters(&self) -> Vec<CounterReading> {
        vec![
            CounterReading::new("total-cache-hits", "Total Cache Hits", self.total_hits as f64),
            CounterReading::new(
                "total-cache-misses",
                "Total Cache Misses",
                self.total_misses as f64,
            ),
            CounterReading::new(
                "total-cache-queries",
                "Total Cache Queries",
                self.total_queries() as f64,
            ),
            CounterReading::new(
                "total-paths-processed",
                "Total Whole Paths Processed",
                self.paths_processed as f64,
            ),
            CounterReading::new(
                "measurement-calls-per-text-string",
                "Average Measurement Calls Per Text String",
                self.measurement_calls_per_string(),
            ),
            CounterReading::new(
                "percentage-cache-hits",
                "Percentage Cache Hits",
                self.hit_percentage(),
            ),
        ]
    }

    /// Serialize the snapshot together with its derived counters
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&serde_json::json!({
            "total_hits": self.total_hits,
            "total_misses": self.total_misses,
            "total_queries": self.total_queries(),
            "paths_processed": self.paths_processed,
            "hit_percentage": self.hit_percentage(),
            "measurement_calls_per_string": self.measurement_calls_per_string(),
        }))
    }
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queries={} hits={} misses={} hit%={:.1} paths={}",
            self.total_queries(),
            self.total_hits,
            self.total_misses,
            self.hit_percentage(),
            self.paths_processed
        )
    }
}

/// Per-period counts returned by `MetricsCollector::take_interval`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalCounts {
    pub hits: u64,
    pub misses: u64,
    pub queries: u64,
}

/// One named counter value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterReading {
    pub name: &'static str,
    pub display_name: &'static str,
    pub value: f64,
}

impl CounterReading {
    fn new(name: &'static str, display_name: &'static str, value: f64) -> Self {
        Self {
            name,
            display_name,
            value,
        }
    }
}
