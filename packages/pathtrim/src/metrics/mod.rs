//! Cache telemetry
//!
//! - collector: atomic hit/miss/path counters with interval reads
//! - snapshot: point-in-time totals, derived ratios and named counters
//!
//! Transport is left to the caller: poll `snapshot()`/`take_interval()` or
//! serialize a snapshot and ship it wherever it needs to go.

pub mod collector;
pub mod snapshot;

pub use collector::MetricsCollector;
pub use snapshot::{CounterReading, IntervalCounts, MetricsSnapshot};
