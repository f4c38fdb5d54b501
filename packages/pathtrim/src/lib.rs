//! Path-ellipsis trimming for fixed-width display areas
//!
//! This crate fits a file-system path into a pixel budget, preferring to
//! keep the filename visible over the directory prefix:
//! - Per-font text measurers with concurrent width and size caches
//! - A registry handing out one measurer per distinct font configuration
//! - Hit/miss telemetry with derived ratios
//! - Three-tier trimming driven by a binary search over substring length

pub mod error;
pub mod label;
pub mod measurement;
pub mod metrics;
pub mod oracle;
pub mod truncation;
pub mod types;

pub use error::{MeasurementError, MeasurementResult};
pub use label::{DisplaySink, FnSink, PathLabel};
pub use measurement::{CacheControl, MeasurerRegistry, RegistryConfig, TextMeasurer};
pub use metrics::{CounterReading, IntervalCounts, MetricsCollector, MetricsSnapshot};
pub use oracle::{FixedAdvanceOracle, FnOracle, MeasurementOracle};
pub use truncation::{
    split_path, PathParts, TrimConfig, TrimTier, TrimmedPath, TruncateDirection,
    TruncationEngine,
};
pub use types::{FontKey, FontStretch, FontStyle, FontWeight, TextSize};
