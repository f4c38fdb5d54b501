//! Path trimming
//!
//! - config: ellipsis and separator settings
//! - path_parts: directory/filename split at the last separator
//! - engine: tier selection and binary-search truncation
//!
//! # Example
//!
//! ```rust
//! use pathtrim::measurement::MeasurerRegistry;
//! use pathtrim::truncation::{TrimConfig, TruncationEngine};
//! use pathtrim::{FixedAdvanceOracle, FontKey};
//!
//! let registry = MeasurerRegistry::new(FixedAdvanceOracle::default());
//! let measurer = registry.get(&FontKey::new("Consolas", 10.0));
//! let engine = TruncationEngine::new(TrimConfig::default().with_separator('/'));
//!
//! let shown = engine.trim("/var/log/nginx/access.log", 120.0, &measurer)?;
//! assert!(shown.ends_with(".../access.log"));
//! # Ok::<(), pathtrim::MeasurementError>(())
//! ```

pub mod config;
pub mod engine;
pub mod path_parts;

pub use config::TrimConfig;
pub use engine::{TrimTier, TrimmedPath, TruncateDirection, TruncationEngine};
pub use path_parts::{split_path, PathParts, PATH_SEPARATORS};
