//! Text measurement with per-font caching
//!
//! - cache_control: shared switch gating width caches
//! - measurer: `TextMeasurer`, width and size caches over one font
//! - registry: `MeasurerRegistry`, one measurer per font signature
//!
//! # Example
//!
//! ```rust
//! use pathtrim::measurement::MeasurerRegistry;
//! use pathtrim::{FixedAdvanceOracle, FontKey};
//!
//! let registry = MeasurerRegistry::new(FixedAdvanceOracle::default());
//! let measurer = registry.get(&FontKey::new("Consolas", 10.0));
//!
//! let width = measurer.measure_width("notes.txt")?;
//! assert_eq!(width, measurer.measure_width("notes.txt")?);
//! assert_eq!(registry.metrics().total_hits(), 1);
//! # Ok::<(), pathtrim::MeasurementError>(())
//! ```

pub mod cache_control;
pub mod measurer;
pub mod registry;

pub use cache_control::CacheControl;
pub use measurer::TextMeasurer;
pub use registry::{MeasurerRegistry, RegistryConfig};
