//! Per-font measurer registry
//!
//! The registry is the explicit owner of everything that used to be
//! process-wide: the oracle, the cache switch, the metrics collector and
//! one `TextMeasurer` per distinct font signature. Create one at startup and
//! hand out clones of the `Arc`s it returns.

use std::sync::Arc;

use ahash::RandomState;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use super::cache_control::CacheControl;
use super::measurer::TextMeasurer;
use crate::metrics::MetricsCollector;
use crate::oracle::MeasurementOracle;
use crate::types::FontKey;

/// Configuration for a measurer registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Initial state of the width-cache switch
    pub cache_enabled: bool,
    /// Initial capacity of each measurer's caches
    pub initial_cache_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            initial_cache_capacity: 256,
        }
    }
}

/// Maps font signatures to shared measurers
pub struct MeasurerRegistry {
    oracle: Arc<dyn MeasurementOracle>,
    measurers: DashMap<String, Arc<TextMeasurer>, RandomState>,
    cache_control: Arc<CacheControl>,
    metrics: Arc<MetricsCollector>,
    config: RegistryConfig,
}

impl MeasurerRegistry {
    /// Create a registry with default configuration
    pub fn new<O>(oracle: O) -> Self
    where
        O: MeasurementOracle + 'static,
    {
        Self::with_config(oracle, RegistryConfig::default())
    }

    pub fn with_config<O>(oracle: O, config: RegistryConfig) -> Self
    where
        O: MeasurementOracle + 'static,
    {
        Self {
            oracle: Arc::new(oracle),
            measurers: DashMap::with_hasher(RandomState::new()),
            cache_control: Arc::new(CacheControl::new(config.cache_enabled)),
            metrics: Arc::new(MetricsCollector::new()),
            config,
        }
    }

    /// Get the measurer for `font`, creating it on first request.
    ///
    /// Keys with equal fields share one measurer (and its caches); keys that
    /// differ in any field never do.
    pub fn get(&self, font: &FontKey) -> Arc<TextMeasurer> {
        let signature = font.signature();
        if let Some(existing) = self.measurers.get(&signature) {
            return Arc::clone(existing.value());
        }

        let entry = self.measurers.entry(signature).or_insert_with(|| {
            log::debug!("Creating text measurer for {}", font);
            Arc::new(TextMeasurer::with_capacity(
                font.clone(),
                Arc::clone(&self.oracle),
                Arc::clone(&self.cache_control),
                Arc::clone(&self.metrics),
                self.config.initial_cache_capacity,
            ))
        });
        Arc::clone(entry.value())
    }

    #[inline]
    pub fn set_cache_enabled(&self, enabled: bool) {
        self.cache_control.set_enabled(enabled);
    }

    #[inline]
    pub fn is_cache_enabled(&self) -> bool {
        self.cache_control.is_enabled()
    }

    #[inline]
    pub fn cache_control(&self) -> &Arc<CacheControl> {
        &self.cache_control
    }

    #[inline]
    pub fn metrics(&self) -> &Arc<MetricsCollector> {
        &self.metrics
    }

    #[inline]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of distinct font configurations seen so far
    #[inline]
    pub fn len(&self) -> usize {
        self.measurers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.measurers.is_empty()
    }

    /// Forget every measurer. Outstanding `Arc`s keep working but are no
    /// longer handed out.
    pub fn reset(&self) {
        self.measurers.clear();
    }
}

impl std::fmt::Debug for MeasurerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurerRegistry")
            .field("measurers", &self.measurers.len())
            .field("cache_enabled", &self.cache_control.is_enabled())
            .field("config", &self.config)
            .finish()
    }
}
