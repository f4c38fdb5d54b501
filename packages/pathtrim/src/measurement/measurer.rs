//! Cached text measurement for a single font configuration
//!
//! Each measurer owns two independent caches keyed by the exact text
//! (case-sensitive, no normalization):
//! - width cache: gated by the shared `CacheControl`, reports every lookup
//!   to the `MetricsCollector`
//! - size cache: always used, never reported
//!
//! Concurrent misses on the same key may each call the oracle. The first
//! value inserted wins; since the oracle is deterministic every caller
//! still observes the same value.

use std::sync::Arc;

use ahash::RandomState;
use dashmap::DashMap;

use super::cache_control::CacheControl;
use crate::error::MeasurementResult;
use crate::metrics::MetricsCollector;
use crate::oracle::MeasurementOracle;
use crate::types::{FontKey, TextSize};

/// Measures text under one `FontKey`, memoizing oracle answers
pub struct TextMeasurer {
    font: FontKey,
    oracle: Arc<dyn MeasurementOracle>,
    width_cache: DashMap<String, f32, RandomState>,
    size_cache: DashMap<String, TextSize, RandomState>,
    cache_control: Arc<CacheControl>,
    metrics: Arc<MetricsCollector>,
}

impl TextMeasurer {
    pub fn new(
        font: FontKey,
        oracle: Arc<dyn MeasurementOracle>,
        cache_control: Arc<CacheControl>,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self::with_capacity(font, oracle, cache_control, metrics, 0)
    }

    /// Create a measurer whose caches are pre-sized for `capacity` entries
    pub fn with_capacity(
        font: FontKey,
        oracle: Arc<dyn MeasurementOracle>,
        cache_control: Arc<CacheControl>,
        metrics: Arc<MetricsCollector>,
        capacity: usize,
    ) -> Self {
        Self {
            font,
            oracle,
            width_cache: DashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            size_cache: DashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            cache_control,
            metrics,
        }
    }

    #[inline]
    pub fn font(&self) -> &FontKey {
        &self.font
    }

    /// Rendered width of `text`.
    ///
    /// With caching disabled the oracle is asked every time and the cache is
    /// neither read nor written; the lookup is reported as a miss.
    pub fn measure_width(&self, text: &str) -> MeasurementResult<f32> {
        if !self.cache_control.is_enabled() {
            let width = self.compute(text)?.width;
            self.metrics.report_measurement(false);
            return Ok(width);
        }

        if let Some(width) = self.width_cache.get(text).map(|entry| *entry) {
            self.metrics.report_measurement(true);
            return Ok(width);
        }

        let computed = self.compute(text)?.width;
        let width = *self
            .width_cache
            .entry(text.to_owned())
            .or_insert(computed);
        self.metrics.report_measurement(false);
        log::trace!("width miss for {:?} under {}: {}", text, self.font, width);
        Ok(width)
    }

    /// Rendered bounding box of `text`; always cached, never reported
    pub fn measure_size(&self, text: &str) -> MeasurementResult<TextSize> {
        if let Some(size) = self.size_cache.get(text).map(|entry| *entry) {
            return Ok(size);
        }

        let computed = self.compute(text)?;
        Ok(*self.size_cache.entry(text.to_owned()).or_insert(computed))
    }

    /// Number of texts with a cached width
    #[inline]
    pub fn cached_widths(&self) -> usize {
        self.width_cache.len()
    }

    /// Number of texts with a cached size
    #[inline]
    pub fn cached_sizes(&self) -> usize {
        self.size_cache.len()
    }

    /// Drop every cached width and size
    pub fn clear(&self) {
        self.width_cache.clear();
        self.size_cache.clear();
    }

    fn compute(&self, text: &str) -> MeasurementResult<TextSize> {
        self.oracle.measure(&self.font, text).inspect_err(|err| {
            log::warn!("measurement of {:?} under {} failed: {}", text, self.font, err);
        })
    }
}

impl std::fmt::Debug for TextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMeasurer")
            .field("font", &self.font)
            .field("cached_widths", &self.width_cache.len())
            .field("cached_sizes", &self.size_cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;
    use crate::error::MeasurementError;

    /// One unit per char, height 2; counts oracle invocations
    #[derive(Default)]
    struct CountingOracle {
        calls: AtomicUsize,
    }

    impl MeasurementOracle for CountingOracle {
        fn measure(&self, _font: &FontKey, text: &str) -> MeasurementResult<TextSize> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if text.contains('\u{0}') {
                return Err(MeasurementError::Oracle("nul in text".into()));
            }
            Ok(TextSize::new(text.chars().count() as f32, 2.0))
        }
    }

    fn measurer() -> (TextMeasurer, Arc<CountingOracle>, Arc<CacheControl>, Arc<MetricsCollector>) {
        let oracle = Arc::new(CountingOracle::default());
        let control = Arc::new(CacheControl::default());
        let metrics = Arc::new(MetricsCollector::new());
        let measurer = TextMeasurer::new(
            FontKey::new("Test", 10.0),
            oracle.clone(),
            control.clone(),
            metrics.clone(),
        );
        (measurer, oracle, control, metrics)
    }

    #[test]
    fn test_second_lookup_is_a_hit() {
        let (measurer, oracle, _, metrics) = measurer();

        let first = measurer.measure_width("report.docx").unwrap();
        assert_eq!(metrics.total_misses(), 1);
        assert_eq!(metrics.total_hits(), 0);

        let second = measurer.measure_width("report.docx").unwrap();
        assert_eq!(first, second);
        assert_eq!(metrics.total_hits(), 1);
        assert_eq!(metrics.total_misses(), 1);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let (measurer, _, _, metrics) = measurer();
        measurer.measure_width("File.txt").unwrap();
        measurer.measure_width("file.txt").unwrap();
        assert_eq!(metrics.total_misses(), 2);
        assert_eq!(measurer.cached_widths(), 2);
    }

    #[test]
    fn test_disabled_cache_never_hits() {
        let (measurer, oracle, control, metrics) = measurer();
        control.set_enabled(false);

        measurer.measure_width("abc").unwrap();
        measurer.measure_width("abc").unwrap();

        assert_eq!(metrics.total_hits(), 0);
        assert_eq!(metrics.total_misses(), 2);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 2);
        assert_eq!(measurer.cached_widths(), 0);
    }

    #[test]
    fn test_disabling_keeps_existing_entries() {
        let (measurer, oracle, control, metrics) = measurer();
        measurer.measure_width("abc").unwrap();

        control.set_enabled(false);
        measurer.measure_width("abc").unwrap();
        assert_eq!(measurer.cached_widths(), 1);

        control.set_enabled(true);
        measurer.measure_width("abc").unwrap();
        assert_eq!(metrics.total_hits(), 1);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_size_cache_ignores_switch_and_metrics() {
        let (measurer, oracle, control, metrics) = measurer();
        control.set_enabled(false);

        let a = measurer.measure_size("abcd").unwrap();
        let b = measurer.measure_size("abcd").unwrap();

        assert_eq!(a, TextSize::new(4.0, 2.0));
        assert_eq!(a, b);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
        assert_eq!(measurer.cached_sizes(), 1);
        assert_eq!(metrics.total_queries(), 0);
    }

    #[test]
    fn test_empty_text_measures_zero() {
        let (measurer, _, _, _) = measurer();
        assert_eq!(measurer.measure_width("").unwrap(), 0.0);
    }

    #[test]
    fn test_oracle_errors_propagate_without_caching() {
        let (measurer, _, _, metrics) = measurer();
        let err = measurer.measure_width("bad\u{0}").unwrap_err();
        assert!(matches!(err, MeasurementError::Oracle(_)));
        assert!(measurer.measure_size("bad\u{0}").is_err());
        assert_eq!(measurer.cached_widths(), 0);
        assert_eq!(metrics.total_queries(), 0);
    }

    #[test]
    fn test_clear() {
        let (measurer, _, _, _) = measurer();
        measurer.measure_width("a").unwrap();
        measurer.measure_size("a").unwrap();
        measurer.clear();
        assert_eq!(measurer.cached_widths(), 0);
        assert_eq!(measurer.cached_sizes(), 0);
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        let (measurer, oracle, _, metrics) = measurer();
        let measurer = Arc::new(measurer);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let measurer = Arc::clone(&measurer);
                thread::spawn(move || {
                    (0..50)
                        .map(|n| measurer.measure_width(&"x".repeat(n)).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let widths = handle.join().unwrap();
            for (n, width) in widths.into_iter().enumerate() {
                assert_eq!(width, n as f32);
            }
        }

        assert_eq!(measurer.cached_widths(), 50);
        assert_eq!(metrics.total_queries(), 400);
        // Races may duplicate work but every key is computed at least once.
        assert!(oracle.calls.load(Ordering::SeqCst) >= 50);
    }
}
