//! Stateful path label
//!
//! `PathLabel` holds the current path and available width and pushes a
//! freshly trimmed string to its `DisplaySink` whenever either changes or a
//! measurer is attached. It carries no rendering of its own.

use std::sync::Arc;

use crate::error::MeasurementResult;
use crate::measurement::TextMeasurer;
use crate::metrics::MetricsCollector;
use crate::truncation::TruncationEngine;

/// Receives the string to render
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

/// A sink backed by a closure
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str)> DisplaySink for FnSink<F> {
    #[inline]
    fn show(&mut self, text: &str) {
        (self.0)(text)
    }
}

impl DisplaySink for Vec<String> {
    #[inline]
    fn show(&mut self, text: &str) {
        self.push(text.to_owned());
    }
}

/// A path shown in a fixed-width area
pub struct PathLabel<S: DisplaySink> {
    engine: TruncationEngine,
    metrics: Arc<MetricsCollector>,
    measurer: Option<Arc<TextMeasurer>>,
    path: String,
    available_width: f32,
    sink: S,
}

impl<S: DisplaySink> PathLabel<S> {
    pub fn new(engine: TruncationEngine, metrics: Arc<MetricsCollector>, sink: S) -> Self {
        Self {
            engine,
            metrics,
            measurer: None,
            path: String::new(),
            available_width: 0.0,
            sink,
        }
    }

    /// Attach the measurer for the label's font and re-trim
    pub fn attach(&mut self, measurer: Arc<TextMeasurer>) -> MeasurementResult<()> {
        self.measurer = Some(measurer);
        self.refresh()
    }

    /// Assign a new full path. Counts as one processed string no matter how
    /// many measurements the trim takes.
    pub fn set_path(&mut self, path: impl Into<String>) -> MeasurementResult<()> {
        self.path = path.into();
        self.metrics.report_new_string();
        self.refresh()
    }

    /// New available width from a layout pass
    pub fn resize(&mut self, available_width: f32) -> MeasurementResult<()> {
        self.available_width = available_width;
        self.refresh()
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn available_width(&self) -> f32 {
        self.available_width
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Re-trim and push to the sink. Skipped until a measurer is attached,
    /// while the path is empty, and while the width is exactly zero (not yet
    /// laid out).
    pub fn refresh(&mut self) -> MeasurementResult<()> {
        let Some(measurer) = self.measurer.as_ref() else {
            return Ok(());
        };
        if self.path.is_empty() || self.available_width == 0.0 {
            return Ok(());
        }

        let display = self
            .engine
            .trim(&self.path, self.available_width, measurer)?;
        self.sink.show(&display);
        Ok(())
    }
}

impl<S: DisplaySink> std::fmt::Debug for PathLabel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathLabel")
            .field("path", &self.path)
            .field("available_width", &self.available_width)
            .field("attached", &self.measurer.is_some())
            .finish()
    }
}
