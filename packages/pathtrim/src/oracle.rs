//! Measurement oracle boundary
//!
//! The oracle is whatever actually lays text out under a font and reports
//! its bounding box. It is assumed deterministic: the same font and text
//! always produce the same extents, which is what makes caching its answers
//! sound. Errors are returned as-is to whoever asked for the measurement.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MeasurementError, MeasurementResult};
use crate::types::{FontKey, TextSize};

/// Computes the rendered extents of a string under a font configuration.
pub trait MeasurementOracle: Send + Sync {
    fn measure(&self, font: &FontKey, text: &str) -> MeasurementResult<TextSize>;
}

impl<O: MeasurementOracle + ?Sized> MeasurementOracle for Arc<O> {
    #[inline]
    fn measure(&self, font: &FontKey, text: &str) -> MeasurementResult<TextSize> {
        (**self).measure(font, text)
    }
}

impl<O: MeasurementOracle + ?Sized> MeasurementOracle for Box<O> {
    #[inline]
    fn measure(&self, font: &FontKey, text: &str) -> MeasurementResult<TextSize> {
        (**self).measure(font, text)
    }
}

/// An oracle backed by a closure.
pub struct FnOracle<F>(pub F);

impl<F> MeasurementOracle for FnOracle<F>
where
    F: Fn(&FontKey, &str) -> MeasurementResult<TextSize> + Send + Sync,
{
    #[inline]
    fn measure(&self, font: &FontKey, text: &str) -> MeasurementResult<TextSize> {
        (self.0)(font, text)
    }
}

/// Monospace approximation: every char advances by the same fraction of an em.
///
/// Weight and stretch scale the advance so that distinct font keys measure
/// differently, which is enough for terminals and for exercising the cache.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedAdvanceOracle {
    /// Advance per char as a fraction of the font size
    pub advance_ratio: f32,
    /// Line height as a fraction of the font size
    pub line_height_ratio: f32,
}

impl Default for FixedAdvanceOracle {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl FixedAdvanceOracle {
    /// Advance of a single char under `font`
    pub fn advance(&self, font: &FontKey) -> f32 {
        let weight_scale = 1.0 + (f32::from(font.weight().0) - 400.0) / 4000.0;
        let stretch_scale = font.stretch().to_percentage() / 100.0;
        font.size() * self.advance_ratio * weight_scale * stretch_scale
    }
}

impl MeasurementOracle for FixedAdvanceOracle {
    fn measure(&self, font: &FontKey, text: &str) -> MeasurementResult<TextSize> {
        let size = font.size();
        if !size.is_finite() || size <= 0.0 {
            return Err(MeasurementError::InvalidFont(format!(
                "font size must be positive and finite, got {size}"
            )));
        }
        if font.family().is_empty() {
            return Err(MeasurementError::FontUnavailable {
                family: String::new(),
            });
        }

        let chars = text.chars().count() as f32;
        Ok(TextSize::new(
            chars * self.advance(font),
            size * self.line_height_ratio,
        ))
    }
}
