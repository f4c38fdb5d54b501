//! Three-tier path trimming
//!
//! Tiers, tried in order:
//! 1. the full path, when it fits
//! 2. the filename alone, tail kept, behind an ellipsis, when even
//!    `...\filename` does not fit
//! 3. as much of the directory head as fits, followed by `...\filename`
//!
//! Substring searches are a binary search over char counts, so a trim costs
//! O(log n) width lookups rather than one per char.

use super::config::TrimConfig;
use super::path_parts::split_path;
use crate::error::MeasurementResult;
use crate::measurement::TextMeasurer;

/// Which tier produced a trimmed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrimTier {
    /// Whole path fits
    Full,
    /// Directory dropped, filename tail shown behind the ellipsis
    FilenameOnly,
    /// Directory head, then ellipsis, separator and the whole filename
    DirectoryAndFilename,
}

/// Which end of the text survives truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruncateDirection {
    /// Drop leading chars, keep the suffix (truncate-left)
    KeepTail,
    /// Drop trailing chars, keep the prefix (truncate-right)
    KeepHead,
}

/// Trimmed display string and the tier that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedPath {
    pub display: String,
    pub tier: TrimTier,
}

/// Stateless path trimmer; every call is a function of its inputs and the
/// measurer's caches
#[derive(Debug, Clone, Default)]
pub struct TruncationEngine {
    config: TrimConfig,
}

impl TruncationEngine {
    pub fn new(config: TrimConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// Trim `path` to fit `available_width` under `measurer`'s font
    pub fn trim(
        &self,
        path: &str,
        available_width: f32,
        measurer: &TextMeasurer,
    ) -> MeasurementResult<String> {
        self.plan(path, available_width, measurer)
            .map(|trimmed| trimmed.display)
    }

    /// Like `trim`, also reporting which tier was used
    pub fn plan(
        &self,
        path: &str,
        available_width: f32,
        measurer: &TextMeasurer,
    ) -> MeasurementResult<TrimmedPath> {
        if path.is_empty() {
            return Ok(TrimmedPath {
                display: String::new(),
                tier: TrimTier::Full,
            });
        }

        if measurer.measure_width(path)? <= available_width {
            return Ok(TrimmedPath {
                display: path.to_owned(),
                tier: TrimTier::Full,
            });
        }

        let parts = split_path(path);
        let mut filename_and_ellipsis = self.config.filename_marker();
        filename_and_ellipsis.push_str(parts.filename);
        let filename_width = measurer.measure_width(&filename_and_ellipsis)?;

        if filename_width > available_width {
            log::trace!("filename-only trim of {:?} at {}", path, available_width);
            let display = self.truncate_text(
                parts.filename,
                available_width,
                &self.config.ellipsis,
                TruncateDirection::KeepTail,
                measurer,
            )?;
            return Ok(TrimmedPath {
                display,
                tier: TrimTier::FilenameOnly,
            });
        }

        log::trace!("directory trim of {:?} at {}", path, available_width);
        let mut display = self.truncate_text(
            parts.directory,
            available_width - filename_width,
            "",
            TruncateDirection::KeepHead,
            measurer,
        )?;
        display.push_str(&filename_and_ellipsis);
        Ok(TrimmedPath {
            display,
            tier: TrimTier::DirectoryAndFilename,
        })
    }

    /// Longest `prefix + part-of-text` that fits `available_width`.
    ///
    /// The prefix width is subtracted from the budget once up front, so any
    /// spacing between prefix and text is ignored during the search. If not
    /// even a zero-length body fits, `prefix` is returned alone and may
    /// overflow.
    pub fn truncate_text(
        &self,
        text: &str,
        available_width: f32,
        prefix: &str,
        direction: TruncateDirection,
        measurer: &TextMeasurer,
    ) -> MeasurementResult<String> {
        let mut full = String::with_capacity(prefix.len() + text.len());
        full.push_str(prefix);
        full.push_str(text);
        if measurer.measure_width(&full)? <= available_width {
            return Ok(full);
        }

        let mut budget = available_width;
        if !prefix.is_empty() {
            budget -= measurer.measure_width(prefix)?;
        }

        let candidates = Candidates::new(text, direction);

        // `low` chars are known to fit, `high` chars are known not to.
        let mut low = 0;
        let mut high = candidates.char_count();
        while low + 1 < high {
            let mid = low + (high - low) / 2;
            if measurer.measure_width(candidates.of_len(mid))? <= budget {
                low = mid;
            } else {
                high = mid;
            }
        }

        let body = candidates.of_len(low);
        let mut result = String::with_capacity(prefix.len() + body.len());
        result.push_str(prefix);
        result.push_str(body);
        Ok(result)
    }
}

/// Char-boundary slicing of one end of a string
struct Candidates<'a> {
    text: &'a str,
    /// Byte offset of every char start, plus `text.len()`
    boundaries: Vec<usize>,
    direction: TruncateDirection,
}

impl<'a> Candidates<'a> {
    fn new(text: &'a str, direction: TruncateDirection) -> Self {
        let boundaries = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Self {
            text,
            boundaries,
            direction,
        }
    }

    #[inline]
    fn char_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// First or last `len` chars depending on direction
    #[inline]
    fn of_len(&self, len: usize) -> &'a str {
        match self.direction {
            TruncateDirection::KeepHead => &self.text[..self.boundaries[len]],
            TruncateDirection::KeepTail => {
                &self.text[self.boundaries[self.char_count() - len]..]
            }
        }
    }
}
