//! Configuration for path trimming

use serde::{Deserialize, Serialize};

/// Configuration for the truncation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// Marker shown where text was removed
    pub ellipsis: String,
    /// Separator placed between the ellipsis and a kept filename
    pub separator: char,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            ellipsis: "...".to_string(),
            separator: std::path::MAIN_SEPARATOR,
        }
    }
}

impl TrimConfig {
    #[inline]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[inline]
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// `...\` on Windows-style paths, `.../` elsewhere
    pub fn filename_marker(&self) -> String {
        let mut marker = String::with_capacity(self.ellipsis.len() + self.separator.len_utf8());
        marker.push_str(&self.ellipsis);
        marker.push(self.separator);
        marker
    }
}
