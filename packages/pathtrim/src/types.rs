//! Core data structures for font identity and measured extents

use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Font weight on the CSS 1..=1000 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const EXTRA_LIGHT: Self = Self(200);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const EXTRA_BOLD: Self = Self(800);
    pub const BLACK: Self = Self(900);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Font slant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontStyle::Normal => "Normal",
            FontStyle::Italic => "Italic",
            FontStyle::Oblique => "Oblique",
        };
        f.write_str(name)
    }
}

/// Font width relative to the family's normal face
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStretch {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    #[default]
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

impl FontStretch {
    /// CSS percentage for this stretch value
    #[inline]
    pub fn to_percentage(self) -> f32 {
        match self {
            FontStretch::UltraCondensed => 50.0,
            FontStretch::ExtraCondensed => 62.5,
            FontStretch::Condensed => 75.0,
            FontStretch::SemiCondensed => 87.5,
            FontStretch::Normal => 100.0,
            FontStretch::SemiExpanded => 112.5,
            FontStretch::Expanded => 125.0,
            FontStretch::ExtraExpanded => 150.0,
            FontStretch::UltraExpanded => 200.0,
        }
    }
}

impl fmt::Display for FontStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontStretch::UltraCondensed => "UltraCondensed",
            FontStretch::ExtraCondensed => "ExtraCondensed",
            FontStretch::Condensed => "Condensed",
            FontStretch::SemiCondensed => "SemiCondensed",
            FontStretch::Normal => "Normal",
            FontStretch::SemiExpanded => "SemiExpanded",
            FontStretch::Expanded => "Expanded",
            FontStretch::ExtraExpanded => "ExtraExpanded",
            FontStretch::UltraExpanded => "UltraExpanded",
        };
        f.write_str(name)
    }
}

/// Identity of a font configuration.
///
/// Two keys are equal iff every field is equal; equality is what partitions
/// measurement caches. Fields are private so a key cannot change after it
/// has been used to look up a measurer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontKey {
    family: String,
    size: OrderedFloat<f32>,
    #[serde(default)]
    weight: FontWeight,
    #[serde(default)]
    style: FontStyle,
    #[serde(default)]
    stretch: FontStretch,
}

impl FontKey {
    /// Create a key with normal weight, style and stretch
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size: OrderedFloat(size),
            weight: FontWeight::default(),
            style: FontStyle::default(),
            stretch: FontStretch::default(),
        }
    }

    #[inline]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    #[inline]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn with_stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = stretch;
        self
    }

    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size.into_inner()
    }

    #[inline]
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    #[inline]
    pub fn style(&self) -> FontStyle {
        self.style
    }

    #[inline]
    pub fn stretch(&self) -> FontStretch {
        self.stretch
    }

    /// Registry signature: `size-family-weight-style-stretch`
    pub fn signature(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            self.size, self.family, self.weight, self.style, self.stretch
        )
    }
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

/// Rendered bounding box of a string
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

impl TextSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_covers_every_field() {
        let base = FontKey::new("Segoe UI", 14.0);
        assert_eq!(base.signature(), "14-Segoe UI-400-Normal-Normal");

        let bold = base.clone().with_weight(FontWeight::BOLD);
        let italic = base.clone().with_style(FontStyle::Italic);
        let narrow = base.clone().with_stretch(FontStretch::Condensed);
        let larger = FontKey::new("Segoe UI", 14.5);

        let signatures = [
            base.signature(),
            bold.signature(),
            italic.signature(),
            narrow.signature(),
            larger.signature(),
        ];
        for (i, a) in signatures.iter().enumerate() {
            for b in signatures.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_equality_is_field_wise() {
        let a = FontKey::new("Consolas", 12.0).with_style(FontStyle::Oblique);
        let b = FontKey::new("Consolas", 12.0).with_style(FontStyle::Oblique);
        assert_eq!(a, b);
        assert_ne!(a, FontKey::new("consolas", 12.0).with_style(FontStyle::Oblique));
    }

    #[test]
    fn test_font_key_deserializes_with_defaults() {
        let key: FontKey = serde_json::from_str(r#"{"family":"Arial","size":11.0}"#).unwrap();
        assert_eq!(key, FontKey::new("Arial", 11.0));

        let key: FontKey = serde_json::from_str(
            r#"{"family":"Arial","size":11.0,"weight":700,"style":"italic","stretch":"expanded"}"#,
        )
        .unwrap();
        assert_eq!(key.weight(), FontWeight::BOLD);
        assert_eq!(key.style(), FontStyle::Italic);
        assert_eq!(key.stretch(), FontStretch::Expanded);
    }
}
