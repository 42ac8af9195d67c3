//! Semantic text styles and their per-platform base sizes

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Platform
// =============================================================================

/// Target platform, selecting point-size tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Phones and tablets
    #[default]
    Ios,
    /// Television
    Tvos,
    /// Watch
    Watchos,
}

impl Platform {
    /// Default point size when neither size nor style is given
    pub fn default_font_size(&self) -> f64 {
        match self {
            Platform::Ios => 14.0,
            Platform::Tvos => 29.0,
            Platform::Watchos => 16.0,
        }
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// Semantic text style subject to dynamic-type scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    /// Large title
    LargeTitle,
    /// First-level title
    Title1,
    /// Second-level title
    Title2,
    /// Third-level title
    Title3,
    /// Headline
    Headline,
    /// Subheadline
    Subheadline,
    /// Body text
    Body,
    /// Callout
    Callout,
    /// Footnote
    Footnote,
    /// Primary caption
    Caption1,
    /// Secondary caption
    Caption2,
}

impl TextStyle {
    /// Name used in cache keys
    pub fn as_str(&self) -> &'static str {
        match self {
            TextStyle::LargeTitle => "large-title",
            TextStyle::Title1 => "title1",
            TextStyle::Title2 => "title2",
            TextStyle::Title3 => "title3",
            TextStyle::Headline => "headline",
            TextStyle::Subheadline => "subheadline",
            TextStyle::Body => "body",
            TextStyle::Callout => "callout",
            TextStyle::Footnote => "footnote",
            TextStyle::Caption1 => "caption1",
            TextStyle::Caption2 => "caption2",
        }
    }

    /// Unscaled point size of this style on a platform
    pub fn base_size(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Ios => match self {
                TextStyle::LargeTitle => 36.0,
                TextStyle::Title1 => 32.0,
                TextStyle::Title2 => 28.0,
                TextStyle::Title3 => 21.0,
                TextStyle::Headline => 17.0,
                TextStyle::Subheadline => 15.0,
                TextStyle::Body => 17.0,
                TextStyle::Callout => 16.0,
                TextStyle::Footnote => 13.0,
                TextStyle::Caption1 => 12.0,
                TextStyle::Caption2 => 11.0,
            },
            Platform::Tvos => match self {
                TextStyle::LargeTitle => platform.default_font_size(),
                TextStyle::Title1 => 76.0,
                TextStyle::Title2 => 57.0,
                TextStyle::Title3 => 48.0,
                TextStyle::Headline => 38.0,
                TextStyle::Subheadline => 35.0,
                TextStyle::Body => 29.0,
                TextStyle::Callout => 31.0,
                TextStyle::Footnote => 27.0,
                TextStyle::Caption1 => 25.0,
                TextStyle::Caption2 => 23.0,
            },
            Platform::Watchos => match self {
                TextStyle::LargeTitle => 36.0,
                TextStyle::Title1 => 34.0,
                TextStyle::Title2 => 27.0,
                TextStyle::Title3 => 19.0,
                TextStyle::Headline
                | TextStyle::Subheadline
                | TextStyle::Body
                | TextStyle::Callout => 16.0,
                TextStyle::Footnote => 13.0,
                TextStyle::Caption1 => 15.0,
                TextStyle::Caption2 => 14.0,
            },
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
