//! Font descriptors
//!
//! A [`FontDescriptor`] is an immutable request for a font. Sizing follows a
//! single rule everywhere: an explicit size wins; otherwise the text style's
//! base size is used and the result is scaled for dynamic type; otherwise the
//! platform default size is used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::style::{Platform, TextStyle};
use crate::weight::FontWeight;

/// Effective sizing input of a descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    /// Unscaled point size
    pub points: f64,
    /// Style to scale by, when the size comes from a text style
    pub scale_with: Option<TextStyle>,
}

/// Immutable font request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
}

impl FontDescriptor {
    /// Create a descriptor for a family
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: None,
            style: None,
            size: None,
            location: None,
            filename: None,
        }
    }

    /// Set the weight
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the semantic text style
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set an explicit point size
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the directory searched for the font file
    pub fn location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the font file name (without extension)
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Family identifier
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Requested weight
    pub fn font_weight(&self) -> Option<FontWeight> {
        self.weight
    }

    /// Requested text style
    pub fn text_style(&self) -> Option<TextStyle> {
        self.style
    }

    /// Requested point size
    pub fn point_size(&self) -> Option<f64> {
        self.size
    }

    /// Requested search directory
    pub fn search_location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Resolve the sizing input for a platform
    pub fn sizing(&self, platform: Platform) -> Sizing {
        match (self.size, self.style) {
            (Some(points), _) => Sizing { points, scale_with: None },
            (None, Some(style)) => Sizing {
                points: style.base_size(platform),
                scale_with: Some(style),
            },
            (None, None) => Sizing { points: platform.default_font_size(), scale_with: None },
        }
    }

    /// Memoization key for resolved fonts
    ///
    /// A descriptor with neither size nor style is keyed as if sized with the
    /// platform default, matching the font it resolves to.
    pub fn cache_key(&self, platform: Platform) -> String {
        let weight = self.weight.unwrap_or_default();
        match (self.size, self.style) {
            (Some(size), _) => format!("{}.w{}.sized.{:?}", self.family, weight, size),
            (None, Some(style)) => format!("{}.w{}.styled.{}", self.family, weight, style),
            (None, None) => format!(
                "{}.w{}.sized.{:?}",
                self.family,
                weight,
                platform.default_font_size()
            ),
        }
    }

    /// Name the host knows the font by, e.g. `Roboto-Bold`
    ///
    /// Without a weight the suffix is the capitalized family.
    pub fn resolution_name(&self) -> String {
        match self.weight {
            Some(weight) => format!("{}-{}", self.family, weight.face_name()),
            None => format!("{}-{}", self.family, capitalize_first(&self.family)),
        }
    }

    /// File name searched for, without extension
    pub fn file_name(&self) -> String {
        self.filename.clone().unwrap_or_else(|| self.resolution_name())
    }
}

/// Uppercase the first character and lowercase the rest
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
