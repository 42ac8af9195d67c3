//! Gray and dark-mode color modifiers
//!
//! A modifier freezes its input components and derives new components on
//! demand. [`ColorSpec`] is the closed set of ways a color can be requested.

use serde::{Deserialize, Serialize};

use crate::components::ColorComponents;

// =============================================================================
// Gray Modifier
// =============================================================================

/// Desaturates a color by averaging its channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrayModifier {
    base: ColorComponents,
}

impl GrayModifier {
    /// Create a gray modifier over the given components
    pub fn new(base: ColorComponents) -> Self {
        Self { base }
    }

    /// Create a gray modifier from a hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        ColorComponents::from_hex(hex).map(Self::new)
    }

    /// The gray components
    pub fn components(&self) -> ColorComponents {
        self.base.grayscale()
    }
}

// =============================================================================
// Dark Modifier
// =============================================================================

/// Derives a dark-appearance counterpart of a color
///
/// Colored inputs are tinted by the offset directly. Gray inputs are inverted
/// first, so a light gray becomes a dark gray before the offset applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DarkModifier {
    base: ColorComponents,
    offset: f64,
    rgb_offset: Option<f64>,
    gray_offset: Option<f64>,
}

impl DarkModifier {
    /// Create a dark modifier with a zero offset
    pub fn new(base: ColorComponents) -> Self {
        Self { base, offset: 0.0, rgb_offset: None, gray_offset: None }
    }

    /// Create a dark modifier from a hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        ColorComponents::from_hex(hex).map(Self::new)
    }

    /// Signed offset used when no more specific offset is set
    pub fn offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Signed offset for non-gray inputs
    pub fn rgb_offset(self, offset: f64) -> Self {
        Self { rgb_offset: Some(offset), ..self }
    }

    /// Signed offset for gray inputs
    pub fn gray_offset(self, offset: f64) -> Self {
        Self { gray_offset: Some(offset), ..self }
    }

    /// The derived dark components
    pub fn components(&self) -> ColorComponents {
        if self.base.is_grayscale() {
            let offset = self.gray_offset.unwrap_or(self.offset);
            self.base.inverted().tinted(offset)
        } else {
            let offset = self.rgb_offset.unwrap_or(self.offset);
            self.base.tinted(offset)
        }
    }
}

// =============================================================================
// Color Spec
// =============================================================================

/// A declarative color request prior to resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ColorSpec {
    /// Literal channel values
    Rgba(ColorComponents),
    /// A `#RRGGBB` or `#RRGGBBAA` string
    Hex(String),
    /// Gray conversion of another color
    Gray(GrayModifier),
    /// Dark-mode derivation of another color
    Dark(DarkModifier),
    /// Another request lightened (positive offset) or darkened (negative)
    Tinted {
        /// The request being tinted
        base: Box<ColorSpec>,
        /// Signed tint amount
        offset: f64,
    },
}

impl ColorSpec {
    /// Compute the requested components, `None` for a malformed hex string
    pub fn components(&self) -> Option<ColorComponents> {
        match self {
            ColorSpec::Rgba(components) => Some(*components),
            ColorSpec::Hex(hex) => ColorComponents::from_hex(hex),
            ColorSpec::Gray(modifier) => Some(modifier.components()),
            ColorSpec::Dark(modifier) => Some(modifier.components()),
            ColorSpec::Tinted { base, offset } => base.components().map(|c| c.tinted(*offset)),
        }
    }

    /// Request this color lightened by `amount`
    pub fn lighter(self, amount: f64) -> Self {
        ColorSpec::Tinted { base: Box::new(self), offset: amount }
    }

    /// Request this color darkened by `amount`
    pub fn darker(self, amount: f64) -> Self {
        ColorSpec::Tinted { base: Box::new(self), offset: -amount }
    }
}

impl From<ColorComponents> for ColorSpec {
    fn from(components: ColorComponents) -> Self {
        ColorSpec::Rgba(components)
    }
}

impl From<GrayModifier> for ColorSpec {
    fn from(modifier: GrayModifier) -> Self {
        ColorSpec::Gray(modifier)
    }
}

impl From<DarkModifier> for ColorSpec {
    fn from(modifier: DarkModifier) -> Self {
        ColorSpec::Dark(modifier)
    }
}
