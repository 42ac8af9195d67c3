//! Immutable color factory
//!
//! A [`ColorFactory`] carries the light-appearance components and, optionally,
//! a dark-appearance counterpart. Every setter returns a new factory.

use crate::components::ColorComponents;
use crate::modifier::{DarkModifier, GrayModifier};

/// A palette entry backed by a hex literal
///
/// Implemented by application color enums. The literal is expected to be
/// valid; [`ColorFactory::named`] panics otherwise.
pub trait NamedColor {
    /// The `#RRGGBB` or `#RRGGBBAA` literal
    fn hex(&self) -> &str;

    /// A factory for this color
    fn factory(&self) -> ColorFactory {
        ColorFactory::named(self)
    }

    /// The decoded components
    fn components(&self) -> ColorComponents {
        self.factory().components()
    }
}

/// Immutable builder pairing light and dark color variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorFactory {
    light: ColorComponents,
    dark: Option<ColorComponents>,
}

impl ColorFactory {
    /// Create a factory without a dark variant
    pub fn new(components: ColorComponents) -> Self {
        Self { light: components, dark: None }
    }

    /// Create a factory from a hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        ColorComponents::from_hex(hex).map(Self::new)
    }

    /// Create a factory from a palette entry
    ///
    /// # Panics
    ///
    /// Panics if the entry's hex literal is malformed.
    pub fn named<N: NamedColor + ?Sized>(color: &N) -> Self {
        match color.hex().parse::<ColorComponents>() {
            Ok(components) => Self::new(components),
            Err(e) => panic!("invalid palette color literal: {}", e),
        }
    }

    /// Fully transparent black
    pub fn clear() -> Self {
        Self::new(ColorComponents::CLEAR)
    }

    /// The light-appearance components
    pub fn components(&self) -> ColorComponents {
        self.light
    }

    /// The dark-appearance components, if set
    pub fn dark_components(&self) -> Option<ColorComponents> {
        self.dark
    }

    /// Replace alpha on both variants
    pub fn alpha(self, alpha: f64) -> Self {
        Self {
            light: self.light.with_alpha(alpha),
            dark: self.dark.map(|dark| dark.with_alpha(alpha)),
        }
    }

    /// Replace red with a byte-scale value (0–255)
    pub fn red(self, red: f64) -> Self {
        Self { light: ColorComponents { red: red / 255.0, ..self.light }, ..self }
    }

    /// Replace green with a byte-scale value (0–255)
    pub fn green(self, green: f64) -> Self {
        Self { light: ColorComponents { green: green / 255.0, ..self.light }, ..self }
    }

    /// Replace blue with a byte-scale value (0–255)
    pub fn blue(self, blue: f64) -> Self {
        Self { light: ColorComponents { blue: blue / 255.0, ..self.light }, ..self }
    }

    /// Lighten the light variant
    pub fn lighter(self, amount: f64) -> Self {
        Self { light: self.light.lighter(amount), ..self }
    }

    /// Darken the light variant
    pub fn darker(self, amount: f64) -> Self {
        Self { light: self.light.darker(amount), ..self }
    }

    /// Use another color's light components as this factory's dark variant
    pub fn dark_color(self, dark: impl Into<ColorFactory>) -> Self {
        Self { dark: Some(dark.into().components()), ..self }
    }

    /// Use another color as the light variant, with this one as the dark variant
    pub fn light_color(self, light: impl Into<ColorFactory>) -> Self {
        Self::new(light.into().components()).dark_color(self)
    }
}

impl Default for ColorFactory {
    fn default() -> Self {
        Self::clear()
    }
}

impl From<ColorComponents> for ColorFactory {
    fn from(components: ColorComponents) -> Self {
        Self::new(components)
    }
}

impl From<GrayModifier> for ColorFactory {
    fn from(modifier: GrayModifier) -> Self {
        Self::new(modifier.components())
    }
}

impl From<DarkModifier> for ColorFactory {
    fn from(modifier: DarkModifier) -> Self {
        Self::new(modifier.components())
    }
}
