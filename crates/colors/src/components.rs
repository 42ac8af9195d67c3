//! RGBA color components
//!
//! Channels are normalized fractions in `[0, 1]`. Values outside that range
//! are never clamped by the model: repeated tinting may overshoot, and the
//! overshoot is carried through every derived value. Only the hex encoding,
//! being a byte format, saturates each channel into `0..=255`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color parsing error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string does not start with `#`
    #[error("Missing '#' prefix: {0}")]
    MissingPrefix(String),

    /// Fewer than six digits follow the `#`
    #[error("Hex color too short: {0}")]
    TooShort(String),

    /// The payload contains characters that are not hex digits
    #[error("Invalid hex digits: {0}")]
    InvalidHex(String),
}

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ColorError>;

/// Immutable RGBA value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorComponents {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
    /// Alpha channel
    pub alpha: f64,
}

impl ColorComponents {
    /// Fully transparent black
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create components from channel fractions
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Create opaque components from channel fractions
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create components from byte values
    pub fn from_bytes(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Decode `#RRGGBB` or `#RRGGBBAA`, returning `None` on malformed input
    ///
    /// Use [`str::parse`] to learn why a string was rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex.parse().ok()
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Encode as `#RRGGBBAA` with uppercase digits
    pub fn hex(&self) -> String {
        let mut out = String::with_capacity(9);
        out.push('#');
        for channel in [self.red, self.green, self.blue, self.alpha] {
            out.push_str(&format!("{:02X}", channel_byte(channel)));
        }
        out
    }

    /// Memoization key for resolved colors
    ///
    /// Channels are embedded verbatim, so components that differ in the last
    /// bit produce distinct keys.
    pub fn cache_key(&self) -> String {
        format!(
            "{:?}.{:?}.{:?}.{:?}",
            self.red * 255.0,
            self.green * 255.0,
            self.blue * 255.0,
            self.alpha * 100_000.0
        )
    }

    // =========================================================================
    // Tint Math
    // =========================================================================

    /// Move each color channel toward 1.0 by `amount` of its remaining range
    pub fn lighter(&self, amount: f64) -> Self {
        Self::new(
            self.red + (1.0 - self.red) * amount,
            self.green + (1.0 - self.green) * amount,
            self.blue + (1.0 - self.blue) * amount,
            self.alpha,
        )
    }

    /// Move each color channel toward 0.0 by `amount` of its value
    pub fn darker(&self, amount: f64) -> Self {
        Self::new(
            self.red - self.red * amount,
            self.green - self.green * amount,
            self.blue - self.blue * amount,
            self.alpha,
        )
    }

    /// Apply a signed tint: negative darkens, positive (or zero) lightens
    pub fn tinted(&self, offset: f64) -> Self {
        if offset < 0.0 {
            self.darker(-offset)
        } else {
            self.lighter(offset)
        }
    }

    /// Replace the alpha channel
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { alpha, ..*self }
    }

    /// Invert the color channels, keeping alpha
    pub fn inverted(&self) -> Self {
        Self::new(1.0 - self.red, 1.0 - self.green, 1.0 - self.blue, self.alpha)
    }

    // =========================================================================
    // Grayscale
    // =========================================================================

    /// True when red, green and blue are bit-for-bit equal
    pub fn is_grayscale(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    /// Replace the color channels with their mean, unless already gray
    pub fn grayscale(&self) -> Self {
        if self.is_grayscale() {
            return *self;
        }

        let average = (self.red + self.blue + self.green) / 3.0;
        Self::new(average, average, average, self.alpha)
    }
}

/// Round a channel to a byte; `as` saturates out-of-range values and maps NaN to 0
fn channel_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

fn parse_hex_digits(digits: Option<&str>, original: &str) -> Result<u32> {
    let digits = digits.ok_or_else(|| ColorError::InvalidHex(original.to_string()))?;

    // from_str_radix tolerates a leading '+', so check the digits first
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(original.to_string()));
    }

    u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(original.to_string()))
}

impl FromStr for ColorComponents {
    type Err = ColorError;

    fn from_str(hex: &str) -> Result<Self> {
        let payload = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingPrefix(hex.to_string()))?;

        let length = hex.chars().count();
        if length < 7 {
            return Err(ColorError::TooShort(hex.to_string()));
        }

        let rgb = parse_hex_digits(payload.get(0..6), hex)?;
        let alpha = if length >= 9 {
            parse_hex_digits(payload.get(6..8), hex)? as u8
        } else {
            0xFF
        };

        Ok(Self::from_bytes((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, alpha))
    }
}

impl fmt::Display for ColorComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
