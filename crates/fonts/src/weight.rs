//! Font weights and the system pseudo-families

use serde::{Deserialize, Serialize};
use std::fmt;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    /// Ultra light (100)
    UltraLight,
    /// Thin (200)
    Thin,
    /// Light (300)
    Light,
    /// Regular (400)
    #[default]
    Regular,
    /// Medium (500)
    Medium,
    /// Semibold (600)
    Semibold,
    /// Bold (700)
    Bold,
    /// Heavy (800)
    Heavy,
    /// Black (900)
    Black,
}

impl FontWeight {
    /// Numeric weight (100–900)
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::UltraLight => 100,
            FontWeight::Thin => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
            FontWeight::Black => 900,
        }
    }

    /// Lowercase name used in cache keys
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::UltraLight => "ultralight",
            FontWeight::Thin => "thin",
            FontWeight::Light => "light",
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
            FontWeight::Heavy => "heavy",
            FontWeight::Black => "black",
        }
    }

    /// Face suffix used in font file names, e.g. `Roboto-SemiBold`
    pub fn face_name(&self) -> &'static str {
        match self {
            FontWeight::UltraLight => "UltraLight",
            FontWeight::Thin => "Thin",
            FontWeight::Light => "Light",
            FontWeight::Regular => "Regular",
            FontWeight::Medium => "Medium",
            FontWeight::Semibold => "SemiBold",
            FontWeight::Bold => "Bold",
            FontWeight::Heavy => "Heavy",
            FontWeight::Black => "Black",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in families resolved to the host's system font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemFamily {
    /// System font, bold
    Bold,
    /// System font, regular
    Regular,
    /// System font, thin
    Thin,
    /// System font, medium
    Medium,
}

impl SystemFamily {
    /// Match a family identifier against the system pseudo-families
    pub fn from_family(family: &str) -> Option<Self> {
        match family {
            "bold" => Some(SystemFamily::Bold),
            "regular" => Some(SystemFamily::Regular),
            "thin" => Some(SystemFamily::Thin),
            "medium" => Some(SystemFamily::Medium),
            _ => None,
        }
    }

    /// Weight used when the descriptor does not set one
    pub fn default_weight(&self) -> FontWeight {
        match self {
            SystemFamily::Bold => FontWeight::Bold,
            SystemFamily::Regular => FontWeight::Regular,
            SystemFamily::Thin => FontWeight::Thin,
            SystemFamily::Medium => FontWeight::Medium,
        }
    }
}
