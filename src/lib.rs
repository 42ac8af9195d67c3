//! UMKit: color and font resolution for native UI toolkits
//!
//! This crate ties the workspace together: a [`KitContext`] owns the color
//! and font caches and resolves requests through host-supplied backends.
//!
//! # Crates
//!
//! - [`cache`] - Keyed memoization store
//! - [`colors`] - RGBA model, hex codec, tint math, light/dark pairing
//! - [`fonts`] - Font descriptors, resolution and font file registration
//! - [`list_index`] - Row, section and index-path helpers
//! - [`menu`] - Menu items with composable availability checks
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use umkit::colors::{ColorBackend, ColorComponents};
//! use umkit::fonts::{FontBackend, FontRegistrar, FontWeight, TextStyle};
//! use umkit::{FontDescriptor, KitConfig, KitContext};
//!
//! struct Host;
//!
//! impl ColorBackend for Host {
//!     type Color = String;
//!     fn make_color(&self, components: &ColorComponents) -> String {
//!         components.hex()
//!     }
//! }
//!
//! impl FontRegistrar for Host {
//!     fn register_font(&self, _name: &str, _data: &[u8]) -> Result<(), String> {
//!         Ok(())
//!     }
//! }
//!
//! impl FontBackend for Host {
//!     type Font = (f64, u16);
//!     fn system_font(&self, size: f64, weight: FontWeight) -> (f64, u16) {
//!         (size, weight.value())
//!     }
//!     fn named_font(&self, _name: &str, _size: f64) -> Option<(f64, u16)> {
//!         None
//!     }
//!     fn scaled_font(&self, font: (f64, u16), _style: TextStyle) -> (f64, u16) {
//!         font
//!     }
//! }
//!
//! let kit = KitContext::new(KitConfig::default(), Host, Host);
//!
//! let red = kit.hex_color("#FF0000").unwrap();
//! assert_eq!(red.as_str(), "#FF0000FF");
//!
//! let body = kit.font(&FontDescriptor::new("regular").style(TextStyle::Body)).unwrap();
//! assert!(Arc::ptr_eq(&body, &kit.font(&FontDescriptor::new("regular").style(TextStyle::Body)).unwrap()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod menu;

pub use cache;
pub use colors;
pub use fonts;
pub use list_index;

// Re-export commonly used types
pub use config::{ConfigError, KitConfig};
pub use context::KitContext;
pub use menu::Menu;

pub use colors::{Appearance, ColorComponents, ColorFactory, ColorSpec, DynamicColor};
pub use fonts::{FontDescriptor, FontWeight, Platform, TextStyle};
