//! Font resolution for UMKit
//!
//! This crate turns declarative font descriptors (family, weight, text style,
//! point size) into host-toolkit fonts. Resolution is memoized per descriptor
//! key, and custom font files are registered with the host at most once.
//!
//! # Resolution order
//!
//! 1. Cached font for the descriptor key
//! 2. An application [`FontProvider`] registered for the family
//! 3. The system pseudo-families (`bold`, `regular`, `thin`, `medium`)
//! 4. A custom font file named `{family}-{Weight}` found in the font directory
//!
//! # Example
//!
//! ```rust
//! use fonts::{FontDescriptor, FontWeight, Platform, TextStyle};
//!
//! let body = FontDescriptor::new("regular").style(TextStyle::Body);
//! assert_eq!(body.cache_key(Platform::Ios), "regular.wregular.styled.body");
//!
//! let heading = FontDescriptor::new("Roboto").weight(FontWeight::Bold).size(20.0);
//! assert_eq!(heading.resolution_name(), "Roboto-Bold");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod descriptor;
pub mod loader;
pub mod resolve;
pub mod style;
pub mod weight;

pub use descriptor::{FontDescriptor, Sizing};
pub use loader::{FontLoadError, FontLoader, FontRegistrar, FontRegistry, LoadOutcome};
pub use resolve::{FontBackend, FontConfig, FontProvider, FontResolver, FontSource};
pub use style::{Platform, TextStyle};
pub use weight::{FontWeight, SystemFamily};
