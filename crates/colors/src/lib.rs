//! Color utilities for UMKit
//!
//! This crate provides the RGBA value model with its hex codec and tint math,
//! the gray and dark-mode modifiers, an immutable color factory pairing light
//! and dark variants, and cached resolution into host-toolkit colors.
//!
//! # Example
//!
//! ```rust
//! use colors::{ColorComponents, ColorFactory};
//!
//! let red: ColorComponents = "#FF0000".parse().unwrap();
//! assert_eq!(red.hex(), "#FF0000FF");
//!
//! let factory = ColorFactory::new(red).lighter(0.5).alpha(0.8);
//! assert_eq!(factory.components().alpha, 0.8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod factory;
pub mod modifier;
pub mod resolve;

pub use components::{ColorComponents, ColorError};
pub use factory::{ColorFactory, NamedColor};
pub use modifier::{ColorSpec, DarkModifier, GrayModifier};
pub use resolve::{Appearance, ColorBackend, ColorResolver, DynamicColor};
