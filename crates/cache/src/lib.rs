//! Keyed memoization cache for resolved UI resources
//!
//! This crate provides the store shared by color and font resolution: a
//! key/value map that hands out reference-counted values so that resolving
//! the same key twice yields the same instance.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::{Cache, CacheConfig};
