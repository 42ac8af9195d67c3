//! Cached resolution into host-toolkit colors

use cache::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::components::ColorComponents;
use crate::factory::ColorFactory;
use crate::modifier::ColorSpec;

/// Constructs native colors for the host toolkit
pub trait ColorBackend {
    /// The native color type
    type Color;

    /// Build a native color from channel values
    fn make_color(&self, components: &ColorComponents) -> Self::Color;
}

/// Host appearance used to pick between light and dark variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

/// A resolved light color with an optional dark counterpart
#[derive(Debug)]
pub struct DynamicColor<C> {
    /// Color for the light appearance
    pub light: Arc<C>,
    /// Color for the dark appearance
    pub dark: Option<Arc<C>>,
}

impl<C> DynamicColor<C> {
    /// Pick the variant for an appearance, falling back to light
    pub fn select(&self, appearance: Appearance) -> &Arc<C> {
        match (appearance, &self.dark) {
            (Appearance::Dark, Some(dark)) => dark,
            _ => &self.light,
        }
    }
}

impl<C> Clone for DynamicColor<C> {
    fn clone(&self) -> Self {
        Self { light: Arc::clone(&self.light), dark: self.dark.clone() }
    }
}

/// Resolves color requests through a shared cache
pub struct ColorResolver<B: ColorBackend> {
    backend: B,
    cache: Arc<Cache<String, B::Color>>,
}

impl<B: ColorBackend> ColorResolver<B> {
    /// Create a resolver over a backend and a cache
    pub fn new(backend: B, cache: Arc<Cache<String, B::Color>>) -> Self {
        Self { backend, cache }
    }

    /// The cache backing this resolver
    pub fn cache(&self) -> &Arc<Cache<String, B::Color>> {
        &self.cache
    }

    /// The host backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Resolve components, reusing the cached native color when present
    pub fn resolve(&self, components: &ColorComponents) -> Arc<B::Color> {
        let key = components.cache_key();
        if let Some(color) = self.cache.get(&key) {
            tracing::trace!(%key, "color cache hit");
            return color;
        }

        tracing::debug!(%key, "color cache miss");
        self.cache
            .get_or_insert_with(key, || self.backend.make_color(components))
    }

    /// Resolve a declarative request, `None` when its hex string is malformed
    pub fn resolve_spec(&self, spec: &ColorSpec) -> Option<Arc<B::Color>> {
        spec.components().map(|components| self.resolve(&components))
    }

    /// Resolve both variants of a factory
    pub fn resolve_factory(&self, factory: &ColorFactory) -> DynamicColor<B::Color> {
        DynamicColor {
            light: self.resolve(&factory.components()),
            dark: factory.dark_components().map(|dark| self.resolve(&dark)),
        }
    }
}
