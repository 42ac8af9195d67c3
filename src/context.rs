//! Kit context
//!
//! A [`KitContext`] owns the resolved-color and resolved-font caches for an
//! application session. Caches live exactly as long as the context (or any
//! other holder of the shared `Arc`), and [`KitContext::clear_caches`] drops
//! every entry on demand, for instance under memory pressure.
//!
//! Font file registrations are recorded in the process-wide
//! [`FontRegistry`], so a file is handed to the host at most once no matter
//! how many contexts resolve it.

use cache::Cache;
use colors::{ColorBackend, ColorComponents, ColorFactory, ColorResolver, ColorSpec, DynamicColor};
use fonts::{FontBackend, FontDescriptor, FontProvider, FontRegistry, FontResolver};
use std::sync::Arc;

use crate::config::KitConfig;

/// Session-scoped owner of the color and font resolvers
pub struct KitContext<C: ColorBackend, F: FontBackend> {
    colors: ColorResolver<C>,
    fonts: FontResolver<F>,
}

impl<C: ColorBackend, F: FontBackend> KitContext<C, F> {
    /// Create a context with fresh caches and the process font registry
    pub fn new(config: KitConfig, color_backend: C, font_backend: F) -> Self {
        let color_cache = Arc::new(Cache::new(config.color_cache.clone()));
        let font_cache = Arc::new(Cache::new(config.font_cache.clone()));
        Self::with_caches(
            config,
            color_backend,
            font_backend,
            color_cache,
            font_cache,
            FontRegistry::process(),
        )
    }

    /// Create a context over existing caches and font registry, shared with
    /// other contexts
    ///
    /// The caches keep the bounds they were built with; `config.color_cache`
    /// and `config.font_cache` are not applied to them.
    pub fn with_caches(
        config: KitConfig,
        color_backend: C,
        font_backend: F,
        color_cache: Arc<Cache<String, C::Color>>,
        font_cache: Arc<Cache<String, F::Font>>,
        font_registry: Arc<FontRegistry>,
    ) -> Self {
        if color_cache.config() != &config.color_cache || font_cache.config() != &config.font_cache
        {
            tracing::debug!(
                color_cache = ?color_cache.config(),
                font_cache = ?font_cache.config(),
                "using provided cache bounds over configured ones"
            );
        }
        tracing::debug!(platform = ?config.fonts.platform, "creating kit context");
        Self {
            colors: ColorResolver::new(color_backend, color_cache),
            fonts: FontResolver::with_registry(font_backend, font_cache, config.fonts, font_registry),
        }
    }

    // =========================================================================
    // Colors
    // =========================================================================

    /// The color resolver
    pub fn colors(&self) -> &ColorResolver<C> {
        &self.colors
    }

    /// Resolve components to a cached native color
    pub fn color(&self, components: &ColorComponents) -> Arc<C::Color> {
        self.colors.resolve(components)
    }

    /// Resolve a hex string, `None` when malformed
    pub fn hex_color(&self, hex: &str) -> Option<Arc<C::Color>> {
        self.colors.resolve_spec(&ColorSpec::Hex(hex.to_string()))
    }

    /// Resolve a declarative color request
    pub fn color_spec(&self, spec: &ColorSpec) -> Option<Arc<C::Color>> {
        self.colors.resolve_spec(spec)
    }

    /// Resolve both variants of a color factory
    pub fn dynamic_color(&self, factory: &ColorFactory) -> DynamicColor<C::Color> {
        self.colors.resolve_factory(factory)
    }

    // =========================================================================
    // Fonts
    // =========================================================================

    /// The font resolver
    pub fn fonts(&self) -> &FontResolver<F> {
        &self.fonts
    }

    /// Resolve a font descriptor, `None` when unavailable
    pub fn font(&self, descriptor: &FontDescriptor) -> Option<Arc<F::Font>> {
        self.fonts.resolve(descriptor)
    }

    /// Route a font family to an application provider
    pub fn register_font_provider(
        &self,
        family: impl Into<String>,
        provider: Arc<dyn FontProvider<F::Font>>,
    ) {
        self.fonts.register_provider(family, provider);
    }

    // =========================================================================
    // Lifetime
    // =========================================================================

    /// Drop every cached color and font
    ///
    /// Registered font files stay registered with the host.
    pub fn clear_caches(&self) {
        self.colors.cache().clear();
        self.fonts.cache().clear();
    }
}
