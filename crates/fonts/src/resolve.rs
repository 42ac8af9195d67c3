//! Cached font resolution

use cache::Cache;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use crate::descriptor::FontDescriptor;
use crate::loader::{FontLoader, FontRegistrar, FontRegistry};
use crate::style::{Platform, TextStyle};
use crate::weight::{FontWeight, SystemFamily};

// =============================================================================
// Host Collaborators
// =============================================================================

/// Constructs native fonts for the host toolkit
pub trait FontBackend: FontRegistrar {
    /// The native font type
    type Font;

    /// The system font at a size and weight
    fn system_font(&self, size: f64, weight: FontWeight) -> Self::Font;

    /// A registered font by name, `None` if the host does not know it
    fn named_font(&self, name: &str, size: f64) -> Option<Self::Font>;

    /// Apply dynamic-type scaling for a text style
    fn scaled_font(&self, font: Self::Font, style: TextStyle) -> Self::Font;
}

/// Application hook supplying fonts for its own families
pub trait FontProvider<F>: Send + Sync {
    /// Load a font for the descriptor, `None` if unavailable
    fn load_font(&self, descriptor: &FontDescriptor) -> Option<F>;
}

/// How a family is resolved
pub enum FontSource<F> {
    /// Supplied by a registered application provider
    Provided(Arc<dyn FontProvider<F>>),
    /// One of the system pseudo-families
    System(SystemFamily),
    /// A custom font file registered on demand
    File,
}

impl<F> fmt::Debug for FontSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Provided(_) => f.write_str("Provided"),
            FontSource::System(family) => f.debug_tuple("System").field(family).finish(),
            FontSource::File => f.write_str("File"),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Font resolution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Platform selecting text-style sizes
    pub platform: Platform,
    /// Default directory searched for font files
    pub font_dir: PathBuf,
    /// File extensions tried, in order
    pub extensions: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            font_dir: PathBuf::from("fonts"),
            extensions: vec!["ttf".to_string(), "otf".to_string()],
        }
    }
}

impl FontConfig {
    /// Create a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the default font directory
    pub fn font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = dir.into();
        self
    }

    /// Set the file extensions tried, in order
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }
}

// =============================================================================
// Resolver
// =============================================================================

type Providers<F> = HashMap<String, Arc<dyn FontProvider<F>>>;

/// Resolves font descriptors through a shared cache
pub struct FontResolver<B: FontBackend> {
    backend: B,
    cache: Arc<Cache<String, B::Font>>,
    loader: FontLoader,
    providers: RwLock<Providers<B::Font>>,
    platform: Platform,
}

impl<B: FontBackend> FontResolver<B> {
    /// Create a resolver over a backend and a cache, with its own font registry
    pub fn new(backend: B, cache: Arc<Cache<String, B::Font>>, config: FontConfig) -> Self {
        Self::with_registry(backend, cache, config, Arc::new(FontRegistry::new()))
    }

    /// Create a resolver recording font file registrations in a shared registry
    pub fn with_registry(
        backend: B,
        cache: Arc<Cache<String, B::Font>>,
        config: FontConfig,
        registry: Arc<FontRegistry>,
    ) -> Self {
        Self {
            backend,
            cache,
            loader: FontLoader::with_registry(config.font_dir, config.extensions, registry),
            providers: RwLock::new(HashMap::new()),
            platform: config.platform,
        }
    }

    /// The cache backing this resolver
    pub fn cache(&self) -> &Arc<Cache<String, B::Font>> {
        &self.cache
    }

    /// The font file loader
    pub fn loader(&self) -> &FontLoader {
        &self.loader
    }

    /// The host backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The platform sizes are computed for
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Route a family to an application provider
    pub fn register_provider(
        &self,
        family: impl Into<String>,
        provider: Arc<dyn FontProvider<B::Font>>,
    ) {
        self.providers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(family.into(), provider);
    }

    /// Determine how a family is resolved
    pub fn source_for(&self, family: &str) -> FontSource<B::Font> {
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(provider) = providers.get(family) {
            return FontSource::Provided(Arc::clone(provider));
        }

        match SystemFamily::from_family(family) {
            Some(system) => FontSource::System(system),
            None => FontSource::File,
        }
    }

    /// Resolve a descriptor, `None` when no path can produce the font
    pub fn resolve(&self, descriptor: &FontDescriptor) -> Option<Arc<B::Font>> {
        let key = descriptor.cache_key(self.platform);
        if let Some(font) = self.cache.get(&key) {
            tracing::trace!(%key, "font cache hit");
            return Some(font);
        }

        tracing::debug!(%key, "font cache miss");
        let font = match self.source_for(descriptor.family()) {
            FontSource::Provided(provider) => provider.load_font(descriptor),
            FontSource::System(family) => Some(self.system_font(descriptor, family)),
            FontSource::File => self.file_font(descriptor),
        };

        match font {
            Some(font) => Some(self.cache.get_or_insert_with(key, || font)),
            None => {
                tracing::debug!(%key, family = descriptor.family(), "font unavailable");
                None
            }
        }
    }

    fn system_font(&self, descriptor: &FontDescriptor, family: SystemFamily) -> B::Font {
        let sizing = descriptor.sizing(self.platform);
        let weight = descriptor.font_weight().unwrap_or(family.default_weight());
        let font = self.backend.system_font(sizing.points, weight);

        match sizing.scale_with {
            Some(style) => self.backend.scaled_font(font, style),
            None => font,
        }
    }

    fn file_font(&self, descriptor: &FontDescriptor) -> Option<B::Font> {
        self.loader.ensure_loaded(descriptor, &self.backend);

        let sizing = descriptor.sizing(self.platform);
        let font = self
            .backend
            .named_font(&descriptor.resolution_name(), sizing.points)?;

        Some(match sizing.scale_with {
            Some(style) => self.backend.scaled_font(font, style),
            None => font,
        })
    }
}
