//! Custom font file loading
//!
//! Font files are looked up as `{name}.ttf`, then `{name}.otf` (by default)
//! in the descriptor's location or the loader's default directory, read, and
//! handed to the host for registration. A name is recorded only after the
//! host accepts it, so failed attempts are retried on the next call.
//!
//! Registered names live in a [`FontRegistry`]. Loaders that share a registry
//! never register the same name twice; [`FontRegistry::process`] is the one
//! registry for the whole process.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use thiserror::Error;

use crate::descriptor::FontDescriptor;

/// Font loading error types
#[derive(Debug, Error)]
pub enum FontLoadError {
    /// No file with a known extension was found
    #[error("Font file not found: {name} in {}", dir.display())]
    NotFound {
        /// File name without extension
        name: String,
        /// Directory searched
        dir: PathBuf,
    },

    /// The file exists but could not be read
    #[error("Failed to read font file {}: {source}", path.display())]
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The host refused the font data
    #[error("Font registration rejected for {name}: {reason}")]
    Rejected {
        /// File name without extension
        name: String,
        /// Reason reported by the host
        reason: String,
    },
}

/// Result type for font loading
pub type Result<T> = std::result::Result<T, FontLoadError>;

/// Registers font data with the host font system
#[cfg_attr(test, mockall::automock)]
pub trait FontRegistrar {
    /// Register the contents of a font file
    fn register_font(&self, name: &str, data: &[u8]) -> std::result::Result<(), String>;
}

/// Outcome of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The name was registered by an earlier call
    AlreadyLoaded,
    /// The file at this path was registered now
    Registered(PathBuf),
}

// =============================================================================
// Registry
// =============================================================================

static PROCESS_REGISTRY: OnceLock<Arc<FontRegistry>> = OnceLock::new();

/// Names of font files already registered with the host
#[derive(Debug, Default)]
pub struct FontRegistry {
    loaded: Mutex<HashSet<String>>,
}

impl FontRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by every caller in this process
    pub fn process() -> Arc<FontRegistry> {
        Arc::clone(PROCESS_REGISTRY.get_or_init(|| Arc::new(FontRegistry::new())))
    }

    /// Check whether a file name has been registered
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    /// Number of registered file names
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.loaded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Loads custom font files at most once per name
#[derive(Debug)]
pub struct FontLoader {
    registry: Arc<FontRegistry>,
    default_dir: PathBuf,
    extensions: Vec<String>,
}

impl FontLoader {
    /// Create a loader with its own registry, searching `default_dir` for the
    /// given extensions, in order
    pub fn new(default_dir: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self::with_registry(default_dir, extensions, Arc::new(FontRegistry::new()))
    }

    /// Create a loader recording registrations in a shared registry
    pub fn with_registry(
        default_dir: impl Into<PathBuf>,
        extensions: Vec<String>,
        registry: Arc<FontRegistry>,
    ) -> Self {
        Self { registry, default_dir: default_dir.into(), extensions }
    }

    /// The registry this loader records into
    pub fn registry(&self) -> &Arc<FontRegistry> {
        &self.registry
    }

    /// Check whether a file name has been registered
    pub fn is_loaded(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Number of registered file names
    pub fn loaded_count(&self) -> usize {
        self.registry.len()
    }

    /// Register the descriptor's font file unless already registered
    pub fn load<R>(&self, descriptor: &FontDescriptor, registrar: &R) -> Result<LoadOutcome>
    where
        R: FontRegistrar + ?Sized,
    {
        let name = descriptor.file_name();

        // Held across the attempt so concurrent callers cannot both register
        let mut loaded = self.registry.lock();
        if loaded.contains(&name) {
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let dir = descriptor.search_location().unwrap_or(&self.default_dir);
        let path = self
            .locate(dir, &name)
            .ok_or_else(|| FontLoadError::NotFound { name: name.clone(), dir: dir.to_path_buf() })?;

        let data = std::fs::read(&path)
            .map_err(|source| FontLoadError::Io { path: path.clone(), source })?;

        registrar
            .register_font(&name, &data)
            .map_err(|reason| FontLoadError::Rejected { name: name.clone(), reason })?;

        tracing::debug!(%name, path = %path.display(), "registered font file");
        loaded.insert(name);
        Ok(LoadOutcome::Registered(path))
    }

    /// Best-effort variant of [`FontLoader::load`]; failures are logged and dropped
    pub fn ensure_loaded<R>(&self, descriptor: &FontDescriptor, registrar: &R)
    where
        R: FontRegistrar + ?Sized,
    {
        if let Err(e) = self.load(descriptor, registrar) {
            tracing::warn!("Failed to load font: {}", e);
        }
    }

    fn locate(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
    }
}
