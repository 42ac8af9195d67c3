//! Resolution Integration Tests
//!
//! End-to-end tests of color and font resolution through a `KitContext`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use umkit::colors::{ColorBackend, DarkModifier, GrayModifier};
use umkit::fonts::{FontBackend, FontProvider, FontRegistrar, FontRegistry};
use umkit::{
    Appearance, ColorComponents, ColorFactory, ColorSpec, FontDescriptor, FontWeight, KitConfig,
    KitContext, Platform, TextStyle,
};

// =============================================================================
// Test Host
// =============================================================================

#[derive(Debug, PartialEq)]
struct NativeColor {
    hex: String,
}

#[derive(Debug, PartialEq)]
struct NativeFont {
    name: String,
    size: f64,
    scaled: bool,
}

#[derive(Default)]
struct TestHost {
    colors_built: AtomicUsize,
    fonts_built: AtomicUsize,
    registrations: AtomicUsize,
    registered: Arc<Mutex<Vec<String>>>,
}

impl TestHost {
    /// A host seeing the same registered fonts as `other`, like two windows
    /// of one process
    fn sharing_fonts_with(other: &TestHost) -> Self {
        Self { registered: Arc::clone(&other.registered), ..Self::default() }
    }
}

impl ColorBackend for TestHost {
    type Color = NativeColor;

    fn make_color(&self, components: &ColorComponents) -> NativeColor {
        self.colors_built.fetch_add(1, Ordering::SeqCst);
        NativeColor { hex: components.hex() }
    }
}

impl FontRegistrar for TestHost {
    fn register_font(&self, name: &str, data: &[u8]) -> Result<(), String> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        if data.is_empty() {
            return Err("empty font data".to_string());
        }
        self.registered.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

impl FontBackend for TestHost {
    type Font = NativeFont;

    fn system_font(&self, size: f64, weight: FontWeight) -> NativeFont {
        self.fonts_built.fetch_add(1, Ordering::SeqCst);
        NativeFont { name: format!("system-{}", weight), size, scaled: false }
    }

    fn named_font(&self, name: &str, size: f64) -> Option<NativeFont> {
        let registered = self.registered.lock().unwrap().iter().any(|n| n == name);
        if !registered {
            return None;
        }
        self.fonts_built.fetch_add(1, Ordering::SeqCst);
        Some(NativeFont { name: name.to_string(), size, scaled: false })
    }

    fn scaled_font(&self, font: NativeFont, _style: TextStyle) -> NativeFont {
        NativeFont { scaled: true, ..font }
    }
}

fn kit(config: KitConfig) -> KitContext<TestHost, TestHost> {
    KitContext::new(config, TestHost::default(), TestHost::default())
}

// =============================================================================
// Colors
// =============================================================================

/// Decoding and encoding a primary color
#[test]
fn test_red_decode_encode() {
    let red = ColorComponents::from_hex("#FF0000").unwrap();
    assert_eq!(red, ColorComponents::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(red.hex(), "#FF0000FF");
}

/// A half-transparent mid gray is recognized as grayscale
#[test]
fn test_translucent_gray() {
    let gray = ColorComponents::from_hex("#80808080").unwrap();
    for channel in [gray.red, gray.green, gray.blue, gray.alpha] {
        assert!((channel - 0.502).abs() < 1e-3);
    }
    assert!(gray.is_grayscale());
    assert_eq!(gray.hex(), "#80808080");
}

/// Malformed strings resolve to nothing
#[test]
fn test_malformed_colors_are_absent() {
    let kit = kit(KitConfig::default());
    assert!(ColorComponents::from_hex("not-a-color").is_none());
    assert!(ColorComponents::from_hex("#ZZZZZZ").is_none());
    assert!(kit.hex_color("#ZZZZZZ").is_none());
    assert!(kit.colors().cache().is_empty());
}

/// The same components resolve to the same native instance
#[test]
fn test_color_identity_through_context() {
    let kit = kit(KitConfig::default());

    let from_hex = kit.hex_color("#336699").unwrap();
    let from_components = kit.color(&ColorComponents::from_hex("#336699").unwrap());
    assert!(Arc::ptr_eq(&from_hex, &from_components));
    assert_eq!(kit.colors().backend().colors_built.load(Ordering::SeqCst), 1);

    kit.clear_caches();
    let rebuilt = kit.hex_color("#336699").unwrap();
    assert!(!Arc::ptr_eq(&from_hex, &rebuilt));
    assert_eq!(*from_hex, *rebuilt);
}

/// Modifier-derived colors resolve through the same cache
#[test]
fn test_modifier_specs() {
    let kit = kit(KitConfig::default());
    let white = ColorComponents::rgb(1.0, 1.0, 1.0);

    let dark = kit.color_spec(&ColorSpec::from(DarkModifier::new(white))).unwrap();
    assert_eq!(dark.hex, "#000000FF");

    let gray = kit.color_spec(&ColorSpec::from(GrayModifier::new(white))).unwrap();
    let direct = kit.color(&white);
    assert!(Arc::ptr_eq(&gray, &direct));
}

/// Light/dark pairs select by appearance
#[test]
fn test_dynamic_color_pairing() {
    let kit = kit(KitConfig::default());
    let surface = ColorFactory::from_hex("#FAFAFA")
        .unwrap()
        .dark_color(ColorFactory::from_hex("#121212").unwrap())
        .alpha(0.5);

    let dynamic = kit.dynamic_color(&surface);
    assert_eq!(dynamic.select(Appearance::Light).hex, "#FAFAFA80");
    assert_eq!(dynamic.select(Appearance::Dark).hex, "#12121280");
}

/// Contexts can share one cache
#[test]
fn test_shared_caches_between_contexts() {
    let color_cache = Arc::new(umkit::cache::Cache::unbounded());
    let font_cache = Arc::new(umkit::cache::Cache::unbounded());

    let first = KitContext::with_caches(
        KitConfig::default(),
        TestHost::default(),
        TestHost::default(),
        Arc::clone(&color_cache),
        Arc::clone(&font_cache),
        Arc::new(FontRegistry::new()),
    );
    let second = KitContext::with_caches(
        KitConfig::default(),
        TestHost::default(),
        TestHost::default(),
        color_cache,
        font_cache,
        Arc::new(FontRegistry::new()),
    );

    let a = first.hex_color("#010203").unwrap();
    let b = second.hex_color("#010203").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(second.colors().backend().colors_built.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Fonts
// =============================================================================

/// Styled system fonts are cached per style
#[test]
fn test_system_font_cache_per_style() {
    let kit = kit(KitConfig::default());
    let body = FontDescriptor::new("regular").style(TextStyle::Body);

    let first = kit.font(&body).unwrap();
    let second = kit.font(&body).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.scaled);

    let title = kit.font(&FontDescriptor::new("regular").style(TextStyle::Title1)).unwrap();
    assert!(!Arc::ptr_eq(&first, &title));
    assert_eq!(kit.fonts().backend().fonts_built.load(Ordering::SeqCst), 2);
}

/// Descriptors built at different call sites share an entry when their keys match
#[test]
fn test_font_key_collision_shares_instance() {
    let kit = kit(KitConfig::default().platform(Platform::Tvos));

    let implicit = kit.font(&FontDescriptor::new("bold")).unwrap();
    let explicit = kit
        .font(&FontDescriptor::new("bold").weight(FontWeight::Regular).size(29.0))
        .unwrap();

    assert!(Arc::ptr_eq(&implicit, &explicit));
    assert_eq!(implicit.name, "system-bold");
}

/// Custom font files are registered once and resolved by name
#[test]
fn test_custom_font_file_lifecycle() {
    let font_dir = TempDir::new().unwrap();
    std::fs::write(font_dir.path().join("Roboto-Bold.ttf"), b"roboto").unwrap();
    std::fs::write(font_dir.path().join("Broken-Broken.otf"), b"").unwrap();

    let kit = kit(KitConfig::default().font_dir(font_dir.path()));

    let heading = FontDescriptor::new("Roboto").weight(FontWeight::Bold);
    let styled = kit.font(&heading.clone().style(TextStyle::Headline)).unwrap();
    let sized = kit.font(&heading.size(40.0)).unwrap();

    assert_eq!(styled.name, "Roboto-Bold");
    assert!(styled.scaled);
    assert_eq!(sized.size, 40.0);
    assert!(!sized.scaled);
    assert!(kit.fonts().loader().is_loaded("Roboto-Bold"));

    // Rejected registrations resolve to nothing and are retried
    assert!(kit.font(&FontDescriptor::new("Broken").size(10.0)).is_none());
    assert!(kit.font(&FontDescriptor::new("Broken").size(10.0)).is_none());

    let registrations = kit.fonts().backend().registrations.load(Ordering::SeqCst);
    assert_eq!(registrations, 3);
}

/// Provided caches keep their own bounds
#[test]
fn test_provided_caches_ignore_configured_bounds() {
    let config = KitConfig::default().color_cache(umkit::cache::CacheConfig::new().max_entries(1));
    let kit = KitContext::with_caches(
        config,
        TestHost::default(),
        TestHost::default(),
        Arc::new(umkit::cache::Cache::unbounded()),
        Arc::new(umkit::cache::Cache::unbounded()),
        Arc::new(FontRegistry::new()),
    );

    kit.hex_color("#000000").unwrap();
    kit.hex_color("#FFFFFF").unwrap();
    assert_eq!(kit.colors().cache().len(), 2);
}

/// Contexts sharing caches and a registry hand each font file to the host once
#[test]
fn test_shared_registry_registers_font_once() {
    let font_dir = TempDir::new().unwrap();
    std::fs::write(font_dir.path().join("Roboto-Bold.ttf"), b"roboto").unwrap();
    let config = KitConfig::default().font_dir(font_dir.path());

    let color_cache = Arc::new(umkit::cache::Cache::unbounded());
    let font_cache = Arc::new(umkit::cache::Cache::unbounded());
    let registry = Arc::new(FontRegistry::new());

    let first_host = TestHost::default();
    let second_host = TestHost::sharing_fonts_with(&first_host);

    let first = KitContext::with_caches(
        config.clone(),
        TestHost::default(),
        first_host,
        Arc::clone(&color_cache),
        Arc::clone(&font_cache),
        Arc::clone(&registry),
    );
    let second = KitContext::with_caches(
        config,
        TestHost::default(),
        second_host,
        color_cache,
        font_cache,
        Arc::clone(&registry),
    );

    let roboto = FontDescriptor::new("Roboto").weight(FontWeight::Bold);
    let small = first.font(&roboto.clone().size(18.0)).unwrap();
    let large = second.font(&roboto.size(24.0)).unwrap();

    assert_eq!(small.size, 18.0);
    assert_eq!(large.size, 24.0);
    assert_eq!(first.fonts().backend().registrations.load(Ordering::SeqCst), 1);
    assert_eq!(second.fonts().backend().registrations.load(Ordering::SeqCst), 0);
    assert!(registry.contains("Roboto-Bold"));
    assert_eq!(registry.len(), 1);
}

/// Independently created contexts share the process registry
#[test]
fn test_process_registry_across_contexts() {
    let font_dir = TempDir::new().unwrap();
    std::fs::write(font_dir.path().join("Nunito-Light.ttf"), b"nunito").unwrap();
    let config = KitConfig::default().font_dir(font_dir.path());

    let first_host = TestHost::default();
    let second_host = TestHost::sharing_fonts_with(&first_host);
    let first = KitContext::new(config.clone(), TestHost::default(), first_host);
    let second = KitContext::new(config, TestHost::default(), second_host);

    let nunito = FontDescriptor::new("Nunito").weight(FontWeight::Light).size(15.0);
    let a = first.font(&nunito).unwrap();
    let b = second.font(&nunito).unwrap();

    // Separate font caches, one registration
    assert!(!Arc::ptr_eq(&a, &b));
    let registrations = first.fonts().backend().registrations.load(Ordering::SeqCst)
        + second.fonts().backend().registrations.load(Ordering::SeqCst);
    assert_eq!(registrations, 1);
    assert!(FontRegistry::process().contains("Nunito-Light"));
}

/// Tinted color requests resolve like their imperative equivalents
#[test]
fn test_tinted_spec_resolution() {
    let kit = kit(KitConfig::default());

    let requested = kit.color_spec(&ColorSpec::Hex("#336699".to_string()).lighter(0.2)).unwrap();
    let direct = kit.color(&ColorComponents::from_hex("#336699").unwrap().lighter(0.2));
    assert!(Arc::ptr_eq(&requested, &direct));
}

/// Application providers resolve their own families
#[test]
fn test_font_provider_hook() {
    struct Icons;

    impl FontProvider<NativeFont> for Icons {
        fn load_font(&self, descriptor: &FontDescriptor) -> Option<NativeFont> {
            Some(NativeFont {
                name: "icon-font".to_string(),
                size: descriptor.point_size().unwrap_or(24.0),
                scaled: false,
            })
        }
    }

    let kit = kit(KitConfig::default());
    kit.register_font_provider("icons", Arc::new(Icons));

    let icons = kit.font(&FontDescriptor::new("icons")).unwrap();
    assert_eq!(icons.name, "icon-font");
    assert!(kit.font(&FontDescriptor::new("unregistered")).is_none());
}

// =============================================================================
// Configuration
// =============================================================================

/// A context configured from a JSON file
#[test]
fn test_context_from_config_file() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let temp_dir = TempDir::new().unwrap();
    let font_dir = temp_dir.path().join("fonts");
    std::fs::create_dir(&font_dir).unwrap();
    std::fs::write(font_dir.join("Lato-Lato.ttf"), b"lato").unwrap();

    let config_path = temp_dir.path().join("umkit.json");
    let json = serde_json::json!({
        "fonts": { "platform": "watchos", "font_dir": font_dir },
        "color_cache": { "max_entries": 1 }
    });
    std::fs::write(&config_path, json.to_string()).unwrap();

    let config = KitConfig::from_file(&config_path).unwrap();
    let kit = kit(config);
    assert_eq!(kit.fonts().platform(), Platform::Watchos);

    let caption = kit.font(&FontDescriptor::new("Lato").style(TextStyle::Caption1)).unwrap();
    assert_eq!(caption.size, 15.0);

    kit.hex_color("#000000").unwrap();
    kit.hex_color("#FFFFFF").unwrap();
    assert_eq!(kit.colors().cache().len(), 1);
}
