//! Menu items
//!
//! A [`Menu`] is an immutable title/image pair with an optional availability
//! check. Each call to [`Menu::available_when`] returns a new menu whose check
//! requires both the previous check and the new one.

use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a menu item is currently offered
pub type AvailabilityCheck = Arc<dyn Fn() -> bool + Send + Sync>;

/// A menu item
///
/// Two menus are equal when their titles and images are equal; availability
/// checks are not compared.
#[derive(Clone, Default)]
pub struct Menu {
    title: Option<String>,
    image: Option<String>,
    availability: Option<AvailabilityCheck>,
}

impl Menu {
    /// A menu with a title only
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    /// A menu with an image only
    pub fn with_image(image: impl Into<String>) -> Self {
        Self { image: Some(image.into()), ..Self::default() }
    }

    /// A menu with both an image and a title
    pub fn new(image: impl Into<String>, title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), image: Some(image.into()), availability: None }
    }

    /// The title, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The image name, if any
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Whether the item is offered; always true without a check
    pub fn is_available(&self) -> bool {
        match &self.availability {
            Some(check) => check(),
            None => true,
        }
    }

    /// Add an availability check, combined with any existing one by AND
    pub fn available_when<F>(self, check: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        let availability: AvailabilityCheck = match self.availability {
            Some(previous) => Arc::new(move || previous() && check()),
            None => Arc::new(check),
        };
        Self { availability: Some(availability), ..self }
    }
}

impl PartialEq for Menu {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.image == other.image
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("title", &self.title)
            .field("image", &self.image)
            .field("has_availability_check", &self.availability.is_some())
            .finish()
    }
}
