//! Index paths and rows

use serde::{Deserialize, Serialize};

/// Position of a row within a sectioned list
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct IndexPath {
    /// Section index
    pub section: usize,
    /// Row index within the section
    pub row: usize,
}

impl IndexPath {
    /// The first row of the first section
    pub const ZERO: Self = Self { section: 0, row: 0 };

    /// Create an index path
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// A list element that knows its position and selection state
pub trait Indexed: Sized {
    /// The wrapped value
    type Value;

    /// The wrapped value, `None` for an empty element
    fn value(&self) -> Option<&Self::Value>;

    /// Position in the list
    fn index_path(&self) -> IndexPath;

    /// Whether the element is selected
    fn is_selected(&self) -> bool;

    /// Copy with a different selection state
    fn select(self, selected: bool) -> Self;

    /// An element carrying no value
    fn empty() -> Self;

    /// Whether the element carries no value
    fn is_empty(&self) -> bool {
        self.value().is_none()
    }
}

/// A value at an index path
///
/// Rows compare equal when their index paths are equal.
#[derive(Debug, Clone)]
pub struct Row<T> {
    value: Option<T>,
    selected: bool,
    index_path: IndexPath,
}

impl<T> Row<T> {
    /// Create an unselected row
    pub fn new(value: T, index_path: IndexPath) -> Self {
        Self { value: Some(value), selected: false, index_path }
    }

    /// Create a selected row
    pub fn selected(value: T, index_path: IndexPath) -> Self {
        Self { value: Some(value), selected: true, index_path }
    }

    /// Consume the row, returning its value
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T> Indexed for Row<T> {
    type Value = T;

    fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    fn index_path(&self) -> IndexPath {
        self.index_path
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn select(self, selected: bool) -> Self {
        Self { selected, ..self }
    }

    fn empty() -> Self {
        Self { value: None, selected: false, index_path: IndexPath::ZERO }
    }
}

impl<T> PartialEq for Row<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index_path == other.index_path
    }
}

impl<T> Eq for Row<T> {}

impl<T> Default for Row<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_path_ordering() {
        assert_eq!(IndexPath::default(), IndexPath::ZERO);
        assert!(IndexPath::new(0, 5) < IndexPath::new(1, 0));
        assert!(IndexPath::new(1, 0) < IndexPath::new(1, 1));
    }

    #[test]
    fn test_row_selection_is_a_copy() {
        let row = Row::new("alpha", IndexPath::new(0, 2));
        let selected = row.clone().select(true);

        assert!(!row.is_selected());
        assert!(selected.is_selected());
        assert_eq!(selected.value(), Some(&"alpha"));
        assert_eq!(selected.index_path(), IndexPath::new(0, 2));
        assert!(!selected.select(false).is_selected());
    }

    #[test]
    fn test_row_equality_by_index_path() {
        let a = Row::new("a", IndexPath::new(0, 1));
        let b = Row::selected("b", IndexPath::new(0, 1));
        let c = Row::new("a", IndexPath::new(0, 2));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_row() {
        let row: Row<u32> = Row::empty();
        assert!(row.is_empty());
        assert_eq!(row.index_path(), IndexPath::ZERO);
        assert!(Row::new(1, IndexPath::ZERO).into_value().is_some());
    }

    #[test]
    fn test_index_path_serde() {
        let json = serde_json::to_string(&IndexPath::new(2, 3)).unwrap();
        assert_eq!(json, r#"{"section":2,"row":3}"#);
    }
}
