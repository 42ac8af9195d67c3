//! Sections and section rows

use std::sync::Arc;

use crate::row::{IndexPath, Indexed, Row};

/// A section value with its items and section index
#[derive(Debug, Clone, PartialEq)]
pub struct Section<S, T> {
    /// The section value
    pub section: S,
    /// Items in display order
    pub items: Vec<T>,
    /// Section index
    pub index: usize,
}

impl<S, T: Clone> Section<S, T> {
    /// Create a section
    pub fn new(section: S, items: Vec<T>, index: usize) -> Self {
        Self { section, items, index }
    }

    /// Split into rows, each at `(index, position)`
    pub fn into_rows(self) -> Vec<SectionRow<S, T>> {
        let section = Arc::new(self);
        section
            .items
            .iter()
            .enumerate()
            .map(|(row, item)| SectionRow {
                section: Some(Arc::clone(&section)),
                row: Row::new(item.clone(), IndexPath::new(section.index, row)),
            })
            .collect()
    }
}

/// A row paired with the section it belongs to
#[derive(Debug, Clone)]
pub struct SectionRow<S, T> {
    section: Option<Arc<Section<S, T>>>,
    row: Row<T>,
}

impl<S, T> SectionRow<S, T> {
    /// The owning section
    pub fn section(&self) -> Option<&Section<S, T>> {
        self.section.as_deref()
    }

    /// The row
    pub fn row(&self) -> &Row<T> {
        &self.row
    }
}

impl<S, T: PartialEq> SectionRow<S, T> {
    /// Whether this is the first row of its section
    pub fn is_first(&self) -> bool {
        let first = self.section().and_then(|s| s.items.first());
        match (first, self.row.value()) {
            (Some(first), Some(value)) => first == value,
            _ => self.index_path().row == 0,
        }
    }

    /// Whether this is the last row of its section
    pub fn is_last(&self) -> bool {
        let Some(section) = self.section() else {
            return false;
        };
        match (section.items.last(), self.row.value()) {
            (Some(last), Some(value)) => last == value,
            _ => section.items.len().checked_sub(1) == Some(self.index_path().row),
        }
    }
}

impl<S, T> Indexed for SectionRow<S, T> {
    type Value = Section<S, T>;

    fn value(&self) -> Option<&Section<S, T>> {
        self.section()
    }

    fn index_path(&self) -> IndexPath {
        self.row.index_path()
    }

    fn is_selected(&self) -> bool {
        self.row.is_selected()
    }

    fn select(self, selected: bool) -> Self {
        Self { section: self.section, row: self.row.select(selected) }
    }

    fn empty() -> Self {
        Self { section: None, row: Row::empty() }
    }
}

impl<S, T> PartialEq for SectionRow<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index_path() == other.index_path()
    }
}

/// A type that can present itself as a list section
pub trait SectionDataSource: Sized + Clone {
    /// Item type
    type Item: Clone;

    /// Items in display order
    fn items(&self) -> &[Self::Item];

    /// This source as a section at `index`
    fn as_section(&self, index: usize) -> Section<Self, Self::Item> {
        Section::new(self.clone(), self.items().to_vec(), index)
    }
}

/// Number the sources as consecutive sections
pub fn sections<D: SectionDataSource>(sources: &[D]) -> Vec<Section<D, D::Item>> {
    sources
        .iter()
        .enumerate()
        .map(|(index, source)| source.as_section(index))
        .collect()
}

/// Rows for every section, grouped per section
pub fn section_rows<D: SectionDataSource>(sources: &[D]) -> Vec<Vec<SectionRow<D, D::Item>>> {
    sections(sources).into_iter().map(Section::into_rows).collect()
}
