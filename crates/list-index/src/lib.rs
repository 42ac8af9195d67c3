//! List indexing helpers for UMKit
//!
//! Rows and sections paired with their index paths and selection state, for
//! feeding sectioned list views.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identity;
pub mod row;
pub mod section;

pub use identity::{unique_by_id, Identifiable};
pub use row::{IndexPath, Indexed, Row};
pub use section::{section_rows, sections, Section, SectionDataSource, SectionRow};
