//! Identity-based deduplication

use std::collections::HashSet;
use std::hash::Hash;

/// A value with a stable identity
pub trait Identifiable {
    /// Identifier type
    type Id: Hash + Eq;

    /// The identifier
    fn id(&self) -> Self::Id;
}

/// Drop items whose id was already seen, keeping first occurrences in order
pub fn unique_by_id<T: Identifiable + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items.iter().filter(|item| seen.insert(item.id())).cloned().collect()
}
