use std::collections::HashMap;

/// Identifier-to-entity index over one collection of an API response.
///
/// Built once per response before any row is projected, so joining a
/// foreign key against a sibling collection costs O(1) per row instead
/// of a linear scan per field. Duplicate identifiers keep the first
/// entity in iteration order; upstream ids are trusted to be unique, but
/// a violation must not fail resolution.
pub struct Index<'a, T> {
    by_id: HashMap<&'a str, &'a T>,
}

impl<'a, T> Index<'a, T> {
    pub fn build<F>(items: &'a [T], key: F) -> Self
    where
        F: Fn(&'a T) -> Option<&'a str>,
    {
        let mut by_id = HashMap::with_capacity(items.len());
        for item in items {
            if let Some(id) = key(item) {
                by_id.entry(id).or_insert(item);
            }
        }
        Self { by_id }
    }

    /// A missing candidate id resolves to nothing, as does an unmatched one.
    pub fn get(&self, id: Option<&str>) -> Option<&'a T> {
        self.by_id.get(id?).copied()
    }
}
