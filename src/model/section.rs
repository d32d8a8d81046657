//! Section Model
//!
//! Sections are derived from an insertion-ordered map of section key to items.
//! Nothing here is cached between renders: every accessor reads the map as it
//! is right now.

use indexmap::IndexMap;
use serde::Deserialize;

/// Borrowed view of one section: its key and its ordered items
#[derive(Debug, PartialEq, Eq)]
pub struct Section<'a, T> {
    pub key: &'a str,
    pub data: &'a [T],
}

impl<T> Clone for Section<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Section<'_, T> {}

impl<T> Section<'_, T> {
    /// A section is active when it has at least one item
    pub fn is_active(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Section descriptor in `{ title, data }` form
///
/// The title doubles as the section key once normalized into a [`SectionMap`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TitledSection<T> {
    pub title: String,
    pub data: Vec<T>,
}

/// Normalized navigator view of a section: its key and whether it has items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub key: String,
    pub active: bool,
}

/// Section key -> items, ordered by key insertion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SectionMap<T> {
    entries: IndexMap<String, Vec<T>>,
}

impl<T> Default for SectionMap<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> SectionMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `{ title, data }` descriptors, keeping their order
    ///
    /// A repeated title replaces the earlier section's items but keeps its
    /// first position.
    pub fn from_titled(sections: impl IntoIterator<Item = TitledSection<T>>) -> Self {
        sections
            .into_iter()
            .map(|section| (section.title, section.data))
            .collect()
    }

    /// Insert or replace a section; new keys go to the end
    pub fn insert(&mut self, key: impl Into<String>, items: Vec<T>) {
        self.entries.insert(key.into(), items);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Position of a section key in insertion order
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Ordered section list, one entry per key in insertion order
    pub fn sections(&self) -> impl Iterator<Item = Section<'_, T>> {
        self.entries.iter().map(|(key, data)| Section {
            key: key.as_str(),
            data: data.as_slice(),
        })
    }

    pub fn section(&self, index: usize) -> Option<Section<'_, T>> {
        self.entries.get_index(index).map(|(key, data)| Section {
            key: key.as_str(),
            data: data.as_slice(),
        })
    }

    /// Item count per section, in section order
    pub fn section_lens(&self) -> Vec<usize> {
        self.entries.values().map(Vec::len).collect()
    }

    /// Normalized `(key, active)` list consumed by the navigator
    pub fn nav_sections(&self) -> Vec<NavSection> {
        self.sections()
            .map(|section| NavSection {
                key: section.key.to_string(),
                active: section.is_active(),
            })
            .collect()
    }
}

impl<T, K: Into<String>> FromIterator<(K, Vec<T>)> for SectionMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<T>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, items) in iter {
            map.insert(key, items);
        }
        map
    }
}
