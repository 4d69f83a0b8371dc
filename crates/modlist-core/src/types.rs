//! Common types used across modlist-changelog
//!
//! This module provides the data model shared by the parsers, the composer and
//! the exporters.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Version label used when a mod has no recorded version
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Display ordering for mod names.
///
/// Names compare by their lower-cased form first; names that only differ in
/// case fall back to plain string comparison so the order stays total.
pub fn display_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort names in display order
pub fn sort_for_display(names: &mut [String]) {
    names.sort_by(|a, b| display_cmp(a, b));
}

/// A set of distinct mod names
///
/// Storage is case-sensitive: `SkyUI` and `skyui` are different entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntrySet {
    names: BTreeSet<String>,
}

impl EntrySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name, returning `false` if it was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in storage (byte) order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names in `self` that are not in `other`, in display order
    pub fn difference(&self, other: &EntrySet) -> Vec<String> {
        let mut names: Vec<String> = self.names.difference(&other.names).cloned().collect();
        sort_for_display(&mut names);
        names
    }

    /// Names present in both sets, in display order
    pub fn intersection(&self, other: &EntrySet) -> Vec<String> {
        let mut names: Vec<String> = self.names.intersection(&other.names).cloned().collect();
        sort_for_display(&mut names);
        names
    }

    /// All names in display order
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        sort_for_display(&mut names);
        names
    }
}

impl<S: Into<String>> FromIterator<S> for EntrySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for EntrySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

/// Mapping from mod name to a version display string
///
/// Serializes as a flat JSON object, which is the manifest format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionMap {
    versions: BTreeMap<String, String>,
}

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from the host's installed-mod listing.
    ///
    /// Mods without a version are recorded as [`UNKNOWN_VERSION`].
    pub fn from_installed<I, K>(installed: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        installed
            .into_iter()
            .map(|(name, version)| {
                (name.into(), version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()))
            })
            .collect()
    }

    /// Record a version, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) -> Option<String> {
        self.versions.insert(name.into(), version.into())
    }

    /// Recorded version, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    /// Recorded version, or [`UNKNOWN_VERSION`] when the name is absent
    pub fn version_of(&self, name: &str) -> &str {
        self.get(name).unwrap_or(UNKNOWN_VERSION)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The set of names this map has versions for
    pub fn names(&self) -> EntrySet {
        self.versions.keys().cloned().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VersionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            versions: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A mod present on both sides whose recorded version changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedEntry {
    pub name: String,
    pub old_version: String,
    pub new_version: String,
}

impl UpdatedEntry {
    pub fn new(
        name: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
        }
    }
}

/// Result of comparing two mod lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogReport {
    /// Mods only in the new list
    pub added: Vec<String>,
    /// Mods only in the old list
    pub removed: Vec<String>,
    /// Mods in both lists with differing versions
    pub updated: Vec<UpdatedEntry>,
    /// Whether both version maps were available for the comparison
    pub versions_compared: bool,
}

impl ChangelogReport {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    /// True when nothing was added, removed or updated
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}
