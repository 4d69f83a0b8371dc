//! Choosing what to compare when the caller only has part of the inputs.
//!
//! A comparison needs an old and a new name set. When a list file is missing,
//! the names of the matching version map stand in for it, so two manifests
//! alone are enough to produce a changelog.

use modlist_core::{ChangelogReport, EntrySet, Error, Result, VersionMap};

use crate::diff::compose;

/// Where a resolved name set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// Parsed from a mod list file
    ModList,
    /// Keys of a version manifest or snapshot
    VersionKeys,
}

/// Everything the caller managed to load for one comparison.
///
/// Inputs that failed to load must not be represented here as `None`; the
/// loading error is returned to the user before resolution happens.
#[derive(Debug, Clone, Default)]
pub struct ComparisonInputs {
    pub old_names: Option<EntrySet>,
    pub new_names: Option<EntrySet>,
    pub old_versions: Option<VersionMap>,
    pub new_versions: Option<VersionMap>,
}

/// Inputs with both name sets settled
#[derive(Debug, Clone)]
pub struct ResolvedInputs {
    pub old_names: EntrySet,
    pub new_names: EntrySet,
    pub old_source: NameSource,
    pub new_source: NameSource,
    pub old_versions: Option<VersionMap>,
    pub new_versions: Option<VersionMap>,
}

impl ComparisonInputs {
    /// Fill in missing name sets from version maps.
    ///
    /// Fails with [`Error::InsufficientData`] when a side has neither a list
    /// nor a version map.
    pub fn resolve(self) -> Result<ResolvedInputs> {
        let (old_names, old_source) =
            pick_names(self.old_names, self.old_versions.as_ref()).ok_or_else(|| {
                Error::insufficient("no old mod list or version manifest was provided")
            })?;
        let (new_names, new_source) =
            pick_names(self.new_names, self.new_versions.as_ref()).ok_or_else(|| {
                Error::insufficient("no new mod list or version snapshot was provided")
            })?;

        tracing::debug!(
            old = old_names.len(),
            new = new_names.len(),
            ?old_source,
            ?new_source,
            "Resolved comparison inputs"
        );

        Ok(ResolvedInputs {
            old_names,
            new_names,
            old_source,
            new_source,
            old_versions: self.old_versions,
            new_versions: self.new_versions,
        })
    }
}

impl ResolvedInputs {
    /// Run the comparison
    pub fn compose(&self) -> ChangelogReport {
        compose(
            &self.old_names,
            &self.new_names,
            self.old_versions.as_ref(),
            self.new_versions.as_ref(),
        )
    }
}

fn pick_names(
    names: Option<EntrySet>,
    versions: Option<&VersionMap>,
) -> Option<(EntrySet, NameSource)> {
    match names {
        Some(names) => Some((names, NameSource::ModList)),
        None => versions.map(|v| (v.names(), NameSource::VersionKeys)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> EntrySet {
        names.iter().copied().collect()
    }

    fn versions(pairs: &[(&str, &str)]) -> VersionMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_lists_take_precedence() {
        let resolved = ComparisonInputs {
            old_names: Some(set(&["Alpha"])),
            new_names: Some(set(&["Beta"])),
            old_versions: Some(versions(&[("Other", "1")])),
            new_versions: Some(versions(&[("Other", "2")])),
        }
        .resolve()
        .unwrap();

        assert_eq!(resolved.old_names, set(&["Alpha"]));
        assert_eq!(resolved.new_names, set(&["Beta"]));
        assert_eq!(resolved.old_source, NameSource::ModList);
        assert_eq!(resolved.new_source, NameSource::ModList);
    }

    #[test]
    fn test_old_manifest_stands_in_for_old_list() {
        let resolved = ComparisonInputs {
            old_names: None,
            new_names: Some(set(&["Alpha", "Gamma"])),
            old_versions: Some(versions(&[("Alpha", "1.0"), ("Beta", "1.0")])),
            new_versions: Some(versions(&[("Alpha", "2.0")])),
        }
        .resolve()
        .unwrap();

        assert_eq!(resolved.old_source, NameSource::VersionKeys);
        let report = resolved.compose();
        assert_eq!(report.added, vec!["Gamma"]);
        assert_eq!(report.removed, vec!["Beta"]);
        assert_eq!(report.updated.len(), 1);
    }

    #[test]
    fn test_snapshot_stands_in_for_new_list() {
        let resolved = ComparisonInputs {
            old_names: Some(set(&["Alpha"])),
            new_names: None,
            old_versions: None,
            new_versions: Some(versions(&[("Alpha", "1"), ("Delta", "1")])),
        }
        .resolve()
        .unwrap();

        assert_eq!(resolved.new_source, NameSource::VersionKeys);
        assert_eq!(resolved.compose().added, vec!["Delta"]);
    }

    #[test]
    fn test_no_old_data_is_insufficient() {
        let err = ComparisonInputs {
            new_names: Some(set(&["Alpha"])),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();

        assert!(err.is_insufficient());
    }

    #[test]
    fn test_no_new_data_is_insufficient() {
        let err = ComparisonInputs {
            old_names: Some(set(&["Alpha"])),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();

        assert!(err.is_insufficient());
    }
}
