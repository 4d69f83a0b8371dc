//! Set comparison between two mod lists.

use modlist_core::{ChangelogReport, EntrySet, Error, Result, UpdatedEntry, VersionMap};

/// Compare two mod lists.
///
/// `added` and `removed` are set differences. `updated` is only computed when
/// both version maps are given: every mod present on both sides whose version
/// string differs (absent versions read as `"Unknown"`). All three are in
/// display order.
pub fn compose(
    old: &EntrySet,
    new: &EntrySet,
    old_versions: Option<&VersionMap>,
    new_versions: Option<&VersionMap>,
) -> ChangelogReport {
    let added = new.difference(old);
    let removed = old.difference(new);

    let (updated, versions_compared) = match (old_versions, new_versions) {
        (Some(old_versions), Some(new_versions)) => {
            (updated_entries(old, new, old_versions, new_versions), true)
        }
        _ => (Vec::new(), false),
    };

    tracing::debug!(
        added = added.len(),
        removed = removed.len(),
        updated = updated.len(),
        versions_compared,
        "Composed changelog"
    );

    ChangelogReport {
        added,
        removed,
        updated,
        versions_compared,
    }
}

/// [`compose`] for callers whose base sets may have failed to load.
///
/// Both sets are required; a missing one is [`Error::Unavailable`].
pub fn compose_available(
    old: Option<&EntrySet>,
    new: Option<&EntrySet>,
    old_versions: Option<&VersionMap>,
    new_versions: Option<&VersionMap>,
) -> Result<ChangelogReport> {
    let old = old.ok_or_else(|| Error::unavailable("old mod list", "not loaded"))?;
    let new = new.ok_or_else(|| Error::unavailable("new mod list", "not loaded"))?;
    Ok(compose(old, new, old_versions, new_versions))
}

fn updated_entries(
    old: &EntrySet,
    new: &EntrySet,
    old_versions: &VersionMap,
    new_versions: &VersionMap,
) -> Vec<UpdatedEntry> {
    old.intersection(new)
        .into_iter()
        .filter_map(|name| {
            let old_version = old_versions.version_of(&name);
            let new_version = new_versions.version_of(&name);
            (old_version != new_version)
                .then(|| UpdatedEntry::new(name.as_str(), old_version, new_version))
        })
        .collect()
}
