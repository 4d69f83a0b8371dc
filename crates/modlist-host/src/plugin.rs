//! The changelog tool as a host plugin.
//!
//! A host drives the tool through three calls: [`ToolPlugin::init`] hands over
//! the organizer, [`ToolPlugin::metadata`] describes the tool for menus, and
//! [`ToolPlugin::display`] runs one comparison and reports the outcome through
//! the caller's [`Notifier`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use modlist_core::{ChangelogReport, EntrySet, Error, Result, ResultExt, VersionMap};
use modlist_diff::ComparisonInputs;
use modlist_export::{MarkdownOptions, ReportFormat, UpdatedSection};
use modlist_parsers::{save_manifest, ManifestParser, ModlistParser, Parser};

use crate::notify::Notifier;
use crate::organizer::{Organizer, OrganizerError};

/// Semantic version of the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Descriptive information a host shows for a plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginMetadata {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub version: VersionInfo,
    pub display_name: &'static str,
    pub tooltip: &'static str,
    /// Host-managed settings; this tool registers none
    pub settings: Vec<String>,
}

/// Where the "new" side's versions come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NewVersions {
    /// No version data for the new side
    #[default]
    None,
    /// A previously saved manifest
    Manifest(PathBuf),
    /// Snapshot the organizer's installed mods right now
    Live,
}

/// One user-initiated comparison
#[derive(Debug, Clone, Default)]
pub struct ComparisonRequest {
    pub old_list: Option<PathBuf>,
    pub new_list: Option<PathBuf>,
    pub old_versions: Option<PathBuf>,
    pub new_versions: NewVersions,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub updated_section: UpdatedSection,
}

/// A rendered changelog, kept so a failed save can be retried
#[derive(Debug, Clone)]
pub struct Changelog {
    pub report: ChangelogReport,
    pub format: ReportFormat,
    pub text: String,
}

/// How a [`ToolPlugin::display`] call ended
#[derive(Debug)]
pub enum DisplayOutcome {
    /// Report generated and written
    Saved { path: PathBuf, changelog: Changelog },
    /// Report generated but writing it failed; retry with [`ChangelogTool::save`]
    NotSaved { error: Error, changelog: Changelog },
    /// Nothing was generated
    Aborted(Error),
}

impl DisplayOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, DisplayOutcome::Saved { .. })
    }

    pub fn changelog(&self) -> Option<&Changelog> {
        match self {
            DisplayOutcome::Saved { changelog, .. } | DisplayOutcome::NotSaved { changelog, .. } => {
                Some(changelog)
            }
            DisplayOutcome::Aborted(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            DisplayOutcome::Saved { .. } => None,
            DisplayOutcome::NotSaved { error, .. } | DisplayOutcome::Aborted(error) => Some(error),
        }
    }
}

/// The capability set a host expects from a tool plugin
pub trait ToolPlugin {
    /// Receive the host context. Returns `false` if the plugin cannot run.
    fn init(&mut self, organizer: Arc<dyn Organizer>) -> bool;

    fn metadata(&self) -> PluginMetadata;

    /// Run one comparison and report the outcome to `notifier`
    fn display(&self, request: &ComparisonRequest, notifier: &dyn Notifier) -> DisplayOutcome;
}

/// Compares two mod lists and writes a changelog
#[derive(Default)]
pub struct ChangelogTool {
    organizer: Option<Arc<dyn Organizer>>,
}

/// Entry point hosts call to instantiate the plugin
pub fn create_plugin() -> ChangelogTool {
    ChangelogTool::new()
}

impl ChangelogTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn organizer(&self) -> Result<&dyn Organizer> {
        self.organizer.as_deref().ok_or_else(|| Error::InvalidConfig {
            message: "tool has not been initialized with an organizer".to_string(),
        })
    }

    /// The active profile's `modlist.txt`, when it exists
    pub fn default_new_modlist(&self) -> Option<PathBuf> {
        let path = self.organizer.as_deref()?.profile_modlist();
        path.is_file().then_some(path)
    }

    /// Snapshot installed mod versions.
    ///
    /// A missing or unset mods directory is a configuration problem; only a
    /// failed directory scan counts as unavailable input.
    pub fn capture_versions(&self) -> Result<VersionMap> {
        let installed = self.organizer()?.installed_mods().map_err(|e| match e {
            OrganizerError::Io(source) => Error::unavailable("installed mods", source),
            other => Error::InvalidConfig {
                message: other.to_string(),
            },
        })?;
        Ok(VersionMap::from_installed(installed))
    }

    /// Snapshot installed mod versions and save them as a manifest
    pub fn snapshot_versions(&self, path: &Path) -> Result<VersionMap> {
        let versions = self.capture_versions()?;
        save_manifest(&versions, path)
            .with_context(|| format!("saving snapshot of {} mods", versions.len()))?;
        Ok(versions)
    }

    fn load_with<P: Parser>(&self, parser: &P, path: &Path) -> Result<P::Output> {
        let reader = self
            .organizer()?
            .open_file(path)
            .map_err(|e| Error::unavailable(path.display().to_string(), e))?;

        parser.parse_reader(reader).map_err(|e| {
            tracing::error!(parser = parser.name(), path = %path.display(), error = %e, "Parse failed");
            Error::unavailable(path.display().to_string(), e)
        })
    }

    fn load_list(&self, path: Option<&Path>) -> Result<Option<EntrySet>> {
        path.map(|p| self.load_with(&ModlistParser::new(), p)).transpose()
    }

    fn load_manifest(&self, path: Option<&Path>) -> Result<Option<VersionMap>> {
        path.map(|p| self.load_with(&ManifestParser::new(), p)).transpose()
    }

    /// Load every input and build the report, without saving anything
    pub fn generate(&self, request: &ComparisonRequest) -> Result<Changelog> {
        if request.old_list.is_none() && request.old_versions.is_none() {
            return Err(Error::insufficient(
                "Please select an old modlist or version manifest.",
            ));
        }

        let inputs = ComparisonInputs {
            old_names: self
                .load_list(request.old_list.as_deref())
                .context("old mod list")?,
            new_names: self
                .load_list(request.new_list.as_deref())
                .context("new mod list")?,
            old_versions: self
                .load_manifest(request.old_versions.as_deref())
                .context("old version manifest")?,
            new_versions: match &request.new_versions {
                NewVersions::None => None,
                NewVersions::Manifest(path) => {
                    self.load_manifest(Some(path)).context("new version manifest")?
                }
                NewVersions::Live => {
                    Some(self.capture_versions().context("live version snapshot")?)
                }
            },
        };

        let report = inputs.resolve()?.compose();
        let markdown = MarkdownOptions {
            updated_section: request.updated_section,
        };
        let text = request
            .format
            .render(&report, &markdown)
            .map_err(|e| Error::InvalidConfig { message: e.to_string() })?;

        Ok(Changelog {
            report,
            format: request.format,
            text,
        })
    }

    /// Write a generated changelog through the organizer
    pub fn save(&self, changelog: &Changelog, path: &Path) -> Result<()> {
        self.organizer()?
            .save_file(path, &changelog.text)
            .map_err(|e| match e {
                OrganizerError::Io(source) => Error::persistence(path, source),
                other => Error::persistence(path, std::io::Error::other(other.to_string())),
            })
    }
}

impl ToolPlugin for ChangelogTool {
    fn init(&mut self, organizer: Arc<dyn Organizer>) -> bool {
        tracing::debug!(profile = %organizer.profile_path().display(), "Changelog tool initialized");
        self.organizer = Some(organizer);
        true
    }

    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: "ModlistComparer",
            author: "Bottle",
            description: "A tool to compare two modlist.txt files and generate a changelog in Markdown format.",
            version: VersionInfo { major: 1, minor: 0, patch: 0 },
            display_name: "Changelog Helper",
            tooltip: "Compare modlists and generate a changelog",
            settings: Vec::new(),
        }
    }

    fn display(&self, request: &ComparisonRequest, notifier: &dyn Notifier) -> DisplayOutcome {
        let changelog = match self.generate(request) {
            Ok(changelog) => changelog,
            Err(error) => {
                if error.is_insufficient() {
                    notifier.warning("Warning", &error.to_string());
                } else if error.is_unavailable() {
                    notifier.error("Error", &format!("Failed to parse files. {error}"));
                } else {
                    notifier.error("Error", &error.to_string());
                }
                return DisplayOutcome::Aborted(error);
            }
        };

        match self.save(&changelog, &request.output) {
            Ok(()) => {
                notifier.info("Success", &format!("Saved to {}", request.output.display()));
                DisplayOutcome::Saved {
                    path: request.output.clone(),
                    changelog,
                }
            }
            Err(error) => {
                notifier.error("Error", &error.to_string());
                DisplayOutcome::NotSaved { error, changelog }
            }
        }
    }
}
