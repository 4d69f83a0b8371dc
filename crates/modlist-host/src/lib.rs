//! Host integration for the changelog tool
//!
//! Runs the comparison inside a mod manager: the active profile and installed
//! mods come from an [`Organizer`], and results are reported through a
//! [`Notifier`].
//!
//! # Example
//! ```no_run
//! use modlist_host::{create_plugin, ComparisonRequest, FilesystemOrganizer, ToolPlugin, TracingNotifier};
//! use std::sync::Arc;
//!
//! let mut tool = create_plugin();
//! tool.init(Arc::new(FilesystemOrganizer::new("/mo2/profiles/Default")));
//!
//! let request = ComparisonRequest {
//!     old_list: Some("/backups/modlist.txt".into()),
//!     new_list: tool.default_new_modlist(),
//!     output: "changelog.md".into(),
//!     ..Default::default()
//! };
//! let outcome = tool.display(&request, &TracingNotifier::new());
//! assert!(outcome.is_saved());
//! ```

pub mod meta_ini;
pub mod notify;
pub mod organizer;
pub mod plugin;
pub mod settings;

pub use notify::{MemoryNotifier, Notification, Notifier, Severity, TracingNotifier};
pub use organizer::{FilesystemOrganizer, Organizer, OrganizerError, OrganizerResult};
pub use plugin::{
    create_plugin, Changelog, ChangelogTool, ComparisonRequest, DisplayOutcome, NewVersions,
    PluginMetadata, ToolPlugin, VersionInfo,
};
pub use settings::{ToolSettings, DEFAULT_OUTPUT, SETTINGS_FILE};
