//! Tool settings loaded from `modlist-changelog.toml`.
//!
//! The file is optional; every key has a default and command-line flags
//! override whatever the file says.
//!
//! ```toml
//! profile_path = "C:/Modding/MO2/profiles/Default"
//! mods_path = "C:/Modding/MO2/mods"
//! output = "changelog.md"
//! updated_section = "auto"
//! log_level = "warn,modlist=info"
//! ```

use std::path::{Path, PathBuf};

use modlist_core::{Error, Result};
use modlist_export::UpdatedSection;
use serde::Deserialize;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "modlist-changelog.toml";

/// Default changelog file name
pub const DEFAULT_OUTPUT: &str = "changelog.md";

/// Persistent tool settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSettings {
    /// Active profile directory (holds `modlist.txt`)
    pub profile_path: Option<PathBuf>,

    /// Directory with one sub-directory per installed mod
    pub mods_path: Option<PathBuf>,

    /// Where the changelog is written
    pub output: PathBuf,

    /// Whether the report has an "Updated" section
    pub updated_section: UpdatedSection,

    /// Tracing filter directive; `-v` flags win over this
    pub log_level: Option<String>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            profile_path: None,
            mods_path: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            updated_section: UpdatedSection::Auto,
            log_level: None,
        }
    }
}

impl ToolSettings {
    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::InvalidConfig {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let settings = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Load `path` if given, else `modlist-changelog.toml` in `dir` when it
    /// exists, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let candidate = dir.join(SETTINGS_FILE);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
