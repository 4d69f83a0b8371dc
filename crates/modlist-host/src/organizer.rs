//! Host application abstraction
//!
//! The organizer is everything the changelog tool needs from the mod manager
//! it runs inside: the active profile, file access, and the list of installed
//! mods with their versions.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::meta_ini;

/// Result type for organizer operations
pub type OrganizerResult<T> = Result<T, OrganizerError>;

/// Organizer operation errors
#[derive(Debug, thiserror::Error)]
pub enum OrganizerError {
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Not configured: {0}")]
    NotConfigured(String),
}

/// Name of the active mod list inside a profile directory
pub const MODLIST_FILE: &str = "modlist.txt";

/// Per-mod metadata file inside a mod's directory
pub const META_INI_FILE: &str = "meta.ini";

/// Capabilities the host application provides
pub trait Organizer: Send + Sync {
    /// Directory of the currently active profile
    fn profile_path(&self) -> &Path;

    /// Open a file for reading
    fn open_file(&self, path: &Path) -> OrganizerResult<Box<dyn Read + Send>>;

    /// Write `content` to `path`, replacing any existing file
    fn save_file(&self, path: &Path, content: &str) -> OrganizerResult<()>;

    /// Installed mods and their version, if the host knows one
    fn installed_mods(&self) -> OrganizerResult<BTreeMap<String, Option<String>>>;

    /// The active profile's mod list
    fn profile_modlist(&self) -> PathBuf {
        self.profile_path().join(MODLIST_FILE)
    }
}

/// Organizer backed by a Mod Organizer style directory layout
///
/// ```text
/// <profile>/modlist.txt
/// <mods>/<mod name>/meta.ini
/// ```
#[derive(Debug, Clone)]
pub struct FilesystemOrganizer {
    profile_path: PathBuf,
    mods_path: Option<PathBuf>,
}

impl FilesystemOrganizer {
    /// Create an organizer for a profile directory
    pub fn new(profile_path: impl Into<PathBuf>) -> Self {
        Self {
            profile_path: profile_path.into(),
            mods_path: None,
        }
    }

    /// Set the directory holding one sub-directory per installed mod
    pub fn with_mods_path(mut self, mods_path: impl Into<PathBuf>) -> Self {
        self.mods_path = Some(mods_path.into());
        self
    }
}

impl Organizer for FilesystemOrganizer {
    fn profile_path(&self) -> &Path {
        &self.profile_path
    }

    fn open_file(&self, path: &Path) -> OrganizerResult<Box<dyn Read + Send>> {
        if !path.exists() {
            return Err(OrganizerError::PathNotFound { path: path.to_path_buf() });
        }

        let file = std::fs::File::open(path)?;
        Ok(Box::new(file))
    }

    fn save_file(&self, path: &Path, content: &str) -> OrganizerResult<()> {
        if path.is_dir() {
            return Err(OrganizerError::InvalidPath(format!(
                "{} is a directory",
                path.display()
            )));
        }

        let mut file = std::fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn installed_mods(&self) -> OrganizerResult<BTreeMap<String, Option<String>>> {
        let mods_path = self
            .mods_path
            .as_deref()
            .ok_or_else(|| OrganizerError::NotConfigured("mods directory".to_string()))?;

        if !mods_path.is_dir() {
            return Err(OrganizerError::PathNotFound { path: mods_path.to_path_buf() });
        }

        let mut mods = BTreeMap::new();

        for entry in std::fs::read_dir(mods_path)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let meta_path = entry.path().join(META_INI_FILE);
            let version = match std::fs::read_to_string(&meta_path) {
                Ok(content) => meta_ini::read_version(&content),
                Err(e) => {
                    tracing::debug!(name = %name, error = %e, "No readable meta.ini");
                    None
                }
            };

            mods.insert(name, version);
        }

        tracing::info!(path = %mods_path.display(), mods = mods.len(), "Scanned installed mods");
        Ok(mods)
    }
}
