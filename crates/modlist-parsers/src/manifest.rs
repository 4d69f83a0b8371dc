//! Version manifest loading and saving.
//!
//! A manifest is a flat JSON object from mod name to version label:
//!
//! ```json
//! {
//!   "SkyUI": "5.2SE",
//!   "Unofficial Skyrim Special Edition Patch": "4.3.2"
//! }
//! ```
//!
//! Manifests are written with keys in sorted order, so a snapshot that is saved
//! and loaded again compares equal to the map that was saved.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use modlist_core::{Error, VersionMap};

use crate::traits::{ParseError, ParseResult, Parser};

/// Parser for version manifest files
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestParser;

impl ManifestParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ManifestParser {
    type Output = VersionMap;

    fn name(&self) -> &str {
        "version manifest"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse_str(&self, content: &str) -> ParseResult<VersionMap> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let object = value.as_object().ok_or_else(|| {
            ParseError::InvalidStructure(format!(
                "expected an object of mod names to versions, found {}",
                json_kind(&value)
            ))
        })?;

        object
            .iter()
            .map(|(name, version)| match version.as_str() {
                Some(version) => Ok((name.clone(), version.to_string())),
                None => Err(ParseError::InvalidStructure(format!(
                    "version of \"{name}\" is {}, expected a string",
                    json_kind(version)
                ))),
            })
            .collect()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Serialize a manifest to its on-disk JSON text
pub fn manifest_to_string(versions: &VersionMap) -> modlist_core::Result<String> {
    Ok(serde_json::to_string_pretty(versions)?)
}

/// Write a manifest to `path`.
///
/// Failures are reported as [`Error::PersistenceFailed`].
pub fn save_manifest(versions: &VersionMap, path: &Path) -> modlist_core::Result<()> {
    let text = manifest_to_string(versions)?;

    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    };

    write().map_err(|e| Error::persistence(path, e))?;
    tracing::info!(path = %path.display(), entries = versions.len(), "Saved version manifest");
    Ok(())
}
