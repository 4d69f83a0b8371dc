//! Minimal reader for a mod's `meta.ini`.
//!
//! Only the `version` key of the `[General]` section is needed:
//!
//! ```ini
//! [General]
//! modid=12604
//! version=5.2.0
//! ```

const GENERAL_SECTION: &str = "general";
const VERSION_KEY: &str = "version";

/// The mod's version label, if present and non-empty
pub fn read_version(content: &str) -> Option<String> {
    let mut in_general = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(section) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            in_general = section.trim().eq_ignore_ascii_case(GENERAL_SECTION);
            continue;
        }

        if !in_general {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            if key.trim().eq_ignore_ascii_case(VERSION_KEY) {
                let value = value.trim().trim_matches('"');
                return (!value.is_empty()).then(|| value.to_string());
            }
        }
    }

    None
}
