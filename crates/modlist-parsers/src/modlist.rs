//! Parser for the host's `modlist.txt` format.
//!
//! Each relevant line is a `+` (enabled) or `-` (disabled) marker followed by
//! the mod name:
//!
//! ```text
//! # This file was automatically generated by Mod Organizer.
//! +SkyUI
//! -Unofficial Skyrim Special Edition Patch
//! *DLC: Dawnguard
//! ```
//!
//! The marker only records enabled state, so both kinds count as present.
//! Every other line (headers, comments, blanks, `*` unmanaged entries) is
//! skipped.

use modlist_core::EntrySet;

use crate::traits::{ParseResult, Parser};

/// Prefixes that mark a mod line
const ENTRY_MARKERS: [char; 2] = ['+', '-'];

/// `\n`, `\r\n` and a lone `\r` all end a line
const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Parser for `modlist.txt` files
#[derive(Debug, Clone, Copy, Default)]
pub struct ModlistParser;

impl ModlistParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract the entry name from a single line, if it is a mod line
    pub fn parse_line(line: &str) -> Option<&str> {
        line.trim()
            .strip_prefix(&ENTRY_MARKERS[..])
            .map(str::trim)
    }

    /// Parse content into the set of names it mentions
    pub fn parse_content(content: &str) -> EntrySet {
        content
            .split(&LINE_BREAKS[..])
            .filter_map(Self::parse_line)
            .collect()
    }
}

impl Parser for ModlistParser {
    type Output = EntrySet;

    fn name(&self) -> &str {
        "modlist"
    }

    fn extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn parse_str(&self, content: &str) -> ParseResult<EntrySet> {
        let entries = Self::parse_content(content);
        tracing::trace!(entries = entries.len(), "Parsed modlist content");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_markers() {
        assert_eq!(ModlistParser::parse_line("+SkyUI"), Some("SkyUI"));
        assert_eq!(ModlistParser::parse_line("-SkyUI"), Some("SkyUI"));
        assert_eq!(ModlistParser::parse_line("  + Spaced Name  "), Some("Spaced Name"));
        assert_eq!(ModlistParser::parse_line("*DLC: Dawnguard"), None);
        assert_eq!(ModlistParser::parse_line("# header"), None);
        assert_eq!(ModlistParser::parse_line(""), None);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let mac = ModlistParser::parse_content("+Alpha\r-Beta\r");
        assert_eq!(mac.len(), 2);
        assert!(mac.contains("Alpha") && mac.contains("Beta"));

        let windows = ModlistParser::parse_content("+Alpha\r\n-Beta\r\n");
        assert_eq!(windows, mac);

        let mixed = ModlistParser::parse_content("# header\r+Alpha\n-Beta\r\n+Gamma");
        assert_eq!(mixed.to_sorted_vec(), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_bare_marker_is_empty_name() {
        assert_eq!(ModlistParser::parse_line("+"), Some(""));
    }

    #[test]
    fn test_only_first_marker_is_stripped() {
        assert_eq!(ModlistParser::parse_line("+-Weird Name"), Some("-Weird Name"));
    }

    #[test]
    fn test_enabled_and_disabled_collapse() {
        let entries = ModlistParser::parse_content("+Alpha\n-Alpha\n-Beta\n");
        assert_eq!(entries.len(), 2);
        assert!(entries.contains("Alpha"));
        assert!(entries.contains("Beta"));
    }

    #[test]
    fn test_header_and_blank_lines_ignored() {
        let content = "# This file was automatically generated by Mod Organizer.\n\n+Alpha\r\n*Unmanaged: Foo\n";
        let entries = ModlistParser::new().parse_str(content).unwrap();
        assert_eq!(entries.to_sorted_vec(), vec!["Alpha"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let entries = ModlistParser::parse_content("+SkyUI\n+skyui\n");
        assert_eq!(entries.len(), 2);
    }
}
