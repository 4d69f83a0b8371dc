//! Tests for the mod list and manifest parsers
//!
//! These tests cover:
//! - Reading `modlist.txt` files from disk
//! - Manifest save/load round trips
//! - Unavailable-input reporting for unreadable or malformed files
//! - Parse idempotency

use std::fs;
use std::path::PathBuf;

use modlist_core::VersionMap;
use modlist_parsers::{save_manifest, ManifestParser, ModlistParser, Parser};
use tempfile::TempDir;

/// Helper to write a fixture file into a temp directory
fn write_fixture(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod modlist_file_tests {
    use super::*;

    #[test]
    fn test_parse_profile_modlist() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "modlist.txt",
            b"# This file was automatically generated by Mod Organizer.\n+Alpha\n-Beta\n*DLC: Dawnguard\n",
        );

        let mods = ModlistParser::new().parse_file(&path).unwrap();
        assert_eq!(mods.to_sorted_vec(), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_missing_file_is_unavailable_not_empty() {
        let dir = TempDir::new().unwrap();
        let err = ModlistParser::new()
            .parse_file(&dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_invalid_utf8_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "modlist.txt", &[b'+', 0xC3, 0x28, b'\n']);

        let err = ModlistParser::new().parse_file(&path).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_empty_file_is_empty_set() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "modlist.txt", b"");

        let mods = ModlistParser::new().parse_file(&path).unwrap();
        assert!(mods.is_empty());
    }
}

mod manifest_file_tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("versions.json");
        let snapshot = VersionMap::from_installed(vec![
            ("SkyUI", Some("5.2SE".to_string())),
            ("Unofficial Patch", Some("4.3.2".to_string())),
            ("Loose Files", None),
            ("ünïcode mod", Some("v1 → v2".to_string())),
        ]);

        save_manifest(&snapshot, &path).unwrap();
        let loaded = ManifestParser::new().parse_file(&path).unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_malformed_manifest_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "versions.json", b"{\"Alpha\": ");

        let err = ManifestParser::new().parse_file(&path).unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("versions.json"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/versions.json");

        let err = save_manifest(&VersionMap::new(), &path).unwrap_err();
        assert!(err.is_persistence());
    }
}

// Property-based tests using proptest
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_parse_is_idempotent(content in "([+\\-*# ]?[a-zA-Z0-9 ]{0,12}\n){0,20}") {
            let first = ModlistParser::parse_content(&content);
            let second = ModlistParser::parse_content(&content);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_every_marked_line_is_present(names in proptest::collection::vec("[a-zA-Z0-9]{1,10}", 0..20)) {
            let content: String = names
                .iter()
                .enumerate()
                .map(|(i, name)| format!("{}{}\n", if i % 2 == 0 { '+' } else { '-' }, name))
                .collect();

            let mods = ModlistParser::parse_content(&content);
            for name in &names {
                prop_assert!(mods.contains(name));
            }
        }

        #[test]
        fn test_manifest_text_round_trip(entries in proptest::collection::btree_map("[a-zA-Z ]{1,10}", "[0-9.]{1,6}", 0..10)) {
            let map: VersionMap = entries.into_iter().collect();
            let text = modlist_parsers::manifest_to_string(&map).unwrap();
            let loaded = ManifestParser::new().parse_str(&text).unwrap();
            prop_assert_eq!(loaded, map);
        }
    }
}
