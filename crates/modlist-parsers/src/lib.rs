//! modlist-parsers
//!
//! Parsers for the two input formats a changelog is built from.
//!
//! # Supported Formats
//!
//! | Format           | Extension | Description |
//! |------------------|-----------|-------------|
//! | Mod list         | `.txt`    | `+Name` / `-Name` lines, one mod per line |
//! | Version manifest | `.json`   | Object mapping mod name to version label |
//!
//! # Example
//!
//! ```rust,ignore
//! use modlist_parsers::{ModlistParser, Parser};
//!
//! let parser = ModlistParser::new();
//! let mods = parser.parse_file("profiles/Default/modlist.txt".as_ref())?;
//!
//! println!("Found {} mods", mods.len());
//! ```

pub mod logging;
pub mod manifest;
pub mod modlist;
pub mod traits;

// Re-export main types
pub use traits::{ParseError, ParseResult, Parser};

pub use manifest::{manifest_to_string, save_manifest, ManifestParser};
pub use modlist::ModlistParser;
