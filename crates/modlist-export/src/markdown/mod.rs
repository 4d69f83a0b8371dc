//! Markdown changelog rendering
//!
//! The layout is consumed by other tools that parse these reports, so the
//! headings, bullet format and empty-section messages are fixed:
//!
//! ```text
//! # Modlist Changelog
//!
//! ### Summary
//! - **Added:** 1 mods
//! - **Removed:** 1 mods
//! - **Updated:** 1 mods
//!
//! ## Added Mods
//!
//! - Gamma
//!
//! ## Removed Mods
//!
//! - Beta
//!
//! ## Updated Mods
//!
//! - Alpha: 1.0 → 2.0
//! ```
//!
//! Without the Updated section the document ends right after the removed
//! list.

use std::fmt;
use std::str::FromStr;

use modlist_core::{ChangelogReport, UpdatedEntry};
use serde::{Deserialize, Serialize};

const TITLE: &str = "# Modlist Changelog";
const NO_ADDED: &str = "No mods added.";
const NO_REMOVED: &str = "No mods removed.";
const NO_UPDATED: &str = "No mods updated.";

/// When to include the "Updated" summary line and section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatedSection {
    /// Only when version data was compared
    #[default]
    Auto,
    /// Always; shows "No mods updated." when there is nothing to list
    Always,
    /// Never (added/removed only)
    Never,
}

impl FromStr for UpdatedSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(UpdatedSection::Auto),
            "always" => Ok(UpdatedSection::Always),
            "never" => Ok(UpdatedSection::Never),
            _ => Err(format!("Unknown updated section mode: {}", s)),
        }
    }
}

impl fmt::Display for UpdatedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdatedSection::Auto => "auto",
            UpdatedSection::Always => "always",
            UpdatedSection::Never => "never",
        };
        f.write_str(name)
    }
}

/// Markdown rendering options
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    pub updated_section: UpdatedSection,
}

/// Renders a [`ChangelogReport`] as Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    /// Create a renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom options
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }

    fn shows_updated(&self, report: &ChangelogReport) -> bool {
        match self.options.updated_section {
            UpdatedSection::Auto => report.versions_compared,
            UpdatedSection::Always => true,
            UpdatedSection::Never => false,
        }
    }

    /// Render the full document
    pub fn render(&self, report: &ChangelogReport) -> String {
        let with_updated = self.shows_updated(report);
        let mut markdown = format!("{TITLE}\n\n");

        markdown.push_str("### Summary\n");
        markdown.push_str(&format!("- **Added:** {} mods\n", report.added_count()));
        markdown.push_str(&format!("- **Removed:** {} mods\n", report.removed_count()));
        if with_updated {
            markdown.push_str(&format!("- **Updated:** {} mods\n", report.updated_count()));
        }
        markdown.push('\n');

        markdown.push_str("## Added Mods\n\n");
        markdown.push_str(&bullet_block(report.added.iter().map(String::as_str), NO_ADDED));
        markdown.push('\n');

        markdown.push_str("## Removed Mods\n\n");
        markdown.push_str(&bullet_block(report.removed.iter().map(String::as_str), NO_REMOVED));

        if with_updated {
            markdown.push('\n');
            markdown.push_str("## Updated Mods\n\n");
            let lines: Vec<String> = report.updated.iter().map(updated_line).collect();
            markdown.push_str(&bullet_block(lines.iter().map(String::as_str), NO_UPDATED));
        }

        tracing::trace!(bytes = markdown.len(), with_updated, "Rendered markdown changelog");
        markdown
    }
}

/// `- item` lines followed by a newline, or the empty message
fn bullet_block<'a>(items: impl Iterator<Item = &'a str>, empty: &str) -> String {
    let lines: Vec<String> = items.map(|item| format!("- {item}")).collect();
    if lines.is_empty() {
        format!("{empty}\n")
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

fn updated_line(entry: &UpdatedEntry) -> String {
    format!("{}: {} → {}", entry.name, entry.old_version, entry.new_version)
}

/// Render with default options
pub fn render_markdown(report: &ChangelogReport) -> String {
    MarkdownRenderer::new().render(report)
}
