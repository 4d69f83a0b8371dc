//! modlist-export
//!
//! Renders changelog reports to their output formats:
//! - Markdown (the changelog document)
//! - JSON (machine-readable report)

pub mod json;
pub mod markdown;

use std::fmt;
use std::str::FromStr;

use modlist_core::ChangelogReport;

pub use json::{JsonError, JsonExportOptions, JsonExporter};
pub use markdown::{render_markdown, MarkdownOptions, MarkdownRenderer, UpdatedSection};

/// Output format for a rendered report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }

    /// Render `report` in this format
    pub fn render(&self, report: &ChangelogReport, markdown: &MarkdownOptions) -> Result<String, JsonError> {
        match self {
            ReportFormat::Markdown => Ok(MarkdownRenderer::with_options(markdown.clone()).render(report)),
            ReportFormat::Json => JsonExporter::new().render(report),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Markdown => f.write_str("markdown"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("csv".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_render_dispatch() {
        let report = ChangelogReport::default();
        let options = MarkdownOptions::default();

        let markdown = ReportFormat::Markdown.render(&report, &options).unwrap();
        assert!(markdown.starts_with("# Modlist Changelog"));

        let json = ReportFormat::Json.render(&report, &options).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }
}
