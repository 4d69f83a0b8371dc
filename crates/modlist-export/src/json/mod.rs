//! JSON export for changelog reports
//!
//! Produces a machine-readable companion to the Markdown changelog.

use modlist_core::ChangelogReport;
use serde_json::json;
use thiserror::Error;

/// JSON export errors
#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type JsonResult<T> = Result<T, JsonError>;

/// JSON export options
#[derive(Debug, Clone)]
pub struct JsonExportOptions {
    /// Use pretty-print formatting
    pub pretty: bool,

    /// Include the summary block with counts
    pub include_summary: bool,
}

impl Default for JsonExportOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            include_summary: true,
        }
    }
}

/// Changelog report exporter
pub struct JsonExporter {
    options: JsonExportOptions,
}

impl JsonExporter {
    /// Create new exporter with default options
    pub fn new() -> Self {
        Self {
            options: JsonExportOptions::default(),
        }
    }

    /// Create exporter with custom options
    pub fn with_options(options: JsonExportOptions) -> Self {
        Self { options }
    }

    /// Build the JSON document for a report
    pub fn to_value(&self, report: &ChangelogReport) -> serde_json::Value {
        let mut output = json!({
            "added": report.added,
            "removed": report.removed,
            "updated": report.updated,
            "versions_compared": report.versions_compared,
        });

        if self.options.include_summary {
            output["summary"] = json!({
                "added": report.added_count(),
                "removed": report.removed_count(),
                "updated": report.updated_count(),
            });
        }

        output
    }

    /// Render a report to JSON text
    pub fn render(&self, report: &ChangelogReport) -> JsonResult<String> {
        let value = self.to_value(report);
        let text = if self.options.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modlist_core::UpdatedEntry;

    fn sample_report() -> ChangelogReport {
        ChangelogReport {
            added: vec!["Gamma".into()],
            removed: vec!["Beta".into()],
            updated: vec![UpdatedEntry::new("Alpha", "1.0", "2.0")],
            versions_compared: true,
        }
    }

    #[test]
    fn test_json_shape() {
        let value = JsonExporter::new().to_value(&sample_report());

        assert_eq!(value["summary"]["added"], 1);
        assert_eq!(value["summary"]["updated"], 1);
        assert_eq!(value["added"][0], "Gamma");
        assert_eq!(value["updated"][0]["name"], "Alpha");
        assert_eq!(value["updated"][0]["old_version"], "1.0");
        assert_eq!(value["updated"][0]["new_version"], "2.0");
        assert_eq!(value["versions_compared"], true);
    }

    #[test]
    fn test_without_summary() {
        let exporter = JsonExporter::with_options(JsonExportOptions {
            pretty: false,
            include_summary: false,
        });
        let text = exporter.render(&sample_report()).unwrap();

        assert!(!text.contains("summary"));
        assert!(!text.contains('\n'));
    }
}
