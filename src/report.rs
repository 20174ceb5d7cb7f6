use crate::convert::convert_declarations;
use crate::extractor::{find_inline_styles, StyleOccurrence};
use crate::parser::parse_style_object;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Write as _;

/// Conversion outcome for one inline-style occurrence
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    /// 1-based index within the file, in source order
    pub index: usize,

    /// Line number of the occurrence (1-indexed)
    pub line: usize,

    /// Column of the occurrence within its line (1-indexed)
    pub column: usize,

    /// Full text of the source line (for display)
    pub line_text: String,

    /// The original matched `style={{...}}` expression
    pub original: String,

    /// Space-joined utility-class expressions, when conversion succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,

    /// Error message, when the occurrence's style object was malformed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Suggestion {
    fn from_occurrence(index: usize, occurrence: StyleOccurrence) -> Self {
        // A malformed occurrence is reported in place; it never aborts the
        // remaining occurrences.
        let (classes, error) = match parse_style_object(&occurrence.body) {
            Ok(declarations) => (Some(convert_declarations(&declarations)), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            index,
            line: occurrence.line,
            column: occurrence.column,
            line_text: occurrence.line_text,
            original: occurrence.text,
            classes,
            error,
        }
    }
}

/// Run the full extract → parse → convert pipeline over one source text
pub fn convert_source(source: &str) -> Vec<Suggestion> {
    find_inline_styles(source)
        .enumerate()
        .map(|(i, occurrence)| Suggestion::from_occurrence(i + 1, occurrence))
        .collect()
}

/// Render the human-readable report for one file
pub fn render_report(path: &str, suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return "No inline styles found in this file!\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Found {} inline styles in {}:", suggestions.len(), path);

    for suggestion in suggestions {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. Line {}:", suggestion.index, suggestion.line);
        let _ = writeln!(out, "   {}", suggestion.line_text);
        let _ = writeln!(out, "   {}", suggestion.original);
        match (&suggestion.classes, &suggestion.error) {
            (Some(classes), _) => {
                let _ = writeln!(out, "   className=\"{}\"", classes);
            }
            (None, Some(message)) => {
                let _ = writeln!(out, "   Error converting to Tailwind: {}", message);
            }
            (None, None) => {}
        }
    }

    out
}

/// Metadata for the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Version of the report format
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of files processed
    pub files_processed: usize,

    /// Number of inline styles found across all files
    pub styles_found: usize,

    /// Converter version
    pub converter_version: String,
}

/// Machine-readable report over one or more files
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub metadata: ReportMetadata,

    /// File path → suggestions, in scan order
    pub files: IndexMap<String, Vec<Suggestion>>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            metadata: ReportMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                files_processed: 0,
                styles_found: 0,
                converter_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            files: IndexMap::new(),
        }
    }

    pub fn add_file(&mut self, path: String, suggestions: Vec<Suggestion>) {
        self.metadata.files_processed += 1;
        self.metadata.styles_found += suggestions.len();
        self.files.insert(path, suggestions);
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
