//! Summary request options and the result contract returned to callers.

use crate::format::{FormatMetadata, OutputFormat};
use crate::modes::Mode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name reported for the deterministic pattern-based engine.
pub const METHOD: &str = "pattern";

/// Options for a single summarization.
///
/// Field values are passed through as given; range checks happen in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeOptions {
    pub mode: Mode,
    pub format: OutputFormat,
    /// Free-form guidance; consulted by the `auto` and `creative` modes
    pub instructions: Option<String>,
    /// Word limit for the final output, 0 for unlimited
    pub max_length: usize,
    /// Pass-through label, not interpreted
    pub language: String,
    pub include_quotes: bool,
    pub include_stats: bool,
    pub focus: Option<String>,
    /// 1 (concrete) to 5 (abstract)
    pub abstraction_level: i32,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            format: OutputFormat::Markdown,
            instructions: None,
            max_length: 0,
            language: "en".to_string(),
            include_quotes: false,
            include_stats: false,
            focus: None,
            abstraction_level: 3,
        }
    }
}

/// File content already read by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    pub path: PathBuf,
    pub content: String,
}

/// Where the text to summarize comes from. Exactly one source must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryInput {
    pub text: Option<String>,
    pub file: Option<FileInput>,
}

impl SummaryInput {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file: None,
        }
    }

    pub fn from_file(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            text: None,
            file: Some(FileInput {
                path: path.into(),
                content: content.into(),
            }),
        }
    }
}

/// Details of a successful summarization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    /// Mode as requested
    pub mode: Mode,
    /// Mode actually run; differs from `mode` only for `auto`
    pub resolved_mode: Mode,
    pub format: OutputFormat,
    pub abstraction_level: u8,
    pub language: String,
    /// Characters in the source text
    pub original_length: usize,
    /// Characters in the final output
    pub summary_length: usize,
    /// Percentage reduction in word count
    pub compression_ratio: i64,
    /// `"text"` or the path of the source file
    pub source: String,
    pub method: String,
    pub metadata: FormatMetadata,
}

/// Outcome of a summarization. Failures are values, never panics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SummaryData>,
}

impl SummaryResult {
    pub fn success(output: String, data: SummaryData) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
            data: Some(data),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
            data: None,
        }
    }
}

/// Percentage of words removed, rounded. Zero when the source has no words.
pub fn compression_ratio(original_words: usize, summary_words: usize) -> i64 {
    if original_words == 0 {
        return 0;
    }
    ((1.0 - summary_words as f64 / original_words as f64) * 100.0).round() as i64
}
