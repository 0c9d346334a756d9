//! Serialization of a finished summary into its final representation.

use crate::modes::Mode;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const ELLIPSIS: &str = "...";

lazy_static! {
    static ref BLANK_LINES: Regex = Regex::new(r"\n\s*\n").expect("Invalid regex: blank lines");
    static ref FULLY_BOLD: Regex = Regex::new(r"^\*\*([^*]+)\*\*$").expect("Invalid regex: bold line");
    static ref LIST_LINE: Regex =
        Regex::new(r"^(?:[-*+•]|\d+[.)])\s").expect("Invalid regex: list line");
    static ref LINK: Regex = Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("Invalid regex: link");
    static ref HEADING_MARK: Regex = Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*").expect("Invalid regex: heading mark");
    static ref MARKUP_CHARS: Regex = Regex::new(r"[*_#`~]").expect("Invalid regex: markup chars");
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("failed to serialize summary: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Final representation of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown, passed through unchanged
    #[default]
    Markdown,
    /// Plain text with markup removed
    Text,
    /// JSON record with mode, summary and timestamp
    Json,
    /// Minimal standalone HTML document
    Html,
    /// Indented outline
    Outline,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
            OutputFormat::Outline => "outline",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the formatter did, reported alongside the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatMetadata {
    pub format: OutputFormat,
    pub mode: Mode,
    /// Set for formats that embed a generation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedOutput {
    pub content: String,
    pub metadata: FormatMetadata,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    mode: Mode,
    summary: &'a str,
    timestamp: String,
}

/// Render `content` in `format`.
pub fn format_output(
    content: &str,
    format: OutputFormat,
    mode: Mode,
) -> Result<FormattedOutput, FormatError> {
    let (content, generated_at) = match format {
        OutputFormat::Markdown => (content.to_string(), None),
        OutputFormat::Text => (to_plain_text(content), None),
        OutputFormat::Outline => (to_outline(content), None),
        OutputFormat::Json => {
            let now = Utc::now();
            let record = JsonSummary {
                mode,
                summary: content,
                timestamp: now.to_rfc3339(),
            };
            (serde_json::to_string_pretty(&record)?, Some(now))
        }
        OutputFormat::Html => {
            let now = Utc::now();
            (to_html(content, mode, now), Some(now))
        }
    };

    Ok(FormattedOutput {
        content,
        metadata: FormatMetadata {
            format,
            mode,
            generated_at,
        },
    })
}

fn to_plain_text(content: &str) -> String {
    let unlinked = LINK.replace_all(content, "$1");
    let unheaded = HEADING_MARK.replace_all(&unlinked, "");
    MARKUP_CHARS.replace_all(&unheaded, "").into_owned()
}

fn to_outline(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                String::new()
            } else if let Some(caps) = FULLY_BOLD.captures(trimmed) {
                caps[1].to_string()
            } else if LIST_LINE.is_match(trimmed) {
                format!("  {trimmed}")
            } else {
                format!("    {trimmed}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_html(content: &str, mode: Mode, generated_at: DateTime<Utc>) -> String {
    let escaped = escape_html(content);
    let body = BLANK_LINES
        .split(&escaped)
        .map(|paragraph| format!("<p>{}</p>", paragraph.lines().collect::<Vec<_>>().join("<br>\n")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{label} Summary</title>\n\
         </head>\n\
         <body>\n\
         <h1>{label} Summary</h1>\n\
         {body}\n\
         <footer>Generated on {date}</footer>\n\
         </body>\n\
         </html>\n",
        label = mode.label(),
        body = body,
        date = generated_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Cut `text` down to `limit` whitespace-separated words.
///
/// Text already within the limit is returned unchanged; otherwise the kept
/// words are re-joined with single spaces and an ellipsis is appended.
pub fn trim_to_word_limit(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return text.to_string();
    }
    format!("{}{}", words[..limit].join(" "), ELLIPSIS)
}
