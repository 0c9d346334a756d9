//! Summarization pipeline.
//!
//! analyze -> generate -> focus filter -> quotes -> stats -> format -> word limit

use crate::analysis::analyze;
use crate::augment::{
    apply_focus_filter, extract_relevant_quotes, generate_stats, render_quotes, render_stats,
};
use crate::format::{format_output, trim_to_word_limit, FormatError};
use crate::modes::ModeContext;
use crate::summary::{
    compression_ratio, SummarizeOptions, SummaryData, SummaryInput, SummaryResult, METHOD,
};
use thiserror::Error;
use tracing::{debug, info, warn};

const MIN_ABSTRACTION_LEVEL: i32 = 1;
const MAX_ABSTRACTION_LEVEL: i32 = 5;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Either text or file must be provided")]
    MissingInput,
    #[error("Provide either text or file, not both")]
    ConflictingInput,
    #[error("abstraction_level must be between 1 and 5 (got {0})")]
    InvalidAbstractionLevel(i32),
    #[error("failed to format summary: {0}")]
    FormatError(#[from] FormatError),
}

/// Summarize `input`, reporting every failure inside the returned result.
pub fn summarize(input: &SummaryInput, options: &SummarizeOptions) -> SummaryResult {
    match try_summarize(input, options) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Summarization failed");
            SummaryResult::failure(e.to_string())
        }
    }
}

/// Summarize `input`, returning validation and formatting failures as errors.
pub fn try_summarize(
    input: &SummaryInput,
    options: &SummarizeOptions,
) -> Result<SummaryResult, SummarizeError> {
    let (text, source) = resolve_source(input)?;
    let abstraction_level = validate_abstraction_level(options.abstraction_level)?;

    let focus = non_blank(options.focus.as_deref());
    let instructions = non_blank(options.instructions.as_deref());

    let analysis = analyze(text);
    debug!(
        sentences = analysis.sentences.len(),
        sections = analysis.sections.len(),
        keywords = analysis.keywords.len(),
        actionable = analysis.actionable_items.len(),
        "Analyzed content"
    );

    let resolved_mode = options.mode.resolve(&analysis, instructions);
    debug!(requested = %options.mode, resolved = %resolved_mode, "Resolved mode");

    let ctx = ModeContext {
        abstraction_level,
        focus,
        instructions,
    };
    let mut summary = resolved_mode.generate(&analysis, &ctx);

    if let Some(focus) = focus {
        summary = apply_focus_filter(&summary, focus);
    }

    if options.include_quotes {
        let quotes = extract_relevant_quotes(text, &summary);
        debug!(quotes = quotes.len(), "Extracted quotes");
        if !quotes.is_empty() {
            append_block(&mut summary, &render_quotes(&quotes));
        }
    }

    if options.include_stats {
        append_block(&mut summary, &render_stats(&generate_stats(text)));
    }

    let formatted = format_output(&summary, options.format, resolved_mode)?;
    let output = if options.max_length > 0 {
        trim_to_word_limit(&formatted.content, options.max_length)
    } else {
        formatted.content
    };

    let original_words = text.split_whitespace().count();
    let summary_words = output.split_whitespace().count();
    let ratio = compression_ratio(original_words, summary_words);
    info!(
        mode = %resolved_mode,
        format = %options.format,
        compression_ratio = ratio,
        "Summary generated"
    );

    let data = SummaryData {
        mode: options.mode,
        resolved_mode,
        format: options.format,
        abstraction_level,
        language: options.language.clone(),
        original_length: text.chars().count(),
        summary_length: output.chars().count(),
        compression_ratio: ratio,
        source,
        method: METHOD.to_string(),
        metadata: formatted.metadata,
    };
    Ok(SummaryResult::success(output, data))
}

/// Pick the single text source, returning it with its label.
fn resolve_source(input: &SummaryInput) -> Result<(&str, String), SummarizeError> {
    match (&input.text, &input.file) {
        (Some(text), None) => Ok((text.as_str(), "text".to_string())),
        (None, Some(file)) => Ok((file.content.as_str(), file.path.display().to_string())),
        (None, None) => Err(SummarizeError::MissingInput),
        (Some(_), Some(_)) => Err(SummarizeError::ConflictingInput),
    }
}

fn validate_abstraction_level(level: i32) -> Result<u8, SummarizeError> {
    if !(MIN_ABSTRACTION_LEVEL..=MAX_ABSTRACTION_LEVEL).contains(&level) {
        return Err(SummarizeError::InvalidAbstractionLevel(level));
    }
    u8::try_from(level).map_err(|_| SummarizeError::InvalidAbstractionLevel(level))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn append_block(summary: &mut String, block: &str) {
    if !summary.is_empty() {
        summary.push_str("\n\n");
    }
    summary.push_str(block);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use crate::modes::Mode;

    fn options(mode: Mode) -> SummarizeOptions {
        SummarizeOptions {
            mode,
            ..SummarizeOptions::default()
        }
    }

    #[test]
    fn test_missing_input() {
        let result = summarize(&SummaryInput::default(), &SummarizeOptions::default());
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Either text or file must be provided"));
        assert!(result.data.is_none());
    }

    #[test]
    fn test_conflicting_input() {
        let mut input = SummaryInput::from_file("notes.md", "File text.");
        input.text = Some("Inline text.".to_string());
        let result = summarize(&input, &SummarizeOptions::default());
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Provide either text or file, not both"));
    }

    #[test]
    fn test_abstraction_level_range() {
        for level in [0, 6, -1] {
            let opts = SummarizeOptions {
                abstraction_level: level,
                ..SummarizeOptions::default()
            };
            let err = try_summarize(&SummaryInput::from_text("Hello there."), &opts).unwrap_err();
            assert!(matches!(err, SummarizeError::InvalidAbstractionLevel(l) if l == level));
        }
        for level in 1..=5 {
            let opts = SummarizeOptions {
                abstraction_level: level,
                ..SummarizeOptions::default()
            };
            assert!(summarize(&SummaryInput::from_text("Hello there."), &opts).success);
        }
    }

    #[test]
    fn test_file_source_is_reported() {
        let result = summarize(
            &SummaryInput::from_file("docs/notes.md", "Notes:\nShip it."),
            &options(Mode::Detailed),
        );
        let data = result.data.unwrap();
        assert_eq!(data.source, "docs/notes.md");
        assert_eq!(result.output.as_deref(), Some("**Notes**\nShip it."));
    }

    #[test]
    fn test_auto_reports_resolved_mode() {
        let result = summarize(&SummaryInput::from_text("Plain words here."), &options(Mode::Auto));
        let data = result.data.unwrap();
        assert_eq!(data.mode, Mode::Auto);
        assert_eq!(data.resolved_mode, Mode::Detailed);
        assert_eq!(data.method, METHOD);
        assert_eq!(data.metadata.mode, Mode::Detailed);
    }

    #[test]
    fn test_stats_block_is_appended() {
        let opts = SummarizeOptions {
            mode: Mode::Brief,
            include_stats: true,
            ..SummarizeOptions::default()
        };
        let output = summarize(&SummaryInput::from_text("One two three."), &opts)
            .output
            .unwrap();
        assert!(output.starts_with("One two three.\n\n**Statistics:**"));
    }

    #[test]
    fn test_stats_on_empty_summary_has_no_leading_blank_lines() {
        let opts = SummarizeOptions {
            mode: Mode::Detailed,
            include_stats: true,
            ..SummarizeOptions::default()
        };
        let output = summarize(&SummaryInput::from_text(""), &opts).output.unwrap();
        assert!(output.starts_with("**Statistics:**"));
    }

    #[test]
    fn test_word_limit_applies_after_formatting() {
        let opts = SummarizeOptions {
            mode: Mode::Brief,
            format: OutputFormat::Text,
            max_length: 2,
            ..SummarizeOptions::default()
        };
        let result = summarize(&SummaryInput::from_text("Alpha beta gamma."), &opts);
        assert_eq!(result.output.as_deref(), Some("Alpha beta..."));
        assert_eq!(result.data.unwrap().compression_ratio, 33);
    }

    #[test]
    fn test_blank_focus_is_ignored() {
        let opts = SummarizeOptions {
            mode: Mode::BulletPoints,
            focus: Some("   ".to_string()),
            ..SummarizeOptions::default()
        };
        let result = summarize(&SummaryInput::from_text("One. Two."), &opts);
        assert_eq!(result.output.as_deref(), Some("• One.\n• Two."));
    }
}
