//! Post-processing of generated summaries: focus filtering, quotes and statistics.

use crate::analysis::{split_paragraphs, split_sentences};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::warn;

/// Lines shorter than this always survive the focus filter.
const SHORT_LINE_CHARS: usize = 50;
/// Quote candidates must fall in this character range (end exclusive).
const QUOTE_LENGTH: (usize, usize) = (30, 150);
/// Quote words must be longer than this to count towards overlap.
const QUOTE_WORD_CHARS: usize = 4;
const QUOTE_MIN_OVERLAP: usize = 4;
const MAX_QUOTES: usize = 3;
const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    static ref TERMINAL_PUNCTUATION: Regex =
        Regex::new(r"[.!?]+").expect("Invalid regex: terminal punctuation");
}

/// Keep summary lines that mention `focus`, plus short structural lines.
///
/// If fewer than half of the lines survive, the filter is judged too
/// aggressive and the summary is returned untouched.
pub fn apply_focus_filter(summary: &str, focus: &str) -> String {
    let focus = focus.trim().to_lowercase();
    if focus.is_empty() {
        return summary.to_string();
    }

    let lines: Vec<&str> = summary.split('\n').collect();
    let kept: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| {
            line.to_lowercase().contains(&focus) || line.chars().count() < SHORT_LINE_CHARS
        })
        .collect();

    if kept.len() * 2 < lines.len() {
        warn!(
            focus = %focus,
            kept = kept.len(),
            total = lines.len(),
            "Focus filter too aggressive, keeping unfiltered summary"
        );
        return summary.to_string();
    }
    kept.join("\n")
}

/// Up to three sentences from `text` that share vocabulary with `summary`.
pub fn extract_relevant_quotes(text: &str, summary: &str) -> Vec<String> {
    let summary = summary.to_lowercase();
    split_sentences(text)
        .into_iter()
        .filter(|sentence| {
            let length = sentence.chars().count();
            length >= QUOTE_LENGTH.0 && length < QUOTE_LENGTH.1
        })
        .filter(|sentence| {
            let overlap = sentence
                .split_whitespace()
                .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
                .filter(|word| word.chars().count() > QUOTE_WORD_CHARS)
                .filter(|word| summary.contains(word.as_str()))
                .count();
            overlap >= QUOTE_MIN_OVERLAP
        })
        .take(MAX_QUOTES)
        .collect()
}

/// Render quotes as a block to append to a summary.
pub fn render_quotes(quotes: &[String]) -> String {
    let lines: Vec<String> = quotes
        .iter()
        .map(|quote| format!("> \"{}\"", quote.split_whitespace().collect::<Vec<_>>().join(" ")))
        .collect();
    format!("**Notable Quotes:**\n{}", lines.join("\n"))
}

/// Basic size and readability figures for a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub avg_words_per_sentence: usize,
    pub characters: usize,
    /// Minutes at 200 words per minute, rounded up
    pub reading_time: usize,
}

pub fn generate_stats(text: &str) -> Stats {
    let words = text.split_whitespace().count();
    let sentences = TERMINAL_PUNCTUATION.find_iter(text).count();
    let avg_words_per_sentence = if sentences == 0 {
        0
    } else {
        (words as f64 / sentences as f64).round() as usize
    };

    Stats {
        words,
        sentences,
        paragraphs: split_paragraphs(text).len(),
        avg_words_per_sentence,
        characters: text.chars().count(),
        reading_time: words.div_ceil(WORDS_PER_MINUTE),
    }
}

/// Render stats as a block to append to a summary.
pub fn render_stats(stats: &Stats) -> String {
    format!(
        "**Statistics:**\n\
         • Words: {}\n\
         • Sentences: {}\n\
         • Paragraphs: {}\n\
         • Average words per sentence: {}\n\
         • Characters: {}\n\
         • Reading time: {} min",
        stats.words,
        stats.sentences,
        stats.paragraphs,
        stats.avg_words_per_sentence,
        stats.characters,
        stats.reading_time
    )
}
