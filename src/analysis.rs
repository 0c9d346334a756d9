//! Content analysis: turns raw text into an immutable bundle of extracted facts.
//!
//! Every extractor is an independent single pass over the raw text (or over the
//! already-split sentences). Absence of a pattern yields an empty collection,
//! never an error.

use crate::lexicon;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Name of the implicit section holding lines before the first detected title.
pub const INTRODUCTION: &str = "Introduction";

lazy_static! {
    /// Text ending in terminal punctuation.
    pub static ref SENTENCE_PATTERN: Regex =
        Regex::new(r"[^.!?]+[.!?]+").expect("Invalid regex: sentence pattern");
    static ref PARAGRAPH_BREAK: Regex =
        Regex::new(r"\n\s*\n").expect("Invalid regex: paragraph break");
    static ref HEADING: Regex = Regex::new(r"^#{1,6}\s+(.+)$").expect("Invalid regex: heading");
    static ref COLON_TITLE: Regex =
        Regex::new(r"^[A-Z][^:]{0,80}:$").expect("Invalid regex: colon title");
    static ref KEYWORD: Regex = Regex::new(r"\b[a-z]{4,}\b").expect("Invalid regex: keyword");
    static ref ENTITY: Regex = Regex::new(r"\b[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*\b")
        .expect("Invalid regex: entity");
    static ref DATE: Regex = Regex::new(concat!(
        r"\b(?:\d{4}-\d{2}-\d{2}",
        r"|\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}",
        r"|(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s+\d{4})?",
        r"|\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4})\b"
    ))
    .expect("Invalid regex: date");
    static ref NUMBER: Regex =
        Regex::new(r"\b\d+(?:,\d{3})*(?:\.\d+)?%?").expect("Invalid regex: number");
    static ref CODE_BLOCK: Regex = Regex::new(r"(?s)```.*?```").expect("Invalid regex: code block");
    static ref LIST_ITEM: Regex =
        Regex::new(r"^\s*(?:[-*+•]|\d+[.)])\s+\S").expect("Invalid regex: list item");
    static ref ACTION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:should|must|needs? to|ha(?:ve|s) to|ought to|required to)\b")
            .expect("Invalid regex: obligation modals"),
        Regex::new(r"\b(?:TODO|FIXME|ACTION|TASK|NEXT STEP)\b").expect("Invalid regex: task markers"),
        Regex::new(r"(?i)\b(?:action items?|next steps?|deliverables?)\s*:")
            .expect("Invalid regex: task labels"),
        Regex::new(r"(?i)\b(?:responsible|assigned to|owner)\b").expect("Invalid regex: ownership"),
        Regex::new(
            r"(?m)^\s*(?:(?:[-*+•]|\d+[.)])\s+)?[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\s+to\s+(?:complete|finalize|finish|review|prepare|send|update|draft|deliver|write|fix|implement|schedule|follow up|create|test|deploy|investigate|share|set up|organize|contact|submit)\b"
        )
        .expect("Invalid regex: assignment phrasing"),
    ];
}

/// A titled run of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }
}

/// Facts extracted from a single input text.
///
/// Built once by [`analyze`] and only read afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentAnalysis {
    /// Sentences in document order
    pub sentences: Vec<String>,
    /// Non-blank blocks separated by blank lines
    pub paragraphs: Vec<String>,
    /// Sections in order of first appearance, starting with the implicit introduction
    pub sections: Vec<Section>,
    /// Lowercase word frequencies, stopwords excluded
    pub keywords: BTreeMap<String, usize>,
    /// Distinct capitalized phrases in order of first appearance
    pub entities: Vec<String>,
    pub dates: Vec<String>,
    pub numbers: Vec<String>,
    pub code_blocks: Vec<String>,
    /// Groups of consecutive list lines
    pub lists: Vec<Vec<String>>,
    pub questions: Vec<String>,
    pub actionable_items: Vec<String>,
}

impl ContentAnalysis {
    /// Keywords ranked by descending frequency, ties in alphabetical order.
    pub fn top_keywords(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .keywords
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Look up a section by its title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Analyze raw text into a [`ContentAnalysis`].
pub fn analyze(text: &str) -> ContentAnalysis {
    let sentences = split_sentences(text);
    let questions = sentences
        .iter()
        .filter(|s| s.ends_with('?'))
        .cloned()
        .collect();
    let actionable_items = sentences
        .iter()
        .filter(|s| is_actionable(s))
        .cloned()
        .collect();

    ContentAnalysis {
        paragraphs: split_paragraphs(text),
        sections: extract_sections(text),
        keywords: extract_keywords(text),
        entities: extract_entities(text),
        dates: find_all(&DATE, text),
        numbers: find_all(&NUMBER, text),
        code_blocks: find_all(&CODE_BLOCK, text),
        lists: extract_lists(text),
        questions,
        actionable_items,
        sentences,
    }
}

/// Split text into trimmed sentences, one per terminal-punctuation match.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Split text into non-blank paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns the title carried by `line`, if it is a heading or a capitalized colon line.
pub(crate) fn section_title(line: &str) -> Option<String> {
    if let Some(caps) = HEADING.captures(line) {
        return Some(caps[1].trim().to_string());
    }
    if COLON_TITLE.is_match(line) {
        return Some(line.trim_end_matches(':').trim().to_string());
    }
    None
}

fn extract_sections(text: &str) -> Vec<Section> {
    let (sections, _current) = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(
            (vec![Section::new(INTRODUCTION)], 0usize),
            |(mut sections, current), line| match section_title(line) {
                Some(title) => {
                    let index = match sections.iter().position(|s| s.title == title) {
                        Some(index) => {
                            sections[index].lines.clear();
                            index
                        }
                        None => {
                            sections.push(Section::new(title));
                            sections.len() - 1
                        }
                    };
                    (sections, index)
                }
                None => {
                    sections[current].lines.push(line.to_string());
                    (sections, current)
                }
            },
        );
    sections
}

fn extract_keywords(text: &str) -> BTreeMap<String, usize> {
    let lowered = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for word in KEYWORD.find_iter(&lowered).map(|m| m.as_str()) {
        if lexicon::is_stopword(word) {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}

fn extract_entities(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    ENTITY
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|entity| seen.insert(entity.clone()))
        .collect()
}

fn extract_lists(text: &str) -> Vec<Vec<String>> {
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in text.lines() {
        if LIST_ITEM.is_match(line) {
            current.push(line.trim().to_string());
        } else if !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

fn is_actionable(sentence: &str) -> bool {
    ACTION_PATTERNS.iter().any(|p| p.is_match(sentence))
}
