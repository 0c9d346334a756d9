//! # Distill
//!
//! Deterministic, pattern-based text digests.
//!
//! ## Features
//!
//! - **Content Analysis**: Sentences, sections, keywords, dates, numbers, code, lists, questions and action items
//! - **Fifteen Modes**: From `brief` and `bullet_points` to `executive`, `timeline` and `pros_cons`
//! - **Five Formats**: Markdown, plain text, JSON, HTML and outline
//! - **Augmentation**: Focus filtering, supporting quotes and reading statistics

pub mod analysis;
pub mod augment;
pub mod config;
pub mod engine;
pub mod format;
pub mod lexicon;
pub mod modes;
pub mod scoring;
pub mod source;
pub mod summary;

pub use analysis::{analyze, ContentAnalysis};
pub use config::Config;
pub use engine::{summarize, try_summarize, SummarizeError};
pub use format::OutputFormat;
pub use modes::Mode;
pub use summary::{SummarizeOptions, SummaryData, SummaryInput, SummaryResult};
