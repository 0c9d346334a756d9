//! Summary modes and their generators.
//!
//! Each mode is a pure function of a [`ContentAnalysis`] plus a small
//! [`ModeContext`]; [`Mode::generate`] dispatches over the closed set of modes.

use crate::analysis::{section_title, ContentAnalysis};
use crate::lexicon::{
    self, COMPARISON_TERMS, IMPLEMENTATION_TERMS, NEGATIVE_TERMS, POSITIVE_TERMS,
    RECOMMENDATION_TERMS,
};
use crate::scoring::extract_key_points;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const NO_ACTION_ITEMS: &str = "No action items found in the content.";
const NO_TIMELINE: &str = "No temporal information found in the content.";
const NO_COMPARISONS: &str = "No clear comparisons found in the content.";
const NO_PROS_CONS: &str = "No clear pros or cons identified.";
const NO_INSIGHTS: &str = "No key insights identified.";
const NO_TECHNICAL: &str = "No technical content identified.";
const NO_QUESTIONS: &str = "No questions could be derived from the content.";
const NO_CONCLUSION: &str = "Further analysis is needed to draw definitive conclusions.";
const CONVERSATIONAL_FILLER: &str = "there's a bit more detail in there too.";

/// Character budget for the executive overview.
const OVERVIEW_CHARS: usize = 200;
/// Character budget for the academic thesis and conclusion.
const ACADEMIC_CHARS: usize = 150;

/// Summary style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Pick a mode from the shape of the content
    #[default]
    Auto,
    /// Top three key points in one paragraph
    Brief,
    /// First lines of each section
    Detailed,
    /// Up to ten key points as bullets
    #[value(name = "bullet_points")]
    BulletPoints,
    /// Themes and notable content traits
    #[value(name = "key_insights")]
    KeyInsights,
    /// Tasks, obligations and owners
    #[value(name = "action_items")]
    ActionItems,
    /// Code, technical vocabulary and implementation details
    Technical,
    /// Overview, metrics and recommendations
    Executive,
    /// Questions raised by the text
    Questions,
    /// Positive and negative points
    #[value(name = "pros_cons")]
    ProsCons,
    /// Dated events in document order
    Timeline,
    /// Key points told as a story
    Creative,
    /// Thesis, evidence and conclusion
    Academic,
    /// Key points in a casual voice
    Conversational,
    /// Comparisons plus pros and cons
    Comparison,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs a generator may consult besides the analysis.
#[derive(Debug, Clone, Copy)]
pub struct ModeContext<'a> {
    pub abstraction_level: u8,
    pub focus: Option<&'a str>,
    pub instructions: Option<&'a str>,
}

impl Default for ModeContext<'_> {
    fn default() -> Self {
        Self {
            abstraction_level: 3,
            focus: None,
            instructions: None,
        }
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Brief => "brief",
            Mode::Detailed => "detailed",
            Mode::BulletPoints => "bullet_points",
            Mode::KeyInsights => "key_insights",
            Mode::ActionItems => "action_items",
            Mode::Technical => "technical",
            Mode::Executive => "executive",
            Mode::Questions => "questions",
            Mode::ProsCons => "pros_cons",
            Mode::Timeline => "timeline",
            Mode::Creative => "creative",
            Mode::Academic => "academic",
            Mode::Conversational => "conversational",
            Mode::Comparison => "comparison",
        }
    }

    /// Human-readable name, used in document titles.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Auto => "Automatic",
            Mode::Brief => "Brief",
            Mode::Detailed => "Detailed",
            Mode::BulletPoints => "Bullet Points",
            Mode::KeyInsights => "Key Insights",
            Mode::ActionItems => "Action Items",
            Mode::Technical => "Technical",
            Mode::Executive => "Executive",
            Mode::Questions => "Questions",
            Mode::ProsCons => "Pros and Cons",
            Mode::Timeline => "Timeline",
            Mode::Creative => "Creative",
            Mode::Academic => "Academic",
            Mode::Conversational => "Conversational",
            Mode::Comparison => "Comparison",
        }
    }

    /// The concrete mode that will run. Only `Auto` resolves to something else.
    pub fn resolve(self, analysis: &ContentAnalysis, instructions: Option<&str>) -> Mode {
        match self {
            Mode::Auto => auto_mode(analysis, instructions),
            other => other,
        }
    }

    /// Render `analysis` in this mode.
    pub fn generate(self, analysis: &ContentAnalysis, ctx: &ModeContext<'_>) -> String {
        match self {
            Mode::Auto => {
                let resolved = auto_mode(analysis, ctx.instructions);
                resolved.generate(analysis, ctx)
            }
            Mode::Brief => brief(analysis),
            Mode::Detailed => detailed(analysis),
            Mode::BulletPoints => bullet_points(analysis, ctx.focus),
            Mode::KeyInsights => key_insights(analysis),
            Mode::ActionItems => action_items(analysis),
            Mode::Technical => technical(analysis),
            Mode::Executive => executive(analysis),
            Mode::Questions => questions(analysis),
            Mode::ProsCons => pros_cons(analysis),
            Mode::Timeline => timeline(analysis),
            Mode::Creative => creative(analysis, ctx.abstraction_level, ctx.instructions),
            Mode::Academic => academic(analysis),
            Mode::Conversational => conversational(analysis),
            Mode::Comparison => comparison(analysis),
        }
    }
}

/// Choose a concrete mode. Explicit hints in the instructions win over content shape.
fn auto_mode(analysis: &ContentAnalysis, instructions: Option<&str>) -> Mode {
    if let Some(instructions) = instructions {
        let lowered = instructions.to_lowercase();
        if lowered.contains("action") {
            return Mode::ActionItems;
        }
        if lowered.contains("section") {
            return Mode::Detailed;
        }
        if lowered.contains("brief") || lowered.contains("short") {
            return Mode::Brief;
        }
    }

    if analysis.actionable_items.len() > 5 {
        Mode::ActionItems
    } else if analysis.code_blocks.len() > 2 {
        Mode::Technical
    } else if analysis.numbers.len() > 10 {
        Mode::Executive
    } else {
        Mode::Detailed
    }
}

fn brief(analysis: &ContentAnalysis) -> String {
    extract_key_points(analysis, 3, None).join(" ")
}

fn detailed(analysis: &ContentAnalysis) -> String {
    analysis
        .sections
        .iter()
        .filter(|section| !section.lines.is_empty())
        .take(5)
        .map(|section| {
            let body: Vec<&str> = section.lines.iter().take(3).map(String::as_str).collect();
            format!("**{}**\n{}", section.title, body.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bullet_points(analysis: &ContentAnalysis, focus: Option<&str>) -> String {
    bullets(&extract_key_points(analysis, 10, focus))
}

fn key_insights(analysis: &ContentAnalysis) -> String {
    let mut insights = Vec::new();

    let themes: Vec<&str> = analysis
        .top_keywords(5)
        .into_iter()
        .map(|(word, _)| word)
        .collect();
    if !themes.is_empty() {
        insights.push(format!("Main themes: {}", themes.join(", ")));
    }
    if analysis.numbers.len() > 5 {
        insights.push(format!(
            "Contains {} numerical data points worth reviewing",
            analysis.numbers.len()
        ));
    }
    if analysis.questions.len() > 3 {
        insights.push(format!(
            "Raises {} questions that may need answers",
            analysis.questions.len()
        ));
    }
    if !analysis.code_blocks.is_empty() {
        insights.push(format!(
            "Includes {} code example(s)",
            analysis.code_blocks.len()
        ));
    }

    if insights.is_empty() {
        return NO_INSIGHTS.to_string();
    }
    numbered(&insights)
}

fn action_items(analysis: &ContentAnalysis) -> String {
    let items: Vec<String> = analysis
        .actionable_items
        .iter()
        .take(10)
        .map(|item| clean_item(item))
        .collect();
    if items.is_empty() {
        return NO_ACTION_ITEMS.to_string();
    }
    numbered(&items)
}

fn technical(analysis: &ContentAnalysis) -> String {
    let mut blocks = Vec::new();

    if !analysis.code_blocks.is_empty() {
        blocks.push(format!(
            "**Code Blocks:** {} code example(s) found",
            analysis.code_blocks.len()
        ));
    }

    let terms: Vec<&str> = analysis
        .top_keywords(analysis.keywords.len())
        .into_iter()
        .map(|(word, _)| word)
        .filter(|word| lexicon::is_technical_term(word))
        .take(5)
        .collect();
    if !terms.is_empty() {
        blocks.push(format!("**Technical Terms:** {}", terms.join(", ")));
    }

    let details: Vec<String> = matching_sentences(analysis, &IMPLEMENTATION_TERMS, 3);
    if !details.is_empty() {
        blocks.push(format!("**Implementation Details:**\n{}", bullets(&details)));
    }

    if blocks.is_empty() {
        return NO_TECHNICAL.to_string();
    }
    blocks.join("\n\n")
}

fn executive(analysis: &ContentAnalysis) -> String {
    let mut blocks = Vec::new();

    if let Some(first) = analysis.paragraphs.first() {
        blocks.push(format!(
            "**Overview:** {}",
            truncate_chars(&one_line(first), OVERVIEW_CHARS)
        ));
    }

    let metrics: Vec<&str> = analysis
        .numbers
        .iter()
        .take(5)
        .map(String::as_str)
        .collect();
    if !metrics.is_empty() {
        blocks.push(format!("**Key Metrics:** {}", metrics.join(", ")));
    }

    let recommendations = matching_sentences(analysis, &RECOMMENDATION_TERMS, 3);
    if !recommendations.is_empty() {
        blocks.push(format!(
            "**Recommendations:**\n{}",
            bullets(&recommendations)
        ));
    }

    blocks.join("\n\n")
}

fn questions(analysis: &ContentAnalysis) -> String {
    if !analysis.questions.is_empty() {
        let asked: Vec<String> = analysis
            .questions
            .iter()
            .take(5)
            .map(|q| one_line(q))
            .collect();
        return numbered(&asked);
    }

    let mut derived = Vec::new();
    if !analysis.numbers.is_empty() {
        derived.push("What do the figures mentioned in the text indicate?".to_string());
    }
    if !analysis.dates.is_empty() {
        derived.push("What is the significance of the dates and deadlines mentioned?".to_string());
    }
    if !analysis.actionable_items.is_empty() {
        derived.push("Who is responsible for the actions described, and by when?".to_string());
    }
    if let Some((keyword, _)) = analysis.top_keywords(1).first() {
        derived.push(format!("How does \"{keyword}\" shape the overall message?"));
    }
    derived.truncate(4);

    if derived.is_empty() {
        return NO_QUESTIONS.to_string();
    }
    numbered(&derived)
}

/// Pros and cons as bold-labelled bullet lists; empty when nothing matches.
///
/// A sentence lands in at most one list, positive indicators checked first.
fn pros_cons_block(analysis: &ContentAnalysis) -> String {
    let mut pros = Vec::new();
    let mut cons = Vec::new();
    for sentence in &analysis.sentences {
        if POSITIVE_TERMS.is_match(sentence) {
            if pros.len() < 5 {
                pros.push(one_line(sentence));
            }
        } else if NEGATIVE_TERMS.is_match(sentence) && cons.len() < 5 {
            cons.push(one_line(sentence));
        }
    }

    let mut blocks = Vec::new();
    if !pros.is_empty() {
        blocks.push(format!("**Pros:**\n{}", bullets(&pros)));
    }
    if !cons.is_empty() {
        blocks.push(format!("**Cons:**\n{}", bullets(&cons)));
    }
    blocks.join("\n\n")
}

fn pros_cons(analysis: &ContentAnalysis) -> String {
    let block = pros_cons_block(analysis);
    if block.is_empty() {
        return NO_PROS_CONS.to_string();
    }
    block
}

fn timeline(analysis: &ContentAnalysis) -> String {
    let mut seen = HashSet::new();
    let events: Vec<String> = analysis
        .dates
        .iter()
        .filter(|date| seen.insert(date.as_str()))
        .filter_map(|date| {
            analysis
                .sentences
                .iter()
                .find(|sentence| sentence.contains(date.as_str()))
                .map(|sentence| format!("**{}:** {}", date, one_line(sentence)))
        })
        .collect();

    if events.is_empty() {
        return NO_TIMELINE.to_string();
    }
    events.join("\n")
}

fn creative(analysis: &ContentAnalysis, abstraction_level: u8, instructions: Option<&str>) -> String {
    let points = extract_key_points(analysis, 5, None);
    if points.is_empty() {
        return String::new();
    }

    let opening = match abstraction_level {
        1 | 2 => "Told plainly, the story goes like this:",
        4 | 5 => "Seen from a distance, this content tells a larger story:",
        _ => "Imagine this content as a story unfolding:",
    };
    let body = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let point = one_line(point);
            if i == 0 {
                point
            } else {
                format!("And then, {}", lower_first(&point))
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut story = format!("{opening} {body} And that is where the story rests, for now.");
    if let Some(instructions) = instructions.map(str::trim).filter(|i| !i.is_empty()) {
        story.push_str(&format!("\n\n(Told with this in mind: {instructions})"));
    }
    story
}

fn academic(analysis: &ContentAnalysis) -> String {
    let mut blocks = Vec::new();

    if let Some(first) = analysis.paragraphs.first() {
        blocks.push(format!(
            "**Thesis:** {}",
            truncate_chars(&one_line(first), ACADEMIC_CHARS)
        ));
    }

    let evidence = extract_key_points(analysis, 3, None);
    if !evidence.is_empty() {
        blocks.push(format!("**Evidence:**\n{}", bullets(&evidence)));
    }

    let conclusion = analysis
        .paragraphs
        .last()
        .map(|last| truncate_chars(&one_line(last), ACADEMIC_CHARS))
        .unwrap_or_else(|| NO_CONCLUSION.to_string());
    blocks.push(format!("**Conclusion:** {conclusion}"));

    blocks.join("\n\n")
}

fn conversational(analysis: &ContentAnalysis) -> String {
    let points: Vec<String> = extract_key_points(analysis, 5, None)
        .iter()
        .map(|p| one_line(p))
        .collect();
    let Some(first) = points.first() else {
        return format!("So, there's not much to go on here. Honestly, {CONVERSATIONAL_FILLER}");
    };

    let mut reply = format!("So, here's the deal: {first}");
    if let Some(second) = points.get(1) {
        reply.push_str(&format!(" The big thing to know is that {}", lower_first(second)));
    }
    let third = points
        .get(2)
        .map(|p| lower_first(p))
        .unwrap_or_else(|| CONVERSATIONAL_FILLER.to_string());
    reply.push_str(&format!(" Oh, and {third}"));
    if points.len() > 3 {
        reply.push_str(&format!(" Also worth a mention: {}", points[3..].join(" ")));
    }
    reply
}

fn comparison(analysis: &ContentAnalysis) -> String {
    let mut blocks = Vec::new();

    let comparisons = matching_sentences(analysis, &COMPARISON_TERMS, 3);
    if !comparisons.is_empty() {
        blocks.push(format!("**Direct Comparisons:**\n{}", bullets(&comparisons)));
    }

    let pros_cons = pros_cons_block(analysis);
    if !pros_cons.is_empty() {
        blocks.push(pros_cons);
    }

    if blocks.is_empty() {
        return NO_COMPARISONS.to_string();
    }
    blocks.join("\n\n")
}

fn matching_sentences(analysis: &ContentAnalysis, pattern: &regex::Regex, limit: usize) -> Vec<String> {
    analysis
        .sentences
        .iter()
        .filter(|sentence| pattern.is_match(sentence))
        .take(limit)
        .map(|sentence| one_line(sentence))
        .collect()
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse internal whitespace so a sentence renders on one line.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep the first `max` characters, marking the cut with an ellipsis.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max).collect();
    format!("{}...", kept.trim_end())
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match (chars.next(), chars.clone().next()) {
        // leave acronyms and single capitals such as "I" alone
        (Some(first), Some(second)) if second.is_lowercase() => {
            first.to_lowercase().chain(chars).collect()
        }
        _ => text.to_string(),
    }
}

/// Reduce an actionable sentence to the task itself: drop leading title lines,
/// list markers and the closing period.
fn clean_item(sentence: &str) -> String {
    let lines: Vec<&str> = sentence.lines().map(str::trim).collect();
    let start = lines
        .iter()
        .position(|line| !line.is_empty() && section_title(line).is_none())
        .unwrap_or(0);
    let task = one_line(&lines[start..].join(" "));
    let task = task
        .trim_start_matches(|c: char| matches!(c, '-' | '*' | '+' | '•'))
        .trim_start();
    let task = strip_number_marker(task);
    task.trim_end_matches(['.', '!']).trim().to_string()
}

fn strip_number_marker(text: &str) -> &str {
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &text[digits..];
        if let Some(stripped) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return stripped.trim_start();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn run(mode: Mode, text: &str) -> String {
        mode.generate(&analyze(text), &ModeContext::default())
    }

    #[test]
    fn test_brief_joins_three_key_points() {
        // no keywords, so every leading sentence ties and document order decides
        let out = run(Mode::Brief, "Ant. Bee. Cat. Dog.");
        assert_eq!(out, "Ant. Bee. Cat.");
    }

    #[test]
    fn test_detailed_renders_sections() {
        let text = "# Goals\nShip it.\nTest it.\nDocument it.\nCelebrate.\n\nRisks:\nTime.";
        let out = run(Mode::Detailed, text);
        assert_eq!(
            out,
            "**Goals**\nShip it. Test it. Document it.\n\n**Risks**\nTime."
        );
    }

    #[test]
    fn test_detailed_caps_sections_at_five() {
        let text: String = (1..=6).map(|i| format!("# Part {i}\nBody {i}.\n")).collect();
        let out = run(Mode::Detailed, &text);
        assert_eq!(out.matches("**Part ").count(), 5);
        assert!(out.contains("**Part 5**"));
        assert!(!out.contains("Part 6"));
    }

    #[test]
    fn test_detailed_empty_input_is_empty() {
        assert_eq!(run(Mode::Detailed, ""), "");
    }

    #[test]
    fn test_bullet_points_use_focus() {
        let analysis = analyze("Budget is tight. Security needs review. Hiring is slow.");
        let ctx = ModeContext {
            focus: Some("hiring"),
            ..ModeContext::default()
        };
        assert_eq!(
            Mode::BulletPoints.generate(&analysis, &ctx),
            "• Hiring is slow."
        );
    }

    #[test]
    fn test_key_insights() {
        let text = "Revenue rose 1, 2, 3, 4, 5 and 6 points. Why? How? When? Where?\n```\nx\n```";
        let out = run(Mode::KeyInsights, text);
        assert!(out.starts_with("1. Main themes: "));
        assert!(out.contains("numerical data points"));
        assert!(out.contains("Raises 4 questions"));
        assert!(out.contains("Includes 1 code example(s)"));
        assert_eq!(run(Mode::KeyInsights, ""), NO_INSIGHTS);
    }

    #[test]
    fn test_action_items() {
        let text = "Mike to complete API by Friday. Lisa to finalize icons by next week. The weather was nice.";
        assert_eq!(
            run(Mode::ActionItems, text),
            "1. Mike to complete API by Friday\n2. Lisa to finalize icons by next week"
        );
        assert_eq!(run(Mode::ActionItems, "Nothing to do here."), NO_ACTION_ITEMS);
    }

    #[test]
    fn test_action_items_drop_title_lines() {
        let text = "Next Steps:\n- Mike to complete API by Friday.";
        assert_eq!(run(Mode::ActionItems, text), "1. Mike to complete API by Friday");
    }

    #[test]
    fn test_technical() {
        let text = "The server caches every database query. We implement the interface in one module.\n```\nfn a() {}\n```";
        let out = run(Mode::Technical, text);
        assert!(out.starts_with("**Code Blocks:** 1 code example(s) found"));
        assert!(out.contains("**Technical Terms:** "));
        assert!(out.contains("database"));
        assert!(out.contains("**Implementation Details:**\n• "));
        assert_eq!(run(Mode::Technical, "Lovely weather."), NO_TECHNICAL);
    }

    #[test]
    fn test_executive() {
        let long = "word ".repeat(60);
        let text = format!("{long}\n\nSales hit 40% growth in 2024. We recommend expanding the team.");
        let out = run(Mode::Executive, &text);
        assert!(out.starts_with("**Overview:** word"));
        assert!(out.contains("...\n\n**Key Metrics:** 40%, 2024"));
        assert!(out.ends_with("**Recommendations:**\n• We recommend expanding the team."));
    }

    #[test]
    fn test_questions_literal_and_derived() {
        assert_eq!(
            run(Mode::Questions, "Is it ready? Yes. Who owns it?"),
            "1. Is it ready?\n2. Who owns it?"
        );
        let derived = run(Mode::Questions, "Revenue reached 5 million on 2024-01-02.");
        assert!(derived.starts_with("1. What do the figures"));
        assert!(derived.contains("2. What is the significance of the dates"));
        assert!(derived.contains("3. How does \""));
        assert_eq!(run(Mode::Questions, ""), NO_QUESTIONS);
    }

    #[test]
    fn test_questions_cap_at_five() {
        let out = run(Mode::Questions, "Why a? Why b? Why c? Why d? Why e? Why f?");
        assert_eq!(out.lines().count(), 5);
        assert!(out.ends_with("5. Why e?"));
    }

    #[test]
    fn test_pros_cons_cap_each_list_at_five() {
        let pros = "Gain one. Gain two. Gain three. Gain four. Gain five. Gain six.";
        let cons = "Risk one. Risk two. Risk three. Risk four. Risk five. Risk six.";
        let out = run(Mode::ProsCons, &format!("{pros} {cons}"));
        assert_eq!(out.matches("• Gain").count(), 5);
        assert_eq!(out.matches("• Risk").count(), 5);
        assert!(!out.contains("six"));
    }

    #[test]
    fn test_pros_cons() {
        let out = run(
            Mode::ProsCons,
            "This approach offers significant benefit. However, there is a major drawback.",
        );
        assert_eq!(
            out,
            "**Pros:**\n• This approach offers significant benefit.\n\n**Cons:**\n• However, there is a major drawback."
        );
    }

    #[test]
    fn test_pros_cons_first_match_wins() {
        let out = run(Mode::ProsCons, "The benefit comes with a risk.");
        assert_eq!(out, "**Pros:**\n• The benefit comes with a risk.");
        assert_eq!(run(Mode::ProsCons, "Plain statement."), NO_PROS_CONS);
    }

    #[test]
    fn test_timeline() {
        let text = "Kickoff was on 2024-01-10. Launch is planned for March 5, 2024. Review again on 2024-01-10.";
        assert_eq!(
            run(Mode::Timeline, text),
            "**2024-01-10:** Kickoff was on 2024-01-10.\n**March 5, 2024:** Launch is planned for March 5, 2024."
        );
        assert_eq!(run(Mode::Timeline, "No dates here."), NO_TIMELINE);
    }

    #[test]
    fn test_creative() {
        let analysis = analyze("The team met. They agreed on a plan.");
        let ctx = ModeContext {
            abstraction_level: 5,
            instructions: Some("make it fun"),
            ..ModeContext::default()
        };
        let out = Mode::Creative.generate(&analysis, &ctx);
        assert!(out.starts_with("Seen from a distance"));
        assert!(out.contains("They agreed on a plan. And then, the team met."));
        assert!(out.ends_with("(Told with this in mind: make it fun)"));
    }

    #[test]
    fn test_academic() {
        let out = run(Mode::Academic, "Intro paragraph here.\n\nFinal words.");
        assert!(out.starts_with("**Thesis:** Intro paragraph here."));
        assert!(out.contains("**Evidence:**\n• "));
        assert!(out.ends_with("**Conclusion:** Final words."));
        assert_eq!(run(Mode::Academic, ""), format!("**Conclusion:** {NO_CONCLUSION}"));
    }

    #[test]
    fn test_conversational_filler() {
        let out = run(Mode::Conversational, "It works. It is fast.");
        assert_eq!(
            out,
            format!("So, here's the deal: It works. The big thing to know is that it is fast. Oh, and {CONVERSATIONAL_FILLER}")
        );
    }

    #[test]
    fn test_comparison() {
        let out = run(
            Mode::Comparison,
            "Rust is faster than Python. The benefit is real.",
        );
        assert!(out.starts_with("**Direct Comparisons:**\n• Rust is faster than Python."));
        assert!(out.contains("**Pros:**"));
        assert_eq!(run(Mode::Comparison, "Plain statement."), NO_COMPARISONS);
    }

    #[test]
    fn test_auto_dispatch() {
        let empty = analyze("");
        assert_eq!(Mode::Auto.resolve(&empty, None), Mode::Detailed);
        assert_eq!(Mode::Auto.resolve(&empty, Some("Keep it SHORT")), Mode::Brief);
        assert_eq!(Mode::Auto.resolve(&empty, Some("list action items")), Mode::ActionItems);
        assert_eq!(Mode::Auto.resolve(&empty, Some("per section")), Mode::Detailed);
        assert_eq!(Mode::Brief.resolve(&empty, Some("action")), Mode::Brief);

        let tasks = analyze("We must a. We must b. We must c. We must d. We must e. We must f.");
        assert_eq!(Mode::Auto.resolve(&tasks, None), Mode::ActionItems);

        let code = analyze("```a``` ```b``` ```c```");
        assert_eq!(Mode::Auto.resolve(&code, None), Mode::Technical);

        let numbers = analyze("1 2 3 4 5 6 7 8 9 10 11");
        assert_eq!(Mode::Auto.resolve(&numbers, None), Mode::Executive);
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("The plan"), "the plan");
        assert_eq!(lower_first("API first"), "API first");
        assert_eq!(lower_first("I agree"), "I agree");
    }
}
