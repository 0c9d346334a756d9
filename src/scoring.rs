//! Sentence scoring and key point ranking.

use crate::analysis::ContentAnalysis;

/// Sentences strictly inside this character range score as well-sized.
const IDEAL_LENGTH: (usize, usize) = (50, 200);
/// Sentences before this position score as leading sentences.
const LEADING_POSITIONS: usize = 5;
/// Cap on the contribution of a single keyword.
const KEYWORD_CAP: usize = 3;

/// Score a sentence found at `position` in the original sentence order.
pub fn score_sentence(analysis: &ContentAnalysis, sentence: &str, position: usize) -> usize {
    let mut score = 0;

    let length = sentence.chars().count();
    if length > IDEAL_LENGTH.0 && length < IDEAL_LENGTH.1 {
        score += 2;
    }

    if sentence.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }

    let lowered = sentence.to_lowercase();
    score += analysis
        .keywords
        .iter()
        .filter(|(word, _)| lowered.contains(word.as_str()))
        .map(|(_, count)| (*count).min(KEYWORD_CAP))
        .sum::<usize>();

    if position < LEADING_POSITIONS {
        score += 2;
    }

    score
}

/// Pick the `count` highest-scoring sentences.
///
/// With a focus term, only sentences mentioning it (case-insensitively) are
/// candidates, so a focus the text never mentions yields nothing. Equal
/// scores keep document order.
pub fn extract_key_points(
    analysis: &ContentAnalysis,
    count: usize,
    focus: Option<&str>,
) -> Vec<String> {
    let mut candidates: Vec<(usize, &String)> = analysis.sentences.iter().enumerate().collect();

    if let Some(focus) = focus.map(str::trim).filter(|f| !f.is_empty()) {
        let focus = focus.to_lowercase();
        candidates.retain(|(_, s)| s.to_lowercase().contains(&focus));
    }

    let mut scored: Vec<(usize, &String)> = candidates
        .into_iter()
        .map(|(position, sentence)| (score_sentence(analysis, sentence, position), sentence))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(count)
        .map(|(_, sentence)| sentence.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_score_components() {
        let analysis = analyze("Short one. Another short.");
        // leading position only
        assert_eq!(score_sentence(&analysis, "xyz.", 0), 2);
        // digit, no position bonus
        assert_eq!(score_sentence(&analysis, "xyz 4.", 9), 1);
        // ideal length
        let long = "x".repeat(60);
        assert_eq!(score_sentence(&analysis, &long, 9), 2);
    }

    #[test]
    fn test_keyword_contribution_is_capped() {
        let analysis = analyze("Cache cache cache cache cache.");
        assert_eq!(analysis.keywords.get("cache"), Some(&5));
        assert_eq!(score_sentence(&analysis, "the cache.", 9), 3);
    }

    #[test]
    fn test_ranking_prefers_informative_sentences() {
        let text = "Hi. Ok. Fine. Sure. Yes. No. \
                    The deployment pipeline now finishes in 12 minutes thanks to deployment caching.";
        let analysis = analyze(text);
        let points = extract_key_points(&analysis, 1, None);
        assert_eq!(points.len(), 1);
        assert!(points[0].starts_with("The deployment pipeline"));
    }

    #[test]
    fn test_ties_keep_document_order() {
        let analysis = analyze("Alpha. Beta. Gamma.");
        let points = extract_key_points(&analysis, 2, None);
        assert_eq!(points, vec!["Alpha.", "Beta."]);
    }

    #[test]
    fn test_focus_restricts_candidates() {
        let analysis = analyze("Budget is tight. Security needs review. Hiring is slow.");
        let points = extract_key_points(&analysis, 3, Some("SECURITY"));
        assert_eq!(points, vec!["Security needs review."]);
    }

    #[test]
    fn test_unmatched_focus_yields_no_candidates() {
        let analysis = analyze("Budget is tight. Hiring is slow.");
        assert!(extract_key_points(&analysis, 10, Some("marketing")).is_empty());
    }

    #[test]
    fn test_blank_focus_keeps_all_sentences() {
        let analysis = analyze("Budget is tight. Hiring is slow.");
        assert_eq!(extract_key_points(&analysis, 10, Some("  ")).len(), 2);
    }

    #[test]
    fn test_count_caps_result() {
        let analysis = analyze("One. Two. Three. Four.");
        assert_eq!(extract_key_points(&analysis, 0, None).len(), 0);
        assert_eq!(extract_key_points(&analysis, 10, None).len(), 4);
    }
}
