//! Feedback Extractor — turns a free-form answer-analysis narrative into a
//! fully populated [`GeneratedFeedback`].
//!
//! The narrative is model output with no guaranteed structure. Every section
//! may be missing, reordered, or decorated differently, so extraction never
//! fails: anything not found resolves to the defaults declared below.
//!
//! Algorithm:
//! 1. Locate the four section headings (Strengths, Areas for Improvement,
//!    Model Answer, Ratings). A heading is either a label wrapped in a
//!    matching `*`/`_` emphasis pair (anywhere in the text), or a label at
//!    the start of a line that carries a `#` marker or stands alone on it.
//!    A `*` followed by whitespace is a list bullet, never emphasis.
//! 2. Each heading's span runs to the start of the next recognised heading or
//!    end of input. Only the first occurrence of a heading kind is kept; for
//!    the Ratings aliases (Ratings, Score, Reasoning) an empty first span
//!    gives way to the next non-empty one.
//! 3. Sub-scores are read from the Ratings-alias spans in order, or from the
//!    whole narrative when no such heading exists.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

/// Used when neither a strengths nor an improvements span is present.
pub const NO_FEEDBACK: &str = "No feedback provided";
/// Used when the Model Answer span is absent or blank.
pub const NO_MODEL_ANSWER: &str = "No model answer provided";
/// Stands in for a blank strengths span inside the combined feedback block.
pub const NO_STRENGTHS: &str = "No specific strengths identified.";
/// Stands in for a blank improvements span inside the combined feedback block.
pub const NO_IMPROVEMENTS: &str = "No specific areas for improvement identified.";
/// Neutral sub-score used when a label or its number is missing.
pub const DEFAULT_SCORE: i32 = 5;

const STRENGTHS_HEADER: &str = "**Strengths:**";
const IMPROVEMENTS_HEADER: &str = "**Areas for Improvement:**";

const HEADING_LABELS: &str = r"key[ \t]+strengths|strengths|areas[ \t]+(?:for|of)[ \t]+improvements?|model[ \t]+answer|ratings|scores?|reasoning";

/// Bare, `#`-marked or bulleted label at a line start.
static LINE_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?im)^[ \t]*(?:\d+[.)][ \t]*)?(?:[-*+][ \t]+)?(?P<hashes>#{{1,6}}[ \t]*)?(?P<label>{HEADING_LABELS})\b[ \t]*:?(?P<rest>[^\n]*)$"
    ))
    .expect("line heading pattern is valid")
});

/// Label directly inside an emphasis pair, e.g. `**Strengths:**` or `*Score*`.
static EMPHASIS_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?P<hashes>#{{1,6}}[ \t]*)?(?P<open>\*{{1,2}}|_{{1,2}})(?P<label>{HEADING_LABELS})[ \t]*:?[ \t]*(?P<close>\*{{1,2}}|_{{1,2}})[ \t]*:?"
    ))
    .expect("emphasis heading pattern is valid")
});

static CONFIDENCE_RE: Lazy<Regex> = Lazy::new(|| score_pattern("Confidence"));
static CLARITY_RE: Lazy<Regex> = Lazy::new(|| score_pattern("Clarity"));
static RELEVANCE_RE: Lazy<Regex> = Lazy::new(|| score_pattern("Relevance"));

/// Label (case-sensitive), optional emphasis, a colon or dash, then the
/// leading integer run.
fn score_pattern(label: &str) -> Regex {
    Regex::new(&format!(
        r"\b{label}(?:\*{{1,2}}|_{{1,2}})?\s*[:\-–—]\s*(?:\*{{1,2}}|_{{1,2}})?\s*(?P<value>-?\d+)"
    ))
    .expect("score pattern is valid")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Strengths,
    Improvements,
    ModelAnswer,
    Ratings,
}

impl SectionKind {
    fn from_label(label: &str) -> Self {
        let label = label.to_ascii_lowercase();
        if label.ends_with("strengths") {
            SectionKind::Strengths
        } else if label.starts_with("areas") {
            SectionKind::Improvements
        } else if label.starts_with("model") {
            SectionKind::ModelAnswer
        } else {
            SectionKind::Ratings
        }
    }
}

/// Trimmed section spans of one narrative. `None` means the heading never
/// appeared; `Some("")` means it appeared with nothing under it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NarrativeSections<'a> {
    pub strengths: Option<&'a str>,
    pub improvements: Option<&'a str>,
    pub model_answer: Option<&'a str>,
    pub ratings: Option<&'a str>,
}

impl<'a> NarrativeSections<'a> {
    fn slot(&mut self, kind: SectionKind) -> &mut Option<&'a str> {
        match kind {
            SectionKind::Strengths => &mut self.strengths,
            SectionKind::Improvements => &mut self.improvements,
            SectionKind::ModelAnswer => &mut self.model_answer,
            SectionKind::Ratings => &mut self.ratings,
        }
    }
}

/// Structured result of parsing one narrative. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFeedback {
    pub strengths: String,
    pub improvements: String,
    pub combined_feedback: String,
    pub model_answer: String,
    pub confidence_score: i32,
    pub clarity_score: i32,
    pub relevance_score: i32,
}

/// A heading located in the narrative: where its marker starts and where the
/// text under it begins.
struct Heading {
    kind: SectionKind,
    start: usize,
    body_start: usize,
}

/// One heading's trimmed span.
struct Span<'a> {
    kind: SectionKind,
    text: &'a str,
}

/// True when only whitespace, numbering, bullets or `#` precede `at` on its line.
fn at_line_start(narrative: &str, at: usize) -> bool {
    narrative[..at]
        .rsplit('\n')
        .next()
        .unwrap_or("")
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_digit() || matches!(c, '.' | ')' | '-' | '*' | '+' | '#'))
}

fn heading(caps: &Captures<'_>, body_start: usize) -> Option<Heading> {
    Some(Heading {
        kind: SectionKind::from_label(caps.name("label")?.as_str()),
        start: caps.get(0)?.start(),
        body_start,
    })
}

/// A bare or bulleted label only counts when nothing else shares its line.
fn line_heading(caps: Captures<'_>) -> Option<Heading> {
    let rest = caps.name("rest")?;
    if caps.name("hashes").is_none() && !rest.as_str().trim().is_empty() {
        return None;
    }
    heading(&caps, rest.start())
}

/// The emphasis pair must match. Mid-line, the label must also be
/// capitalised so emphasis on an ordinary word in prose is left alone.
fn emphasis_heading(narrative: &str, caps: Captures<'_>) -> Option<Heading> {
    if caps.name("open")?.as_str() != caps.name("close")?.as_str() {
        return None;
    }
    let whole = caps.get(0)?;
    let label = caps.name("label")?.as_str();
    let capitalised = label.starts_with(|c: char| c.is_uppercase());
    if !capitalised && !at_line_start(narrative, whole.start()) {
        return None;
    }
    heading(&caps, whole.end())
}

fn find_headings(narrative: &str) -> Vec<Heading> {
    let mut candidates: Vec<Heading> = LINE_HEADING_RE
        .captures_iter(narrative)
        .filter_map(line_heading)
        .chain(
            EMPHASIS_HEADING_RE
                .captures_iter(narrative)
                .filter_map(|caps| emphasis_heading(narrative, caps)),
        )
        .collect();
    candidates.sort_by_key(|h| h.start);

    // Drop any candidate that starts inside an earlier heading's marker.
    let mut headings: Vec<Heading> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if headings
            .last()
            .map_or(true, |prev| candidate.start >= prev.body_start)
        {
            headings.push(candidate);
        }
    }
    headings
}

fn section_spans(narrative: &str) -> Vec<Span<'_>> {
    let headings = find_headings(narrative);
    headings
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            let end = headings
                .get(i + 1)
                .map_or(narrative.len(), |next| next.start);
            Span {
                kind: heading.kind,
                text: narrative[heading.body_start..end].trim(),
            }
        })
        .collect()
}

/// Splits a narrative into its section spans.
///
/// A span stops at the next recognised heading of any kind, including a
/// repeat of its own kind, so content under a duplicate heading is dropped.
pub fn split_sections(narrative: &str) -> NarrativeSections<'_> {
    let mut sections = NarrativeSections::default();

    for span in section_spans(narrative) {
        let slot = sections.slot(span.kind);
        let replace_empty_ratings =
            span.kind == SectionKind::Ratings && *slot == Some("") && !span.text.is_empty();
        if slot.is_none() || replace_empty_ratings {
            *slot = Some(span.text);
        }
    }

    sections
}

fn non_empty(span: Option<&str>) -> Option<&str> {
    span.filter(|s| !s.is_empty())
}

fn find_score(re: &Regex, haystack: &str) -> Option<i32> {
    re.captures(haystack)?.name("value")?.as_str().parse().ok()
}

/// Parses a narrative into a [`GeneratedFeedback`]. Pure and infallible.
pub fn extract_feedback(narrative: &str) -> GeneratedFeedback {
    let sections = split_sections(narrative);

    let strengths = non_empty(sections.strengths);
    let improvements = non_empty(sections.improvements);

    let combined_feedback = if strengths.is_some() || improvements.is_some() {
        format!(
            "{STRENGTHS_HEADER}\n{}\n\n{IMPROVEMENTS_HEADER}\n{}",
            strengths.unwrap_or(NO_STRENGTHS),
            improvements.unwrap_or(NO_IMPROVEMENTS),
        )
    } else {
        NO_FEEDBACK.to_string()
    };

    let model_answer = non_empty(sections.model_answer)
        .unwrap_or(NO_MODEL_ANSWER)
        .to_string();

    let mut score_sources: Vec<&str> = section_spans(narrative)
        .into_iter()
        .filter(|span| span.kind == SectionKind::Ratings)
        .map(|span| span.text)
        .collect();
    if score_sources.is_empty() {
        score_sources.push(narrative);
    }
    let score = |re: &Regex| {
        score_sources
            .iter()
            .find_map(|source| find_score(re, source))
            .unwrap_or(DEFAULT_SCORE)
    };

    GeneratedFeedback {
        strengths: strengths.unwrap_or_default().to_string(),
        improvements: improvements.unwrap_or_default().to_string(),
        combined_feedback,
        model_answer,
        confidence_score: score(&CONFIDENCE_RE),
        clarity_score: score(&CLARITY_RE),
        relevance_score: score(&RELEVANCE_RE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN_NARRATIVE: &str = "**Strengths**\nGood structure.\n**Areas for Improvement**\nAdd metrics.\n**Model Answer**\nUse STAR method.\n**Ratings**\nConfidence: 8\nClarity: 7\nRelevance: 9";

    // Shape the analysis prompt actually asks for: colon inside the emphasis,
    // bullet lists, blank lines between sections.
    const PROMPT_SHAPED_NARRATIVE: &str = r#"Here is my analysis of the candidate's answer.

**Strengths:**
- Opens with concrete context about the migration.

- Quantifies the latency win.

**Areas for Improvement:**
- Does not explain the trade-offs that were rejected.
- The closing is abrupt.

**Model Answer:**
"In my last role I led the move from a monolith to services..."

It then walks through the result in numbers.

**Ratings:**
- Confidence: 7 - Speaks with authority.
- Clarity: 6 - Some rambling in the middle.
- Relevance: 9 - Directly on topic.
"#;

    #[test]
    fn test_empty_narrative_yields_all_defaults() {
        let feedback = extract_feedback("");
        assert_eq!(feedback.combined_feedback, NO_FEEDBACK);
        assert_eq!(feedback.model_answer, NO_MODEL_ANSWER);
        assert_eq!(feedback.confidence_score, DEFAULT_SCORE);
        assert_eq!(feedback.clarity_score, DEFAULT_SCORE);
        assert_eq!(feedback.relevance_score, DEFAULT_SCORE);
        assert!(feedback.strengths.is_empty());
        assert!(feedback.improvements.is_empty());
    }

    #[test]
    fn test_plain_narrative_fields() {
        let feedback = extract_feedback(PLAIN_NARRATIVE);
        assert_eq!(feedback.confidence_score, 8);
        assert_eq!(feedback.clarity_score, 7);
        assert_eq!(feedback.relevance_score, 9);
        assert!(feedback.combined_feedback.contains("Good structure."));
        assert!(feedback.combined_feedback.contains("Add metrics."));
        assert!(feedback.model_answer.contains("Use STAR method."));
        assert_eq!(feedback.strengths, "Good structure.");
        assert_eq!(feedback.improvements, "Add metrics.");
    }

    #[test]
    fn test_combined_feedback_layout() {
        let feedback = extract_feedback(PLAIN_NARRATIVE);
        assert_eq!(
            feedback.combined_feedback,
            "**Strengths:**\nGood structure.\n\n**Areas for Improvement:**\nAdd metrics."
        );
    }

    #[test]
    fn test_prompt_shaped_narrative_is_fully_populated() {
        let feedback = extract_feedback(PROMPT_SHAPED_NARRATIVE);
        assert_ne!(feedback.combined_feedback, NO_FEEDBACK);
        assert_ne!(feedback.model_answer, NO_MODEL_ANSWER);
        assert_eq!(
            (
                feedback.confidence_score,
                feedback.clarity_score,
                feedback.relevance_score
            ),
            (7, 6, 9)
        );
        // Spans stop at the next heading even across blank lines.
        assert!(feedback.strengths.contains("Quantifies the latency win."));
        assert!(!feedback.strengths.contains("Areas for Improvement"));
        assert!(!feedback.strengths.contains("trade-offs"));
        assert!(feedback.model_answer.contains("walks through the result"));
        assert!(!feedback.model_answer.contains("Confidence"));
    }

    #[test]
    fn test_swapped_strengths_and_improvements() {
        let narrative = "**Areas for Improvement**\nAdd metrics.\n\n**Strengths**\nGood structure.\n";
        let sections = split_sections(narrative);
        assert_eq!(sections.strengths, Some("Good structure."));
        assert_eq!(sections.improvements, Some("Add metrics."));
    }

    #[test]
    fn test_only_improvements_uses_strengths_fallback() {
        let feedback = extract_feedback("**Areas for Improvement:**\nSlow down.");
        assert!(feedback.combined_feedback.contains(NO_STRENGTHS));
        assert!(feedback.combined_feedback.contains("Slow down."));
        assert!(feedback.strengths.is_empty());
    }

    #[test]
    fn test_empty_strengths_heading_counts_as_empty() {
        let narrative = "**Strengths:**\n\n**Areas for Improvement:**\n\n**Model Answer:**\n";
        let sections = split_sections(narrative);
        assert_eq!(sections.strengths, Some(""));
        assert_eq!(sections.model_answer, Some(""));

        let feedback = extract_feedback(narrative);
        assert_eq!(feedback.combined_feedback, NO_FEEDBACK);
        assert_eq!(feedback.model_answer, NO_MODEL_ANSWER);
    }

    #[test]
    fn test_first_duplicate_heading_wins() {
        let narrative = "**Model Answer**\nFirst draft.\n**Model Answer**\nSecond draft.";
        let feedback = extract_feedback(narrative);
        assert_eq!(feedback.model_answer, "First draft.");
    }

    #[test]
    fn test_heading_decoration_variants() {
        let narrative = "### Key Strengths\nCalm delivery.\n### **Areas of Improvement**\nMore detail.\n## Model Answer:\nTell a story.\n__Score__\nClarity - 4";
        let sections = split_sections(narrative);
        assert_eq!(sections.strengths, Some("Calm delivery."));
        assert_eq!(sections.improvements, Some("More detail."));
        assert_eq!(sections.model_answer, Some("Tell a story."));
        assert_eq!(sections.ratings, Some("Clarity - 4"));
        assert_eq!(extract_feedback(narrative).clarity_score, 4);
    }

    #[test]
    fn test_heading_with_inline_content() {
        let sections = split_sections("**Model Answer:** Lead with the outcome.\n**Ratings:** Clarity: 6");
        assert_eq!(sections.model_answer, Some("Lead with the outcome."));
        assert_eq!(sections.ratings, Some("Clarity: 6"));
    }

    #[test]
    fn test_bare_label_inside_prose_is_not_a_heading() {
        let narrative = "**Strengths**\nStrengths of this answer include pacing.\nModel answer quality is high.";
        let sections = split_sections(narrative);
        assert_eq!(
            sections.strengths,
            Some("Strengths of this answer include pacing.\nModel answer quality is high.")
        );
        assert_eq!(sections.model_answer, None);
    }

    #[test]
    fn test_bare_label_on_its_own_line_is_a_heading() {
        let sections = split_sections("Strengths\nConcise.\nRatings:\nConfidence: 3");
        assert_eq!(sections.strengths, Some("Concise."));
        assert_eq!(sections.ratings, Some("Confidence: 3"));
    }

    #[test]
    fn test_label_without_number_defaults() {
        let feedback =
            extract_feedback("**Ratings**\nConfidence is important.\nClarity: 6\nRelevance: 7");
        assert_eq!(feedback.confidence_score, DEFAULT_SCORE);
        assert_eq!(feedback.clarity_score, 6);
        assert_eq!(feedback.relevance_score, 7);
    }

    #[test]
    fn test_label_followed_by_word_defaults() {
        let feedback = extract_feedback("Confidence: strong\nClarity: 8");
        assert_eq!(feedback.confidence_score, DEFAULT_SCORE);
        assert_eq!(feedback.clarity_score, 8);
    }

    #[test]
    fn test_label_is_case_sensitive() {
        let feedback = extract_feedback("confidence: 9");
        assert_eq!(feedback.confidence_score, DEFAULT_SCORE);
    }

    #[test]
    fn test_later_labelled_number_is_found_after_prose_mention() {
        let feedback = extract_feedback("Confidence is key here.\nConfidence: 9");
        assert_eq!(feedback.confidence_score, 9);
    }

    #[test]
    fn test_score_punctuation_and_sign() {
        let feedback =
            extract_feedback("**Ratings**\nConfidence: 8/10\nClarity: -2 (odd)\nRelevance: 7 — fine");
        assert_eq!(feedback.confidence_score, 8);
        assert_eq!(feedback.clarity_score, -2);
        assert_eq!(feedback.relevance_score, 7);
    }

    #[test]
    fn test_scores_are_not_clamped() {
        let feedback = extract_feedback("**Ratings**\nConfidence: 42\nClarity: 11\nRelevance: 0");
        assert_eq!(feedback.confidence_score, 42);
        assert_eq!(feedback.clarity_score, 11);
        assert_eq!(feedback.relevance_score, 0);
    }

    #[test]
    fn test_emphasised_score_labels() {
        let feedback = extract_feedback(
            "**Ratings:**\n- **Confidence:** 8 - solid\n- **Clarity**: 7\n- Relevance - 6",
        );
        assert_eq!(
            (
                feedback.confidence_score,
                feedback.clarity_score,
                feedback.relevance_score
            ),
            (8, 7, 6)
        );
    }

    #[test]
    fn test_scores_only_read_from_ratings_span_when_present() {
        let narrative = "**Strengths**\nConfidence: 9 shows through.\n**Ratings**\nClarity: 4";
        let feedback = extract_feedback(narrative);
        assert_eq!(feedback.confidence_score, DEFAULT_SCORE);
        assert_eq!(feedback.clarity_score, 4);
    }

    #[test]
    fn test_scores_fall_back_to_whole_narrative() {
        let feedback = extract_feedback("Overall decent.\nConfidence: 6\nClarity: 5\nRelevance: 8");
        assert_eq!(feedback.confidence_score, 6);
        assert_eq!(feedback.relevance_score, 8);
    }

    #[test]
    fn test_oversized_number_defaults() {
        let feedback = extract_feedback("Confidence: 99999999999999999999");
        assert_eq!(feedback.confidence_score, DEFAULT_SCORE);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        assert_eq!(
            extract_feedback(PROMPT_SHAPED_NARRATIVE),
            extract_feedback(PROMPT_SHAPED_NARRATIVE)
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let narrative = "**Strengths**\r\nClear.\r\n**Model Answer**\r\nBe specific.\r\n";
        let feedback = extract_feedback(narrative);
        assert_eq!(feedback.strengths, "Clear.");
        assert_eq!(feedback.model_answer, "Be specific.");
    }

    // Star bullets whose first words collide with section labels.
    const STAR_BULLET_NARRATIVE: &str = "**Strengths:**\n*   Model answer structure was followed closely.\n*   Good pacing.\n\n**Areas for Improvement:**\n*   Reasoning behind the trade-off was thin.\n*   Score the impact with numbers.\n\n**Model Answer:**\n*   Strengths of the team were leveraged first.\n*   Then the rollout.\n\n**Ratings:**\n*   Confidence: 8 - Assured.\n*   Clarity: 7 - Mostly clear.\n*   Relevance: 9 - On point.\n";

    #[test]
    fn test_star_bullets_do_not_open_sections() {
        let sections = split_sections(STAR_BULLET_NARRATIVE);
        assert_eq!(
            sections.strengths,
            Some("*   Model answer structure was followed closely.\n*   Good pacing.")
        );
        assert_eq!(
            sections.improvements,
            Some("*   Reasoning behind the trade-off was thin.\n*   Score the impact with numbers.")
        );
        assert_eq!(
            sections.model_answer,
            Some("*   Strengths of the team were leveraged first.\n*   Then the rollout.")
        );

        let feedback = extract_feedback(STAR_BULLET_NARRATIVE);
        assert_eq!(
            (
                feedback.confidence_score,
                feedback.clarity_score,
                feedback.relevance_score
            ),
            (8, 7, 9)
        );
    }

    #[test]
    fn test_bullet_with_lone_label_is_a_heading() {
        let sections = split_sections("- Strengths\nCalm.\n*   Ratings:\nClarity: 6");
        assert_eq!(sections.strengths, Some("Calm."));
        assert_eq!(sections.ratings, Some("Clarity: 6"));
    }

    #[test]
    fn test_single_emphasis_heading() {
        let sections = split_sections("*Strengths*\nCalm.\n_Model Answer:_\nLead with impact.");
        assert_eq!(sections.strengths, Some("Calm."));
        assert_eq!(sections.model_answer, Some("Lead with impact."));
    }

    #[test]
    fn test_mismatched_emphasis_is_not_a_heading() {
        let sections = split_sections("**Strengths**\nSolid.\n*Model Answer_ was skipped.");
        assert_eq!(sections.strengths, Some("Solid.\n*Model Answer_ was skipped."));
        assert_eq!(sections.model_answer, None);
    }

    #[test]
    fn test_headings_on_a_single_line() {
        let narrative = "**Strengths** Good structure. **Areas for Improvement** Add metrics. **Ratings** Confidence: 8";
        let sections = split_sections(narrative);
        assert_eq!(sections.strengths, Some("Good structure."));
        assert_eq!(sections.improvements, Some("Add metrics."));
        assert_eq!(sections.ratings, Some("Confidence: 8"));
        assert_eq!(extract_feedback(narrative).confidence_score, 8);
    }

    #[test]
    fn test_lowercase_emphasis_in_prose_is_not_a_heading() {
        let narrative = "**Strengths**\nYour **strengths** showed early.\n**Model Answer**\nOpen with the result.";
        let sections = split_sections(narrative);
        assert_eq!(sections.strengths, Some("Your **strengths** showed early."));
        assert_eq!(sections.model_answer, Some("Open with the result."));
    }

    #[test]
    fn test_empty_ratings_span_gives_way_to_reasoning() {
        let narrative = "**Ratings:**\n**Reasoning:**\n- Confidence: 8\n- Clarity: 6\n- Relevance: 7";
        assert_eq!(
            split_sections(narrative).ratings,
            Some("- Confidence: 8\n- Clarity: 6\n- Relevance: 7")
        );

        let feedback = extract_feedback(narrative);
        assert_eq!(
            (
                feedback.confidence_score,
                feedback.clarity_score,
                feedback.relevance_score
            ),
            (8, 6, 7)
        );
    }

    #[test]
    fn test_scores_missing_from_ratings_are_read_from_later_alias() {
        let narrative = "**Ratings:**\nClarity: 4\n**Reasoning:**\nConfidence: 8\nClarity: 9";
        let feedback = extract_feedback(narrative);
        assert_eq!(feedback.confidence_score, 8);
        assert_eq!(feedback.clarity_score, 4);
        assert_eq!(feedback.relevance_score, DEFAULT_SCORE);
    }
}
