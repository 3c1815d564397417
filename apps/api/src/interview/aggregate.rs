//! Score Aggregator — reduces per-question sub-scores into session totals.

use serde::{Deserialize, Serialize};

/// The three sub-scores of one answered question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubScores {
    pub confidence: i32,
    pub clarity: i32,
    pub relevance: i32,
}

impl SubScores {
    pub fn new(confidence: i32, clarity: i32, relevance: i32) -> Self {
        Self {
            confidence,
            clarity,
            relevance,
        }
    }
}

/// Session-level scores. `overall_score` is on a 0–100 scale; the
/// per-criterion averages are on 0–10 with one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub overall_score: i32,
    pub confidence_score: f64,
    pub clarity_score: f64,
    pub relevance_score: f64,
    pub answered_count: usize,
}

/// Round half up (towards +∞), matching the web client's rounding.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn one_decimal(sum: i64, count: usize) -> f64 {
    round_half_up(sum as f64 / count as f64 * 10.0) / 10.0
}

/// Aggregates the scores of answered questions. `None` entries are
/// unanswered questions and are excluded from numerator and denominator.
pub fn aggregate_scores<I>(questions: I) -> ScoreSummary
where
    I: IntoIterator<Item = Option<SubScores>>,
{
    let (count, confidence, clarity, relevance) = questions.into_iter().flatten().fold(
        (0usize, 0i64, 0i64, 0i64),
        |(n, conf, clar, rel), s| {
            (
                n + 1,
                conf + i64::from(s.confidence),
                clar + i64::from(s.clarity),
                rel + i64::from(s.relevance),
            )
        },
    );

    if count == 0 {
        return ScoreSummary::default();
    }

    let total = (confidence + clarity + relevance) as f64;
    let overall = round_half_up(total / (count * 3) as f64 * 10.0);

    ScoreSummary {
        overall_score: overall as i32,
        confidence_score: one_decimal(confidence, count),
        clarity_score: one_decimal(clarity, count),
        relevance_score: one_decimal(relevance, count),
        answered_count: count,
    }
}
