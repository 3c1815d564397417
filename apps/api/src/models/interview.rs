use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::interview::aggregate::SubScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewStatus {
    Pending,
    InProgress,
    Completed,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Pending => "pending",
            InterviewStatus::InProgress => "in-progress",
            InterviewStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InterviewStatus::Pending),
            "in-progress" => Ok(InterviewStatus::InProgress),
            "completed" => Ok(InterviewStatus::Completed),
            other => Err(format!(
                "unknown interview status '{other}' (expected pending, in-progress or completed)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub job_title: String,
    pub job_description: Option<String>,
    /// 0 – 100, set once feedback has been requested.
    pub overall_score: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One question of an interview plus the feedback attached to its latest answer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub position: i32,
    pub question: String,
    pub answer: Option<String>,
    pub feedback: Option<String>,
    pub model_answer: Option<String>,
    pub confidence_score: Option<i32>,
    pub clarity_score: Option<i32>,
    pub relevance_score: Option<i32>,
}

impl QuestionRow {
    pub fn is_answered(&self) -> bool {
        self.answer.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    /// Scores for aggregation; `None` when unanswered. A missing score on an
    /// answered question counts as 0.
    pub fn sub_scores(&self) -> Option<SubScores> {
        self.is_answered().then(|| {
            SubScores::new(
                self.confidence_score.unwrap_or(0),
                self.clarity_score.unwrap_or(0),
                self.relevance_score.unwrap_or(0),
            )
        })
    }
}
