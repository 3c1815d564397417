//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::aggregate::{aggregate_scores, ScoreSummary};
use crate::interview::analyzer::analyze_answer;
use crate::interview::feedback::GeneratedFeedback;
use crate::interview::questions::generate_questions;
use crate::interview::store::{self, InterviewChanges, NewInterview};
use crate::models::interview::{InterviewRow, InterviewStatus, QuestionRow};
use crate::models::resume::ResumeRow;
use crate::models::UserIdQuery;
use crate::state::AppState;

const MIN_SCORE: i32 = 0;
const MAX_SCORE: i32 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateInterviewRequest {
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub job_title: String,
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInterviewRequest {
    pub user_id: Uuid,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub user_id: Uuid,
    pub question_index: i64,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewDetail {
    #[serde(flatten)]
    pub interview: InterviewRow,
    pub questions: Vec<QuestionRow>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    #[serde(flatten)]
    pub scores: ScoreSummary,
    pub questions: Vec<QuestionRow>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// The extractor passes scores through untouched; storage only accepts 0–10.
fn question_position(index: i64) -> Result<usize, AppError> {
    usize::try_from(index)
        .map_err(|_| AppError::Validation("question_index cannot be negative".to_string()))
}

fn clamp_score(label: &str, value: i32) -> i32 {
    let clamped = value.clamp(MIN_SCORE, MAX_SCORE);
    if clamped != value {
        warn!("{label} score {value} out of range, clamped to {clamped}");
    }
    clamped
}

fn clamp_scores(mut feedback: GeneratedFeedback) -> GeneratedFeedback {
    feedback.confidence_score = clamp_score("Confidence", feedback.confidence_score);
    feedback.clarity_score = clamp_score("Clarity", feedback.clarity_score);
    feedback.relevance_score = clamp_score("Relevance", feedback.relevance_score);
    feedback
}

async fn load_interview(
    state: &AppState,
    id: Uuid,
    user_id: Uuid,
) -> Result<InterviewRow, AppError> {
    store::get_interview(&state.db, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))
}

async fn load_resume_text(
    state: &AppState,
    resume_id: Uuid,
    user_id: Uuid,
) -> Result<String, AppError> {
    let resume = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
    )
    .bind(resume_id)
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    if resume.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume content not available".to_string(),
        ));
    }
    Ok(resume.content)
}

async fn detail(state: &AppState, interview: InterviewRow) -> Result<InterviewDetail, AppError> {
    let questions = store::get_questions(&state.db, interview.id).await?;
    Ok(InterviewDetail {
        interview,
        questions,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews
///
/// Generates questions from the resume and creates the interview `in-progress`.
pub async fn handle_create_interview(
    State(state): State<AppState>,
    Json(request): Json<CreateInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewDetail>), AppError> {
    let job_title = non_blank(Some(request.job_title.as_str()))
        .ok_or_else(|| AppError::Validation("job_title cannot be empty".to_string()))?;
    let job_description = non_blank(request.job_description.as_deref());

    let resume_text = load_resume_text(&state, request.resume_id, request.user_id).await?;

    let questions = generate_questions(
        state.generator.as_ref(),
        &resume_text,
        job_title,
        job_description,
    )
    .await?;

    let interview = store::create_interview(
        &state.db,
        NewInterview {
            user_id: request.user_id,
            resume_id: request.resume_id,
            job_title,
            job_description,
            questions: &questions,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(detail(&state, interview).await?)))
}

/// GET /api/v1/interviews
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    Ok(Json(store::list_interviews(&state.db, params.user_id).await?))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<InterviewDetail>, AppError> {
    let interview = load_interview(&state, id, params.user_id).await?;
    Ok(Json(detail(&state, interview).await?))
}

/// PUT /api/v1/interviews/:id
///
/// Only non-blank fields are applied.
pub async fn handle_update_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInterviewRequest>,
) -> Result<Json<InterviewDetail>, AppError> {
    let status = non_blank(request.status.as_deref())
        .map(str::parse::<InterviewStatus>)
        .transpose()
        .map_err(AppError::Validation)?;

    let changes = InterviewChanges {
        job_title: non_blank(request.job_title.as_deref()),
        job_description: non_blank(request.job_description.as_deref()),
        status,
    };

    let interview = store::update_interview(&state.db, id, request.user_id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    Ok(Json(detail(&state, interview).await?))
}

/// DELETE /api/v1/interviews/:id
pub async fn handle_delete_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !store::delete_interview(&state.db, id, params.user_id).await? {
        return Err(AppError::NotFound(format!("Interview {id} not found")));
    }
    Ok(Json(DeletedResponse {
        message: "Interview removed".to_string(),
    }))
}

/// POST /api/v1/interviews/:id/generate-questions
///
/// Replaces the question set; previous answers and feedback are discarded.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UserIdQuery>,
) -> Result<Json<InterviewDetail>, AppError> {
    let interview = load_interview(&state, id, request.user_id).await?;
    let resume_text = load_resume_text(&state, interview.resume_id, request.user_id).await?;

    let questions = generate_questions(
        state.generator.as_ref(),
        &resume_text,
        &interview.job_title,
        interview.job_description.as_deref(),
    )
    .await?;

    store::replace_questions(&state.db, id, &questions).await?;

    let interview = load_interview(&state, id, request.user_id).await?;
    Ok(Json(detail(&state, interview).await?))
}

/// POST /api/v1/interviews/:id/answer
///
/// Analyses the answer synchronously and overwrites the question's feedback.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<QuestionRow>, AppError> {
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let position = question_position(request.question_index)?;

    let interview = load_interview(&state, id, request.user_id).await?;
    let questions = store::get_questions(&state.db, id).await?;
    let question = questions
        .get(position)
        .ok_or_else(|| AppError::NotFound(format!("Question {position} not found")))?;

    let feedback = analyze_answer(
        state.generator.as_ref(),
        &question.question,
        &request.answer,
        &interview.job_title,
    )
    .await?;

    let updated =
        store::record_answer(&state.db, question.id, &request.answer, &clamp_scores(feedback))
            .await?;
    Ok(Json(updated))
}

/// GET /api/v1/interviews/:id/feedback
///
/// Aggregates answered questions, stores the overall score and completes the interview.
pub async fn handle_interview_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let interview = load_interview(&state, id, params.user_id).await?;
    let questions = store::get_questions(&state.db, interview.id).await?;

    let scores = aggregate_scores(questions.iter().map(QuestionRow::sub_scores));
    store::complete_interview(&state.db, interview.id, scores.overall_score).await?;

    Ok(Json(FeedbackResponse { scores, questions }))
}
