//! Persistence for interviews and their question records.
//!
//! Every read and write of an interview is scoped by `user_id`; a row owned by
//! someone else behaves exactly like a missing row.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::interview::feedback::GeneratedFeedback;
use crate::models::interview::{InterviewRow, InterviewStatus, QuestionRow};

pub struct NewInterview<'a> {
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub job_title: &'a str,
    pub job_description: Option<&'a str>,
    pub questions: &'a [String],
}

/// Fields a client may change. `None` leaves the stored value untouched.
#[derive(Debug, Default)]
pub struct InterviewChanges<'a> {
    pub job_title: Option<&'a str>,
    pub job_description: Option<&'a str>,
    pub status: Option<InterviewStatus>,
}

async fn insert_questions(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    interview_id: Uuid,
    questions: &[String],
) -> sqlx::Result<()> {
    for (position, question) in questions.iter().enumerate() {
        sqlx::query(
            "INSERT INTO interview_questions (id, interview_id, position, question) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(interview_id)
        .bind(position as i32)
        .bind(question)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Creates an interview in the `in-progress` state together with its questions.
pub async fn create_interview(
    pool: &PgPool,
    new: NewInterview<'_>,
) -> sqlx::Result<InterviewRow> {
    let mut tx = pool.begin().await?;

    let interview = sqlx::query_as::<_, InterviewRow>(
        r#"
        INSERT INTO interviews (id, user_id, resume_id, job_title, job_description, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.user_id)
    .bind(new.resume_id)
    .bind(new.job_title)
    .bind(new.job_description)
    .bind(InterviewStatus::InProgress.as_str())
    .fetch_one(&mut *tx)
    .await?;

    insert_questions(&mut tx, interview.id, new.questions).await?;
    tx.commit().await?;

    info!(
        "Created interview {} with {} questions for user {}",
        interview.id,
        new.questions.len(),
        new.user_id
    );
    Ok(interview)
}

/// Returns a user's interviews, newest first.
pub async fn list_interviews(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<InterviewRow>> {
    sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_interview(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> sqlx::Result<Option<InterviewRow>> {
    sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Questions of an interview in presentation order.
pub async fn get_questions(pool: &PgPool, interview_id: Uuid) -> sqlx::Result<Vec<QuestionRow>> {
    sqlx::query_as::<_, QuestionRow>(
        "SELECT * FROM interview_questions WHERE interview_id = $1 ORDER BY position",
    )
    .bind(interview_id)
    .fetch_all(pool)
    .await
}

pub async fn update_interview(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    changes: InterviewChanges<'_>,
) -> sqlx::Result<Option<InterviewRow>> {
    sqlx::query_as::<_, InterviewRow>(
        r#"
        UPDATE interviews
        SET job_title       = COALESCE($3, job_title),
            job_description = COALESCE($4, job_description),
            status          = COALESCE($5, status),
            updated_at      = now()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(changes.job_title)
    .bind(changes.job_description)
    .bind(changes.status.map(|s| s.as_str()))
    .fetch_optional(pool)
    .await
}

/// Deletes an interview and, by cascade, its questions. Returns whether a row was removed.
pub async fn delete_interview(pool: &PgPool, id: Uuid, user_id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM interviews WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Swaps the whole question set of an interview and moves it back to `in-progress`.
pub async fn replace_questions(
    pool: &PgPool,
    interview_id: Uuid,
    questions: &[String],
) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM interview_questions WHERE interview_id = $1")
        .bind(interview_id)
        .execute(&mut *tx)
        .await?;

    insert_questions(&mut tx, interview_id, questions).await?;

    sqlx::query(
        "UPDATE interviews SET status = $2, overall_score = NULL, updated_at = now() WHERE id = $1",
    )
    .bind(interview_id)
    .bind(InterviewStatus::InProgress.as_str())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    info!("Replaced questions of interview {interview_id} ({} questions)", questions.len());
    Ok(())
}

/// Stores an answer and its feedback, overwriting whatever a previous
/// submission left on the question.
pub async fn record_answer(
    pool: &PgPool,
    question_id: Uuid,
    answer: &str,
    feedback: &GeneratedFeedback,
) -> sqlx::Result<QuestionRow> {
    let mut tx = pool.begin().await?;

    let question = sqlx::query_as::<_, QuestionRow>(
        r#"
        UPDATE interview_questions
        SET answer = $2,
            feedback = $3,
            model_answer = $4,
            confidence_score = $5,
            clarity_score = $6,
            relevance_score = $7
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(question_id)
    .bind(answer)
    .bind(&feedback.combined_feedback)
    .bind(&feedback.model_answer)
    .bind(feedback.confidence_score)
    .bind(feedback.clarity_score)
    .bind(feedback.relevance_score)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE interviews SET updated_at = now() WHERE id = $1")
        .bind(question.interview_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(question)
}

/// Stores the aggregated score and marks the interview `completed`.
pub async fn complete_interview(
    pool: &PgPool,
    interview_id: Uuid,
    overall_score: i32,
) -> sqlx::Result<()> {
    sqlx::query(
        "UPDATE interviews SET overall_score = $2, status = $3, updated_at = now() WHERE id = $1",
    )
    .bind(interview_id)
    .bind(overall_score)
    .bind(InterviewStatus::Completed.as_str())
    .execute(pool)
    .await?;
    Ok(())
}
