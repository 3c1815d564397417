pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes",
            post(resume::handle_create_resume).get(resume::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume::handle_get_resume).delete(resume::handle_delete_resume),
        )
        // Interview API
        .route(
            "/api/v1/interviews",
            post(interview::handle_create_interview).get(interview::handle_list_interviews),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interview::handle_get_interview)
                .put(interview::handle_update_interview)
                .delete(interview::handle_delete_interview),
        )
        .route(
            "/api/v1/interviews/:id/generate-questions",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/v1/interviews/:id/answer",
            post(interview::handle_submit_answer),
        )
        .route(
            "/api/v1/interviews/:id/feedback",
            get(interview::handle_interview_feedback),
        )
        .with_state(state)
}
