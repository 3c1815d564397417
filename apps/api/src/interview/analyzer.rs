//! Answer analysis pipeline: prompt builder → text generator → extractor.
//!
//! The generator is injected so the extractor stays a pure function and the
//! whole pipeline is testable without network access.

use tracing::debug;

use crate::errors::AppError;
use crate::interview::feedback::{extract_feedback, GeneratedFeedback};
use crate::interview::prompts::build_analysis_prompt;
use crate::llm_client::TextGenerator;

pub async fn analyze_answer(
    generator: &dyn TextGenerator,
    question: &str,
    answer: &str,
    job_title: &str,
) -> Result<GeneratedFeedback, AppError> {
    let prompt = build_analysis_prompt(question, answer, job_title);

    let narrative = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::llm("Answer analysis failed", e))?;
    debug!("Received analysis narrative ({} chars)", narrative.len());

    let feedback = extract_feedback(&narrative);
    debug!(
        confidence = feedback.confidence_score,
        clarity = feedback.clarity_score,
        relevance = feedback.relevance_score,
        "Parsed answer feedback"
    );

    Ok(feedback)
}
