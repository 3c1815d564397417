//! Interview question generation: one opaque text-generation call, then a
//! line filter over whatever list the model produced.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::prompts::build_question_prompt;
use crate::llm_client::TextGenerator;

pub const MAX_QUESTIONS: usize = 5;

/// Served when the provider is rate limiting us, so an interview can still start.
pub const FALLBACK_QUESTIONS: [&str; MAX_QUESTIONS] = [
    "Can you tell me about your experience with this role?",
    "What are your strengths and weaknesses?",
    "Why are you interested in this position?",
    "Describe a challenging project you've worked on.",
    "Where do you see yourself in 5 years?",
];

static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("numbering pattern is valid"));

/// Keeps lines that look like questions or numbered items, strips the
/// numbering, and caps the list at [`MAX_QUESTIONS`].
pub fn parse_question_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| {
            !line.trim().is_empty() && (line.contains('?') || NUMBERED_RE.is_match(line))
        })
        .map(|line| NUMBERED_RE.replace(line, "").trim().to_string())
        .filter(|q| !q.is_empty())
        .take(MAX_QUESTIONS)
        .collect()
}

pub async fn generate_questions(
    generator: &dyn TextGenerator,
    resume_text: &str,
    job_title: &str,
    job_description: Option<&str>,
) -> Result<Vec<String>, AppError> {
    let prompt = build_question_prompt(resume_text, job_title, job_description);

    let text = match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) if e.is_rate_limited() => {
            warn!("Question generation rate limited ({e}), using fallback questions");
            return Ok(FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect());
        }
        Err(e) => return Err(AppError::llm("Question generation failed", e)),
    };

    let questions = parse_question_list(&text);
    if questions.is_empty() {
        return Err(AppError::Llm(
            "Question generation returned no recognisable questions".to_string(),
        ));
    }

    info!("Generated {} interview questions for '{job_title}'", questions.len());
    Ok(questions)
}
