// Prompt Builder for the interview module.
// All templates are plain text with `{placeholder}` slots filled by the
// builder functions below; nothing else should format prompts by hand.

/// Answer analysis template.
/// Replace: {job_title}, {question}, {answer}
pub const ANALYZE_ANSWER_PROMPT_TEMPLATE: &str = r#"Analyze the following interview answer for the position of {job_title}.

Question: {question}

Answer: {answer}

Provide a comprehensive, narrative analysis of the answer. Structure your response with clear sections:

**Strengths:**
- List 2-3 specific strengths of the answer, explaining why they are effective.

**Areas for Improvement:**
- Identify 2-3 areas where the answer could be enhanced, with constructive suggestions.

**Model Answer:**
Provide a detailed, well-structured model answer that demonstrates excellent response quality for this question. Include specific examples and explanations.

**Ratings:**
Rate the answer on a scale of 1-10 for each criterion, providing a brief justification for each score:
- Confidence: [score] - [brief justification]
- Clarity: [score] - [brief justification]
- Relevance: [score] - [brief justification]

Ensure the feedback is detailed, constructive, and professional, helping the candidate improve their interview skills."#;

/// Question generation template.
/// Replace: {resume_text}, {job_title}, {job_description_line}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Based on the following resume and job details, generate 5 relevant interview questions that would be asked in a real interview.
The questions should be challenging but fair, and should assess the candidate's fit for the role.
Format the questions as a numbered list, each question on a new line.

Resume Content:
{resume_text}

Job Title: {job_title}
{job_description_line}
Generate 5 interview questions:"#;

pub fn build_analysis_prompt(question: &str, answer: &str, job_title: &str) -> String {
    ANALYZE_ANSWER_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{question}", question)
        .replace("{answer}", answer)
}

/// The job description line is dropped entirely when there is no description.
pub fn build_question_prompt(
    resume_text: &str,
    job_title: &str,
    job_description: Option<&str>,
) -> String {
    let job_description_line = job_description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!("Job Description: {d}\n"))
        .unwrap_or_default();

    QUESTION_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_title}", job_title)
        .replace("{job_description_line}", &job_description_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_interpolates_all_fields() {
        let prompt = build_analysis_prompt(
            "Why Rust?",
            "Memory safety without a GC.",
            "Backend Engineer",
        );
        assert!(prompt.contains("position of Backend Engineer."));
        assert!(prompt.contains("Question: Why Rust?"));
        assert!(prompt.contains("Answer: Memory safety without a GC."));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_analysis_prompt_requests_all_sections() {
        let prompt = build_analysis_prompt("q", "a", "r");
        for heading in [
            "**Strengths:**",
            "**Areas for Improvement:**",
            "**Model Answer:**",
            "**Ratings:**",
            "- Confidence:",
            "- Clarity:",
            "- Relevance:",
        ] {
            assert!(prompt.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_question_prompt_with_description() {
        let prompt = build_question_prompt("Built a compiler.", "SRE", Some("On-call rotation."));
        assert!(prompt.contains("Resume Content:\nBuilt a compiler."));
        assert!(prompt.contains("Job Title: SRE"));
        assert!(prompt.contains("Job Description: On-call rotation."));
    }

    #[test]
    fn test_question_prompt_omits_blank_description() {
        for description in [None, Some(""), Some("   ")] {
            let prompt = build_question_prompt("cv", "SRE", description);
            assert!(!prompt.contains("Job Description"));
            assert!(!prompt.contains("{job_description_line}"));
        }
    }
}
