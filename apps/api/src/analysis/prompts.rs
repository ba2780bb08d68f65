// Résumé analysis prompt template and the builder that fills it.

use crate::config::PromptLimits;

pub const TRUNCATION_MARKER: &str = "\n[... truncated ...]";

pub const ANALYSIS_INSTRUCTIONS: &str = "\
Please analyze this resume against the job description. Consider:
1. Key skills match
2. Experience relevance
3. Missing critical requirements
4. Suggested improvements";

/// Composes the analysis prompt. User text is inserted verbatim after
/// clamping it to the configured limits.
pub fn build_analysis_prompt(
    resume_text: &str,
    job_description: &str,
    limits: &PromptLimits,
) -> String {
    let resume = clamp_chars(resume_text.trim(), limits.max_resume_chars);
    let job_description = clamp_chars(job_description.trim(), limits.max_job_description_chars);

    let mut prompt = String::with_capacity(
        ANALYSIS_INSTRUCTIONS.len() + resume.len() + job_description.len() + 64,
    );
    prompt.push_str(ANALYSIS_INSTRUCTIONS);
    prompt.push_str("\n\nResume:\n");
    prompt.push_str(&resume);
    prompt.push_str("\n\nJob Description:\n");
    prompt.push_str(&job_description);
    prompt.push('\n');
    prompt
}

/// Cuts `text` to at most `max_chars` characters, marking the cut.
fn clamp_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{TRUNCATION_MARKER}", &text[..byte_idx]),
        None => text.to_string(),
    }
}
