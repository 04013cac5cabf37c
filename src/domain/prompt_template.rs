//! Prompt construction and extraction of the model's answer.

use crate::domain::UseCaseRequest;
use crate::domain::request::constraints_or_default;

/// Final sentence of the prompt. Models echo the prompt before answering, so the
/// answer starts after its last occurrence.
pub const TRAILING_INSTRUCTION: &str = "Use a clear and concise format with numbered use cases.";

/// Render the generation prompt. Empty constraints render as `None`.
pub fn build_prompt(domain: &str, persona: &str, pain_point: &str, constraints: &str) -> String {
    format!(
        "Generate 3 high-impact and realistic Agentic AI use cases in the {domain} domain \
         for the following user persona. Focus on solving the specific pain point within the \
         provided constraints.\n\n\
         Persona: {persona}\n\
         Pain Point: {pain_point}\n\
         Constraints: {constraints}\n\n\
         {TRAILING_INSTRUCTION}",
        constraints = constraints_or_default(constraints),
    )
}

impl UseCaseRequest {
    /// Prompt for this request.
    pub fn prompt(&self) -> String {
        build_prompt(self.domain(), self.persona(), self.pain_point(), self.constraints())
    }
}

/// Strip the echoed prompt from generated text.
///
/// Returns everything after the last [`TRAILING_INSTRUCTION`], trimmed. Text
/// without the sentence is returned whole, trimmed.
pub fn extract_use_cases(generated: &str) -> String {
    let answer = match generated.rfind(TRAILING_INSTRUCTION) {
        Some(index) => &generated[index + TRAILING_INSTRUCTION.len()..],
        None => generated,
    };
    answer.trim().to_string()
}
