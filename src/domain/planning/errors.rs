//! Planning request errors.
//!
//! Model failures are not errors at this level: planners answer with an
//! apology instead. Only malformed visitor input is refused.

use thiserror::Error;

/// Longest visitor prompt accepted, in characters.
pub const MAX_PROMPT_LENGTH: usize = 2_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("prompt is {actual} characters, limit is {max}")]
    PromptTooLong { max: usize, actual: usize },
}

impl PlanningError {
    /// Checks a visitor prompt and returns it trimmed.
    pub fn check_prompt(prompt: &str) -> Result<&str, PlanningError> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(PlanningError::EmptyPrompt);
        }
        let actual = trimmed.chars().count();
        if actual > MAX_PROMPT_LENGTH {
            return Err(PlanningError::PromptTooLong {
                max: MAX_PROMPT_LENGTH,
                actual,
            });
        }
        Ok(trimmed)
    }
}
