//! Planning sessions and the prompts they send.

mod campus;
mod errors;
mod language;
mod prompts;
mod session;

pub use campus::CampusContext;
pub use errors::{PlanningError, MAX_PROMPT_LENGTH};
pub use language::Language;
pub use prompts::PromptBuilder;
pub use session::{PlanningSession, DEFAULT_HISTORY_LIMIT};
