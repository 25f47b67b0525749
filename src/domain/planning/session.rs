//! Planning session - one visitor conversation with the campus guide.

use crate::domain::foundation::PlanningSessionId;
use crate::ports::{CompletionRequest, Message, MessageRole, RequestMetadata};

use super::{CampusContext, Language, PromptBuilder};

/// Messages retained by default (user and assistant turns combined).
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Conversation state for a visitor.
///
/// Language and campus are fixed at construction; only the history
/// changes. History is capped, dropping the oldest exchange first.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    id: PlanningSessionId,
    language: Language,
    campus: CampusContext,
    history: Vec<Message>,
    history_limit: usize,
}

impl PlanningSession {
    pub fn new(language: Language, campus: CampusContext) -> Self {
        Self {
            id: PlanningSessionId::new(),
            language,
            campus,
            history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Overrides the history cap. Rounded up to a whole exchange.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        let limit = limit.max(2);
        self.history_limit = limit + limit % 2;
        self.trim_history();
        self
    }

    pub fn id(&self) -> PlanningSessionId {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn campus(&self) -> &CampusContext {
        &self.campus
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn prompts(&self) -> PromptBuilder<'_> {
        PromptBuilder::new(&self.campus, self.language)
    }

    /// Builds a request carrying the system prompt, prior turns and the
    /// new user message. Does not record anything.
    pub fn request(&self, purpose: &'static str, user_message: impl Into<String>) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::for_session(self.id, purpose))
            .with_system_prompt(self.prompts().system_prompt())
            .with_messages(self.history.iter().cloned())
            .with_message(MessageRole::User, user_message)
    }

    /// Records a completed exchange.
    pub fn record_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.history.push(Message::user(user));
        self.history.push(Message::assistant(assistant));
        self.trim_history();
    }

    fn trim_history(&mut self) {
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
    }
}
