//! LocalNewsHandler - Short campus bulletin for visitors.

use std::sync::Arc;

use crate::domain::planning::{CampusContext, Language, PlanningSession};
use crate::domain::response::ResponseExtractor;
use crate::ports::AIProvider;

use super::{NEWS_EMPTY_TEXT, NEWS_UNAVAILABLE_TEXT};

#[derive(Debug, Clone)]
pub struct LocalNewsQuery {
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalNewsResult {
    pub text: String,
    pub fallback: bool,
}

pub struct LocalNewsHandler {
    ai_provider: Arc<dyn AIProvider>,
    campus: CampusContext,
    extractor: ResponseExtractor,
}

impl LocalNewsHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>, campus: CampusContext) -> Self {
        Self {
            ai_provider,
            campus,
            extractor: ResponseExtractor::new(),
        }
    }

    pub async fn handle(&self, query: LocalNewsQuery) -> LocalNewsResult {
        let session = PlanningSession::new(query.language, self.campus.clone());
        let request = session.request("news", session.prompts().news_prompt());

        match self.ai_provider.complete(request).await {
            Ok(response) => {
                // Any stray JSON block is not for display.
                let prose = self.extractor.extract(&response.content).prose;
                let text = if prose.is_empty() {
                    NEWS_EMPTY_TEXT.to_string()
                } else {
                    prose
                };
                LocalNewsResult {
                    text,
                    fallback: false,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Local news request failed, returning fallback");
                LocalNewsResult {
                    text: NEWS_UNAVAILABLE_TEXT.to_string(),
                    fallback: true,
                }
            }
        }
    }
}
