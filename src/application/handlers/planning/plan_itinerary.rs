//! PlanItineraryHandler - Builds a multi-stop visit plan.

use std::sync::Arc;

use crate::domain::navigation::{Coordinate, Itinerary};
use crate::domain::planning::{CampusContext, Language, PlanningError, PlanningSession};
use crate::domain::response::{DropReport, ResponseExtractor, sanitize_itinerary_payload};
use crate::ports::AIProvider;

use super::{ITINERARY_READY_TEXT, ITINERARY_UNAVAILABLE_TEXT, NO_INTERACTIVE_ITINERARY_TEXT};

/// Command to plan an itinerary.
#[derive(Debug, Clone)]
pub struct PlanItineraryCommand {
    pub prompt: String,
    pub language: Language,
    pub origin: Option<Coordinate>,
}

/// Result of itinerary planning.
#[derive(Debug, Clone)]
pub struct PlanItineraryResult {
    pub itinerary: Itinerary,
    pub drops: DropReport,
    pub fallback: bool,
}

/// Handler for itinerary planning.
pub struct PlanItineraryHandler {
    ai_provider: Arc<dyn AIProvider>,
    campus: CampusContext,
    extractor: ResponseExtractor,
}

impl PlanItineraryHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>, campus: CampusContext) -> Self {
        Self {
            ai_provider,
            campus,
            extractor: ResponseExtractor::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: PlanItineraryCommand,
    ) -> Result<PlanItineraryResult, PlanningError> {
        let mut session = PlanningSession::new(cmd.language, self.campus.clone());
        self.handle_in_session(&mut session, &cmd.prompt, cmd.origin).await
    }

    pub async fn handle_in_session(
        &self,
        session: &mut PlanningSession,
        prompt: &str,
        origin: Option<Coordinate>,
    ) -> Result<PlanItineraryResult, PlanningError> {
        let prompt = PlanningError::check_prompt(prompt)?;
        let message = session.prompts().itinerary_prompt(prompt, origin);
        let request = session.request("itinerary", message);

        let response = match self.ai_provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    session_id = %session.id(),
                    error = %err,
                    "Itinerary planning failed, returning fallback"
                );
                return Ok(PlanItineraryResult {
                    itinerary: Itinerary::text_only(ITINERARY_UNAVAILABLE_TEXT),
                    drops: DropReport::default(),
                    fallback: true,
                });
            }
        };

        session.record_exchange(prompt, response.content.as_str());

        let extracted = self.extractor.extract(&response.content);
        let (layers, drops) = sanitize_itinerary_payload(extracted.payload.as_ref());
        if drops.total_dropped() > 0 {
            tracing::debug!(
                session_id = %session.id(),
                dropped = drops.total_dropped(),
                accepted = drops.total_accepted(),
                "Dropped invalid itinerary entries"
            );
        }

        let mut itinerary = layers.into_itinerary(extracted.prose);
        if itinerary.summary_text.is_empty() {
            itinerary.summary_text = if itinerary.has_map_layers() {
                ITINERARY_READY_TEXT
            } else {
                NO_INTERACTIVE_ITINERARY_TEXT
            }
            .to_string();
        }

        Ok(PlanItineraryResult {
            itinerary,
            drops,
            fallback: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use serde_json::json;

    fn campus() -> CampusContext {
        CampusContext::new("City Hospital", Coordinate::new(20.48, 85.87).unwrap()).unwrap()
    }

    fn command(prompt: &str) -> PlanItineraryCommand {
        PlanItineraryCommand {
            prompt: prompt.to_string(),
            language: Language::Hindi,
            origin: None,
        }
    }

    #[tokio::test]
    async fn locations_come_back_in_sequence_order() {
        let provider = MockAIProvider::new().with_fenced_json(
            "Three stops for your check-up.",
            &json!({
                "locations": [
                    {"name": "Lab", "description": "Blood test", "lat": 20.481, "lng": 85.871, "sequence": 2},
                    {"name": "Registration", "description": "Token", "lat": 20.48, "lng": 85.87, "sequence": 1},
                    {"name": "Nowhere", "description": "bad", "lat": 0, "lng": 0, "sequence": 3}
                ],
                "lines": [
                    {"name": "Walk", "start": {"lat": 20.48, "lng": 85.87}, "end": {"lat": 20.481, "lng": 85.871}, "travelTime": "3 min"}
                ]
            }),
        );
        let handler = PlanItineraryHandler::new(Arc::new(provider), campus());

        let result = handler.handle(command("check-up tour")).await.unwrap();

        let names: Vec<&str> = result
            .itinerary
            .locations
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Registration", "Lab"]);
        assert_eq!(result.itinerary.lines.len(), 1);
        assert_eq!(result.itinerary.summary_text, "Three stops for your check-up.");
        assert_eq!(result.drops.tally("locations").dropped, 1);
    }

    #[tokio::test]
    async fn provider_error_returns_apology() {
        let provider = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 });
        let handler = PlanItineraryHandler::new(Arc::new(provider), campus());

        let result = handler.handle(command("tour")).await.unwrap();

        assert!(result.fallback);
        assert_eq!(result.itinerary.summary_text, ITINERARY_UNAVAILABLE_TEXT);
    }

    #[tokio::test]
    async fn unparseable_block_keeps_full_text() {
        let raw = "Here you go\n```json\n{not json}\n```";
        let provider = MockAIProvider::new().with_response(raw);
        let handler = PlanItineraryHandler::new(Arc::new(provider), campus());

        let result = handler.handle(command("tour")).await.unwrap();

        assert_eq!(result.itinerary.summary_text, raw);
        assert!(!result.itinerary.has_map_layers());
    }

    #[tokio::test]
    async fn nothing_usable_says_no_interactive_itinerary() {
        let provider = MockAIProvider::new().with_response("```json\n[]\n```");
        let handler = PlanItineraryHandler::new(Arc::new(provider), campus());

        let result = handler.handle(command("tour")).await.unwrap();

        assert_eq!(result.itinerary.summary_text, NO_INTERACTIVE_ITINERARY_TEXT);
    }
}
