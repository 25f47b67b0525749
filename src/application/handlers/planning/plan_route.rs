//! PlanRouteHandler - Turns a visitor's routing request into a drawable route.

use std::sync::Arc;

use crate::domain::navigation::{Coordinate, RoutePlan};
use crate::domain::planning::{CampusContext, Language, PlanningError, PlanningSession};
use crate::domain::response::{DropReport, ResponseExtractor, sanitize_route_payload};
use crate::ports::AIProvider;

use super::{NO_INTERACTIVE_ROUTE_TEXT, ROUTE_READY_TEXT, ROUTE_UNAVAILABLE_TEXT};

/// Command to plan a route.
#[derive(Debug, Clone)]
pub struct PlanRouteCommand {
    pub prompt: String,
    pub language: Language,
    /// Where the visitor is, if they shared it.
    pub origin: Option<Coordinate>,
}

/// Result of route planning.
#[derive(Debug, Clone)]
pub struct PlanRouteResult {
    pub plan: RoutePlan,
    pub drops: DropReport,
    /// True when the model could not be reached and an apology was returned.
    pub fallback: bool,
}

/// Handler for route planning.
pub struct PlanRouteHandler {
    ai_provider: Arc<dyn AIProvider>,
    campus: CampusContext,
    extractor: ResponseExtractor,
}

impl PlanRouteHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>, campus: CampusContext) -> Self {
        Self {
            ai_provider,
            campus,
            extractor: ResponseExtractor::new(),
        }
    }

    /// Plans a route in a fresh single-turn session.
    pub async fn handle(&self, cmd: PlanRouteCommand) -> Result<PlanRouteResult, PlanningError> {
        let mut session = PlanningSession::new(cmd.language, self.campus.clone());
        self.handle_in_session(&mut session, &cmd.prompt, cmd.origin).await
    }

    /// Plans a route as the next turn of an existing session.
    pub async fn handle_in_session(
        &self,
        session: &mut PlanningSession,
        prompt: &str,
        origin: Option<Coordinate>,
    ) -> Result<PlanRouteResult, PlanningError> {
        let prompt = PlanningError::check_prompt(prompt)?;
        let message = session.prompts().route_prompt(prompt, origin);
        let request = session.request("route", message);

        let response = match self.ai_provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    session_id = %session.id(),
                    error = %err,
                    "Route planning failed, returning fallback"
                );
                return Ok(PlanRouteResult {
                    plan: RoutePlan::text_only(ROUTE_UNAVAILABLE_TEXT),
                    drops: DropReport::default(),
                    fallback: true,
                });
            }
        };

        session.record_exchange(prompt, response.content.as_str());

        let extracted = self.extractor.extract(&response.content);
        let (layers, drops) = sanitize_route_payload(extracted.payload.as_ref());
        if drops.total_dropped() > 0 {
            tracing::debug!(
                session_id = %session.id(),
                dropped = drops.total_dropped(),
                accepted = drops.total_accepted(),
                "Dropped invalid route entries"
            );
        }

        let mut plan = layers.into_plan(extracted.prose);
        if plan.text.is_empty() {
            plan.text = if plan.has_map_layers() {
                ROUTE_READY_TEXT
            } else {
                NO_INTERACTIVE_ROUTE_TEXT
            }
            .to_string();
        }

        Ok(PlanRouteResult {
            plan,
            drops,
            fallback: false,
        })
    }
}
