//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::application::{
    ListReportsHandler, LocalNewsHandler, PlanItineraryHandler, PlanRouteHandler,
    SubmitReportHandler, VerifyReportHandler,
};
use crate::domain::planning::CampusContext;
use crate::ports::{AIProvider, TrafficReportStore};

/// Dependencies every request handler is built from.
///
/// Cloned per request; the ports are Arc-wrapped so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub report_store: Arc<dyn TrafficReportStore>,
    pub campus: CampusContext,
}

impl AppState {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        report_store: Arc<dyn TrafficReportStore>,
        campus: CampusContext,
    ) -> Self {
        Self {
            ai_provider,
            report_store,
            campus,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn plan_route_handler(&self) -> PlanRouteHandler {
        PlanRouteHandler::new(self.ai_provider.clone(), self.campus.clone())
    }

    pub fn plan_itinerary_handler(&self) -> PlanItineraryHandler {
        PlanItineraryHandler::new(self.ai_provider.clone(), self.campus.clone())
    }

    pub fn local_news_handler(&self) -> LocalNewsHandler {
        LocalNewsHandler::new(self.ai_provider.clone(), self.campus.clone())
    }

    pub fn submit_report_handler(&self) -> SubmitReportHandler {
        SubmitReportHandler::new(
            self.ai_provider.clone(),
            self.report_store.clone(),
            self.campus.clone(),
        )
    }

    pub fn list_reports_handler(&self) -> ListReportsHandler {
        ListReportsHandler::new(self.report_store.clone())
    }

    pub fn verify_report_handler(&self) -> VerifyReportHandler {
        VerifyReportHandler::new(self.report_store.clone())
    }
}
