//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Planning handlers never fail on model errors; they degrade to prose.

pub mod handlers;

pub use handlers::planning::{
    LocalNewsHandler, LocalNewsQuery, LocalNewsResult, PlanItineraryCommand, PlanItineraryHandler,
    PlanItineraryResult, PlanRouteCommand, PlanRouteHandler, PlanRouteResult,
};
pub use handlers::reports::{
    ListReportsHandler, ListReportsQuery, SubmitReportCommand, SubmitReportHandler,
    SubmitReportResult, VerifyReportCommand, VerifyReportHandler,
};
