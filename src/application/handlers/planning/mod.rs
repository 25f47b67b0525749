//! Planning handlers.
//!
//! Route, itinerary and news requests. Each one degrades to a prose
//! answer when the model is unreachable or returns nothing drawable.

mod local_news;
mod plan_itinerary;
mod plan_route;

pub use local_news::{LocalNewsHandler, LocalNewsQuery, LocalNewsResult};
pub use plan_itinerary::{PlanItineraryCommand, PlanItineraryHandler, PlanItineraryResult};
pub use plan_route::{PlanRouteCommand, PlanRouteHandler, PlanRouteResult};

pub const ROUTE_UNAVAILABLE_TEXT: &str =
    "Sorry, I can't reach the navigation service right now. Please try again in a moment or ask at the nearest help desk.";
pub const NO_INTERACTIVE_ROUTE_TEXT: &str =
    "I could not generate an interactive route for that request. Please try rephrasing it.";
pub const ROUTE_READY_TEXT: &str = "Your route is shown on the map.";

pub const ITINERARY_UNAVAILABLE_TEXT: &str =
    "Sorry, I can't plan your visit right now. Please try again in a moment.";
pub const NO_INTERACTIVE_ITINERARY_TEXT: &str =
    "I could not generate an interactive itinerary for that request. Please try rephrasing it.";
pub const ITINERARY_READY_TEXT: &str = "Your itinerary is shown on the map.";

pub const NEWS_UNAVAILABLE_TEXT: &str =
    "Campus updates are unavailable right now. Please check the notice boards at the main entrance.";
pub const NEWS_EMPTY_TEXT: &str = "No campus updates right now.";
