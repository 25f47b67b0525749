//! HTTP adapter for route, itinerary and news planning.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::planning_routes;
