//! Navigation records produced from AI answers.
//!
//! Each record has a sanitizing constructor (`parse` / `from_value`) and a
//! matching type guard (`is_*`). All of them apply the same strict
//! coordinate rule, so a record accepted here is safe to plot.

mod coordinate;
mod fields;
mod itinerary;
mod plan;
mod rejection;
mod route;

pub use coordinate::{is_coordinate, validate_coordinate, Coordinate, MAX_LATITUDE, MAX_LONGITUDE};
pub use fields::{coerce_integer, coerce_number};
pub use itinerary::{
    is_itinerary_location, is_itinerary_route, sort_by_sequence, ItineraryLocation,
    ItineraryRoute,
};
pub use plan::{Itinerary, RoutePlan};
pub use rejection::Rejection;
pub use route::{
    is_landmark, is_route_step, is_traffic_segment, Landmark, RouteStep, TrafficLevel,
    TrafficSegment,
};

pub(crate) use fields::{
    optional_integer, optional_text, require_label, require_object, require_text,
};
