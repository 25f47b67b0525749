//! HTTP adapter for the community traffic report board.

pub mod dto;
pub mod handlers;
pub mod live;
pub mod routes;

pub use routes::report_routes;
