//! HTTP adapter - REST and WebSocket surface over the application handlers.

pub mod error;
pub mod planning;
pub mod reports;
mod router;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_routes, app_router};
pub use state::AppState;
