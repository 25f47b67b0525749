//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Gemini REST client and a scriptable mock
//! - `reports` - In-memory traffic report store with a live feed
//! - `http` - Axum REST/WebSocket surface

pub mod ai;
pub mod http;
pub mod reports;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use http::{app_router, AppState};
pub use reports::InMemoryTrafficReportStore;
