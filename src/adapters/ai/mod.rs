//! AI Provider Adapters.
//!
//! - `GeminiProvider` - Google Gemini `generateContent` REST API
//! - `MockAIProvider` - Configurable mock for tests and offline runs

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_RESPONSE};
