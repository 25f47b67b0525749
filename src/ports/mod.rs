//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - hosted generative model used for planning and report
//!   classification
//! - `TrafficReportStore` - community traffic report persistence and live feed

mod ai_provider;
mod traffic_report_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use traffic_report_store::{ReportSnapshotStream, ReportStoreError, TrafficReportStore};
