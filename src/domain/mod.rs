//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `navigation` - Coordinates, routes, landmarks, traffic and itinerary records
//! - `response` - Extraction and sanitization of model answers
//! - `planning` - Planning sessions, languages and prompt templates
//! - `reports` - Community traffic reports

pub mod foundation;
pub mod navigation;
pub mod planning;
pub mod reports;
pub mod response;
