//! Campus Navigator - hospital campus wayfinding backend
//!
//! Visitors ask for routes, visit itineraries or campus news in plain
//! language. A hosted model answers in prose plus a fenced JSON block; this
//! crate extracts that block and sanitizes every coordinate-bearing record
//! before anything reaches a map. A small community traffic-report board
//! rides alongside.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
