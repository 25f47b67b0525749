//! Traffic report store adapters.

mod in_memory;

pub use in_memory::{InMemoryTrafficReportStore, DEFAULT_SNAPSHOT_SIZE};
