//! Adapters implementing the outbound ports: an in-memory confidential
//! store and the two time sources.

pub mod confidential_store;
pub mod time;

pub use confidential_store::InMemoryConfidentialStore;
pub use time::{ManualTimeSource, SystemTimeSource};
