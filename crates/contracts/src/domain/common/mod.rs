//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod id_generator;

// Re-exports
pub use aggregate_root::{find_by_id, resolve_name, unknown_placeholder, AggregateRoot, EntityId};
pub use id_generator::IdGenerator;
