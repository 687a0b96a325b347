//! Scheme catalog and the allocation record store.

pub mod catalog;
pub mod store;
pub mod types;

pub use catalog::{DemandSchedule, SchemeCatalog, SchemeDef};
pub use store::AllocationStore;
pub use types::{AllocationId, AllocationRecord, DemandScope};
