//! Infrastructure Layer
//!
//! Runtime plumbing around the pure domain layer.
//!
//! - `table_store` - swappable factor table snapshots for hot reload

pub mod table_store;

pub use table_store::FactorTableStore;
