//! In-memory record store implementing the `skuable_core::Record` contract.

pub mod memory;

pub use memory::{MemoryRecord, MemoryTable, Row};
