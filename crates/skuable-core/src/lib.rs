//! Core types and traits for SKU generation.
//!
//! This crate provides the record contract a host model layer implements,
//! the per-model [`SkuOptions`], the [`Sku`] value type and the error types
//! shared by the generator and the storage backends.

pub mod error;
pub mod options;
pub mod record;
pub mod sku;

pub use error::{Result, SkuError, StoreError};
pub use options::{Derivation, SkuOptions, SourceSpec, DEFAULT_SEPARATOR};
pub use record::{FieldSnapshot, Record, Skuable};
pub use sku::Sku;
