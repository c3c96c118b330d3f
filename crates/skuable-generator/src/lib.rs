//! SKU generation engine.
//!
//! [`SkuGenerator`] derives a code from a record's source fields, appends a
//! numeric suffix produced by a [`SuffixGenerator`] and, when the model asks
//! for it, retries the suffix until no other record holds the same code.

pub mod digits;
pub mod engine;
pub mod normalize;
pub mod seq;
pub mod settings;

pub use digits::ShuffledDigits;
pub use engine::{LifecycleEvent, SkuGenerator};
pub use seq::SequentialSuffix;
pub use settings::GeneratorSettings;

/// Trait for generating the numeric suffix of a SKU.
///
/// Implementations are pure generators that don't interact with storage;
/// collisions are resolved by [`SkuGenerator`].
pub trait SuffixGenerator: Send + Sync + 'static {
    /// Generates a suffix of exactly `len` decimal digits.
    fn generate(&self, len: usize) -> String;
}
