use crate::SuffixGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic suffix generator backed by a counter.
///
/// Produces zero-padded suffixes like "00000000", "00000001", etc. When the
/// counter outgrows the requested length only the lowest digits are kept, so
/// the sequence wraps around.
///
/// Useful for fixtures and tests that need to predict the generated codes.
#[derive(Debug)]
pub struct SequentialSuffix {
    counter: AtomicU64,
}

impl Clone for SequentialSuffix {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SequentialSuffix {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator whose first suffix is `offset`.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl Default for SequentialSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixGenerator for SequentialSuffix {
    fn generate(&self, len: usize) -> String {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        let padded = format!("{count:0len$}");
        padded[padded.len() - len..].to_string()
    }
}
