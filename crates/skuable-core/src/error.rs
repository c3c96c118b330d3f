use thiserror::Error;

/// Result type for SKU generation.
pub type Result<T> = std::result::Result<T, SkuError>;

/// Failures reported by the record store behind a [`Record`][crate::Record].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("record store query failed: {0}")]
    Query(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SkuError {
    #[error("could not determine which fields should be used to build the sku")]
    MissingSourceFields,
    #[error("could not determine in which field the sku should be saved")]
    MissingTargetField,
    #[error("no unique sku found for prefix '{prefix}' after {attempts} attempts")]
    UniquenessExhausted { prefix: String, attempts: usize },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
