use crate::error::{Result, SkuError};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_SEPARATOR: &str = "-";

/// A function deriving the base string of a SKU from a record.
pub type Derivation<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Where the base string of a SKU comes from.
pub enum SourceSpec<R> {
    /// Current values of the named fields, in order, joined by the separator.
    Fields(Vec<String>),
    /// A custom function of the record.
    Derivation(Derivation<R>),
}

impl<R> Clone for SourceSpec<R> {
    fn clone(&self) -> Self {
        match self {
            SourceSpec::Fields(fields) => SourceSpec::Fields(fields.clone()),
            SourceSpec::Derivation(f) => SourceSpec::Derivation(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for SourceSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            SourceSpec::Derivation(_) => f.write_str("Derivation(..)"),
        }
    }
}

/// Per-model configuration of SKU generation.
///
/// Options are assembled with consuming setters and are not validated until
/// generation time, so a model can build them up incrementally:
///
/// ```ignore
/// let options = SkuOptions::new()
///     .generate_from(["name"])
///     .save_to("sku")
///     .using_separator("/");
/// ```
pub struct SkuOptions<R> {
    source: SourceSpec<R>,
    target_field: String,
    unique: bool,
    generate_on_create: bool,
    generate_on_update: bool,
    separator: String,
}

impl<R> SkuOptions<R> {
    pub fn new() -> Self {
        Self {
            source: SourceSpec::Fields(Vec::new()),
            target_field: String::new(),
            unique: true,
            generate_on_create: true,
            generate_on_update: true,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Derives the base string from the given fields, in order.
    pub fn generate_from<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = SourceSpec::Fields(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Derives the base string with a custom function.
    pub fn generate_with<F>(mut self, derivation: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        self.source = SourceSpec::Derivation(Arc::new(derivation));
        self
    }

    /// Sets the field the SKU is written to.
    pub fn save_to(mut self, field: impl Into<String>) -> Self {
        self.target_field = field.into();
        self
    }

    /// Skips the uniqueness check against other records.
    pub fn allow_duplicates(mut self) -> Self {
        self.unique = false;
        self
    }

    pub fn do_not_generate_on_create(mut self) -> Self {
        self.generate_on_create = false;
        self
    }

    pub fn do_not_generate_on_update(mut self) -> Self {
        self.generate_on_update = false;
        self
    }

    pub fn using_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn source(&self) -> &SourceSpec<R> {
        &self.source
    }

    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn generates_on_create(&self) -> bool {
        self.generate_on_create
    }

    pub fn generates_on_update(&self) -> bool {
        self.generate_on_update
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Checks that the options are complete enough to generate a SKU.
    pub fn validate(&self) -> Result<()> {
        if let SourceSpec::Fields(fields) = &self.source {
            if fields.is_empty() {
                return Err(SkuError::MissingSourceFields);
            }
        }

        if self.target_field.is_empty() {
            return Err(SkuError::MissingTargetField);
        }

        Ok(())
    }
}

impl<R> Default for SkuOptions<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for SkuOptions<R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            target_field: self.target_field.clone(),
            unique: self.unique,
            generate_on_create: self.generate_on_create,
            generate_on_update: self.generate_on_update,
            separator: self.separator.clone(),
        }
    }
}

impl<R> fmt::Debug for SkuOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkuOptions")
            .field("source", &self.source)
            .field("target_field", &self.target_field)
            .field("unique", &self.unique)
            .field("generate_on_create", &self.generate_on_create)
            .field("generate_on_update", &self.generate_on_update)
            .field("separator", &self.separator)
            .finish()
    }
}
