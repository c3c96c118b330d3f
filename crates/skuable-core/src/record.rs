use crate::error::StoreError;
use crate::options::SkuOptions;
use std::fmt::Debug;

/// The two values of a field that matter for custom-code detection: what it
/// held when the record was last loaded or saved, and what it holds now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub loaded: Option<String>,
    pub current: Option<String>,
}

impl FieldSnapshot {
    /// Returns `true` if the field was changed since the record was loaded.
    pub fn is_dirty(&self) -> bool {
        self.loaded != self.current
    }

    /// Returns the value a caller put into the field since it was loaded.
    ///
    /// A field that was cleared (unset or set to an empty string) does not
    /// count as custom.
    pub fn custom_value(&self) -> Option<&str> {
        if !self.is_dirty() {
            return None;
        }
        self.current.as_deref().filter(|value| !value.is_empty())
    }
}

/// A host-owned record the generator reads from and writes the code into.
///
/// Fields are addressed by name and exchanged as strings. The generator never
/// persists a record; it only calls [`Record::set`] on the target field.
pub trait Record {
    /// The primary key type of the underlying table.
    type Key: Debug;

    /// Returns the current value of a field, or `None` if it is unset.
    fn get(&self, field: &str) -> Option<String>;

    /// Writes a field in memory.
    fn set(&mut self, field: &str, value: String);

    /// Returns the primary key, or `None` for a record that was never saved.
    fn key(&self) -> Option<&Self::Key>;

    /// Returns the value a field held when the record was last loaded or saved.
    fn original(&self, field: &str) -> Option<String>;

    /// Checks whether any *other* record in the same table holds `value` in
    /// `field`. The record identified by `excluding` is ignored; `None`
    /// excludes nothing.
    fn exists_other_with(
        &self,
        field: &str,
        value: &str,
        excluding: Option<&Self::Key>,
    ) -> Result<bool, StoreError>;

    /// Returns the loaded and current values of a field.
    fn snapshot(&self, field: &str) -> FieldSnapshot {
        FieldSnapshot {
            loaded: self.original(field),
            current: self.get(field),
        }
    }
}

/// A record type that carries its own SKU configuration.
pub trait Skuable: Record + Sized {
    /// Returns the options used to generate this record's SKU.
    fn sku_options(&self) -> SkuOptions<Self>;
}
