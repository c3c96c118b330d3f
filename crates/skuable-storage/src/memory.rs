use dashmap::DashMap;
use skuable_core::{Record, SkuOptions, Skuable, StoreError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// A stored row: field name to value.
pub type Row = BTreeMap<String, String>;

/// In-memory table of rows keyed by an auto-incremented id.
///
/// Cloning the table is cheap and every clone shares the same rows, so a
/// [`MemoryRecord`] can keep a handle to the table it belongs to.
#[derive(Debug, Clone)]
pub struct MemoryTable {
    rows: Arc<DashMap<u64, Row>>,
    next_key: Arc<AtomicU64>,
}

impl MemoryTable {
    /// Creates a new, empty table. The first key handed out is `1`.
    pub fn new() -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            next_key: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Creates a new table with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Arc::new(DashMap::with_capacity(capacity)),
            next_key: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Inserts a row directly, bypassing any SKU generation, and returns its key.
    pub fn insert_row(&self, row: Row) -> u64 {
        let key = self.next_key.fetch_add(1, Ordering::SeqCst);
        self.rows.insert(key, row);
        key
    }

    pub fn row(&self, key: u64) -> Option<Row> {
        self.rows.get(&key).map(|row| row.value().clone())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checks whether a row other than `excluding` holds `value` in `field`.
    pub fn exists_other_with(&self, field: &str, value: &str, excluding: Option<u64>) -> bool {
        self.rows.iter().any(|entry| {
            Some(*entry.key()) != excluding
                && entry.value().get(field).is_some_and(|v| v == value)
        })
    }

    /// Starts a new, unsaved record in this table.
    pub fn new_record(&self, options: SkuOptions<MemoryRecord>) -> MemoryRecord {
        MemoryRecord {
            table: self.clone(),
            key: None,
            fields: Row::new(),
            original: Row::new(),
            options,
        }
    }

    /// Loads a saved record. Returns `None` if no row has the given key.
    pub fn load(&self, key: u64, options: SkuOptions<MemoryRecord>) -> Option<MemoryRecord> {
        let row = self.row(key)?;

        Some(MemoryRecord {
            table: self.clone(),
            key: Some(key),
            fields: row.clone(),
            original: row,
            options,
        })
    }

    fn write(&self, key: u64, row: Row) {
        self.rows.insert(key, row);
    }

    fn allocate_key(&self) -> u64 {
        self.next_key.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self::new()
    }
}

/// A record of a [`MemoryTable`], saved or not.
///
/// Tracks the values its fields held when it was last loaded or saved, which
/// is what [`Record::original`] reports.
#[derive(Debug, Clone)]
pub struct MemoryRecord {
    table: MemoryTable,
    key: Option<u64>,
    fields: Row,
    original: Row,
    options: SkuOptions<MemoryRecord>,
}

impl MemoryRecord {
    /// Sets a field, builder style.
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Removes a field.
    pub fn unset(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn is_saved(&self) -> bool {
        self.key.is_some()
    }

    /// Writes the record to its table, assigning a key on first save.
    pub fn save(&mut self) -> u64 {
        let key = match self.key {
            Some(key) => key,
            None => {
                let key = self.table.allocate_key();
                self.key = Some(key);
                key
            }
        };

        self.table.write(key, self.fields.clone());
        self.original = self.fields.clone();
        debug!(key, "record saved");

        key
    }
}

impl Record for MemoryRecord {
    type Key = u64;

    fn get(&self, field: &str) -> Option<String> {
        self.fields.get(field).cloned()
    }

    fn set(&mut self, field: &str, value: String) {
        self.fields.insert(field.to_string(), value);
    }

    fn key(&self) -> Option<&u64> {
        self.key.as_ref()
    }

    fn original(&self, field: &str) -> Option<String> {
        self.original.get(field).cloned()
    }

    fn exists_other_with(
        &self,
        field: &str,
        value: &str,
        excluding: Option<&u64>,
    ) -> Result<bool, StoreError> {
        let exists = self.table.exists_other_with(field, value, excluding.copied());
        trace!(field, value, exists, "checked for other records");
        Ok(exists)
    }
}

impl Skuable for MemoryRecord {
    fn sku_options(&self) -> SkuOptions<Self> {
        self.options.clone()
    }
}
