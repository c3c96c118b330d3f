use crate::digits::ShuffledDigits;
use crate::normalize;
use crate::settings::GeneratorSettings;
use crate::SuffixGenerator;
use skuable_core::{Record, Result, Sku, SkuError, SkuOptions, Skuable, SourceSpec};
use tracing::{debug, trace, warn};

/// The point of a host's save pipeline at which the generator is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The record is about to be inserted.
    Creating,
    /// An existing record is about to be updated.
    Updating,
}

/// Generates SKUs and writes them into records.
///
/// The generator holds no per-record state. Each call reads the record's
/// [`SkuOptions`], computes a code and writes it into the target field; it
/// never persists the record itself.
///
/// Note: uniqueness is only checked against records the store already
/// holds. Two records generated concurrently may both pass the check before
/// either is saved, so hosts that need a hard guarantee must also enforce a
/// unique constraint on the target column.
#[derive(Debug, Clone)]
pub struct SkuGenerator<S = ShuffledDigits> {
    settings: GeneratorSettings,
    suffixes: S,
}

impl SkuGenerator<ShuffledDigits> {
    /// Creates a generator with default settings and random suffixes.
    pub fn new() -> Self {
        Self::with_settings(GeneratorSettings::default())
    }

    pub fn with_settings(settings: GeneratorSettings) -> Self {
        Self::with_suffixes(settings, ShuffledDigits::new())
    }
}

impl Default for SkuGenerator<ShuffledDigits> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SuffixGenerator> SkuGenerator<S> {
    /// Creates a generator with a custom suffix source.
    pub fn with_suffixes(settings: GeneratorSettings, suffixes: S) -> Self {
        Self { settings, suffixes }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates a SKU for a record that is about to be created.
    ///
    /// Returns `Ok(None)` without touching the record if the model disabled
    /// generation on create.
    pub fn generate_on_create<R: Skuable>(&self, record: &mut R) -> Result<Option<Sku>> {
        let options = record.sku_options();

        if !options.generates_on_create() {
            trace!("sku generation on create is disabled");
            return Ok(None);
        }

        self.generate(record, &options).map(Some)
    }

    /// Generates a SKU for a record that is about to be updated.
    ///
    /// Returns `Ok(None)` without touching the record if the model disabled
    /// generation on update.
    pub fn generate_on_update<R: Skuable>(&self, record: &mut R) -> Result<Option<Sku>> {
        let options = record.sku_options();

        if !options.generates_on_update() {
            trace!("sku generation on update is disabled");
            return Ok(None);
        }

        self.generate(record, &options).map(Some)
    }

    /// Generates a SKU regardless of the create/update triggers.
    pub fn generate_explicit<R: Skuable>(&self, record: &mut R) -> Result<Sku> {
        let options = record.sku_options();
        self.generate(record, &options)
    }

    /// Dispatches to [`generate_on_create`](Self::generate_on_create) or
    /// [`generate_on_update`](Self::generate_on_update).
    pub fn before_save<R: Skuable>(
        &self,
        event: LifecycleEvent,
        record: &mut R,
    ) -> Result<Option<Sku>> {
        match event {
            LifecycleEvent::Creating => self.generate_on_create(record),
            LifecycleEvent::Updating => self.generate_on_update(record),
        }
    }

    /// Computes a SKU for `record` according to `options` and writes it into
    /// the target field.
    ///
    /// A value the caller put into the target field since the record was
    /// loaded is kept verbatim, without derivation or uniqueness checks.
    pub fn generate<R: Record>(&self, record: &mut R, options: &SkuOptions<R>) -> Result<Sku> {
        options.validate()?;

        let field = options.target_field();
        let snapshot = record.snapshot(field);

        let sku = match snapshot.custom_value() {
            Some(custom) => {
                debug!(field, sku = custom, "keeping custom sku");
                Sku::new(custom)
            }
            None => {
                let base = derive_base(record, options);
                let prefix = normalize::prefix(&base, self.settings.prefix_length);
                let candidate = self.candidate(&prefix, options.separator());

                if options.is_unique() {
                    self.make_unique(record, options, &prefix, candidate)?
                } else {
                    candidate
                }
            }
        };

        debug!(field, sku = %sku, "sku generated");
        record.set(field, sku.to_string());

        Ok(sku)
    }

    fn candidate(&self, prefix: &str, separator: &str) -> Sku {
        let suffix = self.suffixes.generate(self.settings.suffix_length);
        Sku::compose(prefix, separator, &suffix)
    }

    /// Regenerates the suffix until no other record holds the code.
    fn make_unique<R: Record>(
        &self,
        record: &R,
        options: &SkuOptions<R>,
        prefix: &str,
        mut candidate: Sku,
    ) -> Result<Sku> {
        let field = options.target_field();
        let key = record.key();
        let mut attempts = 1;

        while candidate.is_empty() || record.exists_other_with(field, candidate.as_str(), key)? {
            if let Some(max_attempts) = self.settings.max_attempts {
                if attempts >= max_attempts {
                    warn!(field, prefix, attempts, "gave up looking for a unique sku");
                    return Err(SkuError::UniquenessExhausted {
                        prefix: prefix.to_string(),
                        attempts,
                    });
                }
            }

            trace!(field, sku = %candidate, attempts, key = ?key, "sku already taken");
            candidate = self.candidate(prefix, options.separator());
            attempts += 1;
        }

        Ok(candidate)
    }
}

/// Builds the string the SKU prefix is taken from.
fn derive_base<R: Record>(record: &R, options: &SkuOptions<R>) -> String {
    match options.source() {
        SourceSpec::Derivation(derive) => derive(record),
        SourceSpec::Fields(fields) => fields
            .iter()
            .map(|field| record.get(field).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(options.separator()),
    }
}
