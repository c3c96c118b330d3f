//! Drives the generator through a host save pipeline backed by `MemoryTable`.

use skuable_core::{Record, Sku, SkuError, SkuOptions, Skuable};
use skuable_generator::{GeneratorSettings, LifecycleEvent, SequentialSuffix, SkuGenerator};
use skuable_storage::{MemoryRecord, MemoryTable};

fn product_options() -> SkuOptions<MemoryRecord> {
    SkuOptions::new().generate_from(["name"]).save_to("sku")
}

fn seq_generator() -> SkuGenerator<SequentialSuffix> {
    SkuGenerator::with_suffixes(GeneratorSettings::default(), SequentialSuffix::new())
}

/// Mimics a host save pipeline: run the hook for the pending event, then persist.
fn save<S: skuable_generator::SuffixGenerator>(
    generator: &SkuGenerator<S>,
    record: &mut MemoryRecord,
) -> Result<u64, SkuError> {
    let event = if record.is_saved() {
        LifecycleEvent::Updating
    } else {
        LifecycleEvent::Creating
    };
    generator.before_save(event, record)?;
    Ok(record.save())
}

#[test]
fn created_records_get_distinct_codes() {
    let table = MemoryTable::new();

    let mut first = table
        .new_record(product_options())
        .with("name", "Blue Widget");
    save(&seq_generator(), &mut first).unwrap();

    // A fresh counter proposes the same first candidate again.
    let mut second = table
        .new_record(product_options())
        .with("name", "Blue Whale");
    save(&seq_generator(), &mut second).unwrap();

    assert_eq!(first.get("sku").as_deref(), Some("BLU-00000000"));
    assert_eq!(second.get("sku").as_deref(), Some("BLU-00000001"));
}

#[test]
fn update_does_not_collide_with_itself() {
    let table = MemoryTable::new();
    let mut record = table
        .new_record(product_options())
        .with("name", "Blue Widget");
    let key = save(&seq_generator(), &mut record).unwrap();

    let mut loaded = table.load(key, product_options()).unwrap();
    loaded.set("name", "Blue Widget v2".to_string());
    save(&seq_generator(), &mut loaded).unwrap();

    assert_eq!(loaded.get("sku").as_deref(), Some("BLU-00000000"));
    assert_eq!(table.row(key).unwrap()["sku"], "BLU-00000000");
}

#[test]
fn stored_code_splits_into_prefix_and_suffix() {
    let table = MemoryTable::new();
    let options = || {
        SkuOptions::new()
            .generate_from(["brand", "name"])
            .save_to("sku")
    };
    let mut record = table
        .new_record(options())
        .with("brand", "A")
        .with("name", "B Widget");
    let key = save(&SkuGenerator::new(), &mut record).unwrap();

    let loaded = table.load(key, options()).unwrap();
    let sku = Sku::new(loaded.get("sku").unwrap());
    let (prefix, suffix) = sku.split(loaded.sku_options().separator()).unwrap();

    assert_eq!(prefix, "A-B");
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()), "{sku}");
}

#[test]
fn duplicates_allowed_when_uniqueness_is_off() {
    let table = MemoryTable::new();
    let options = || product_options().allow_duplicates();

    let mut first = table.new_record(options()).with("name", "Blue Widget");
    save(&seq_generator(), &mut first).unwrap();
    let mut second = table.new_record(options()).with("name", "Blue Widget");
    save(&seq_generator(), &mut second).unwrap();

    assert_eq!(first.get("sku"), second.get("sku"));
}

#[test]
fn custom_code_survives_save() {
    let table = MemoryTable::new();
    let mut record = table
        .new_record(product_options())
        .with("name", "Blue Widget");
    let key = save(&seq_generator(), &mut record).unwrap();

    let mut loaded = table.load(key, product_options()).unwrap();
    loaded.set("sku", "SPECIAL-EDITION".to_string());
    save(&seq_generator(), &mut loaded).unwrap();

    assert_eq!(table.row(key).unwrap()["sku"], "SPECIAL-EDITION");
}

#[test]
fn custom_code_is_not_checked_for_uniqueness() {
    let table = MemoryTable::new();
    let mut first = table
        .new_record(product_options())
        .with("name", "Blue Widget");
    save(&seq_generator(), &mut first).unwrap();

    let mut second = table
        .new_record(product_options())
        .with("name", "Other")
        .with("sku", "BLU-00000000");
    save(&seq_generator(), &mut second).unwrap();

    assert_eq!(second.get("sku").as_deref(), Some("BLU-00000000"));
}

#[test]
fn update_trigger_disabled_keeps_code() {
    let table = MemoryTable::new();
    let options = || product_options().do_not_generate_on_update();
    let mut record = table.new_record(options()).with("name", "Blue Widget");
    let key = save(&seq_generator(), &mut record).unwrap();

    let mut loaded = table.load(key, options()).unwrap();
    loaded.set("name", "Red Widget".to_string());
    save(&seq_generator(), &mut loaded).unwrap();

    assert_eq!(table.row(key).unwrap()["sku"], "BLU-00000000");
    assert_eq!(table.row(key).unwrap()["name"], "Red Widget");
}

#[test]
fn misconfigured_model_fails_before_save() {
    let table = MemoryTable::new();
    let mut record = table
        .new_record(SkuOptions::new().generate_from(["name"]))
        .with("name", "Blue Widget");

    let err = save(&seq_generator(), &mut record).unwrap_err();

    assert_eq!(err, SkuError::MissingTargetField);
    assert!(table.is_empty());
}

#[test]
fn exhausted_prefix_fails_loudly() {
    let table = MemoryTable::new();
    let settings = GeneratorSettings::builder()
        .suffix_length(1)
        .max_attempts(Some(20))
        .build();

    // Ten one-digit suffixes fill the "BLU" space.
    for _ in 0..10 {
        let mut record = table
            .new_record(product_options())
            .with("name", "Blue Widget");
        save(
            &SkuGenerator::with_suffixes(settings, SequentialSuffix::new()),
            &mut record,
        )
        .unwrap();
    }

    let mut record = table
        .new_record(product_options())
        .with("name", "Blue Widget");
    let err = save(&SkuGenerator::with_settings(settings), &mut record).unwrap_err();

    assert_eq!(
        err,
        SkuError::UniquenessExhausted {
            prefix: "BLU".to_string(),
            attempts: 20,
        }
    );
    assert_eq!(table.len(), 10);
}
