mod cli;

use crate::cli::CLI;
use clap::Parser;
use skuable_core::SkuOptions;
use skuable_generator::{GeneratorSettings, SkuGenerator};
use skuable_storage::{MemoryRecord, MemoryTable, Row};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SKU_FIELD: &str = "sku";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = CLI::try_parse()?;

    info!(
        values = ?config.values,
        separator = %config.separator,
        count = config.count,
        existing = config.existing.len(),
        "generating skus"
    );

    let table = MemoryTable::with_capacity(config.existing.len() + config.count);
    for code in &config.existing {
        table.insert_row(Row::from([(SKU_FIELD.to_string(), code.clone())]));
    }

    let settings = GeneratorSettings::builder()
        .prefix_length(config.prefix_length)
        .suffix_length(config.suffix_length)
        .max_attempts((!config.unbounded).then_some(config.max_attempts))
        .build();
    let generator = SkuGenerator::with_settings(settings);

    let fields: Vec<String> = (0..config.values.len())
        .map(|i| format!("value{i}"))
        .collect();
    let options = source_options(&fields, &config);

    for _ in 0..config.count {
        let mut record = fields
            .iter()
            .zip(&config.values)
            .fold(table.new_record(options.clone()), |record, (field, value)| {
                record.with(field, value.clone())
            });

        let sku = generator.generate_on_create(&mut record)?;
        record.save();

        if let Some(sku) = sku {
            println!("{sku}");
        }
    }

    Ok(())
}

fn source_options(fields: &[String], config: &CLI) -> SkuOptions<MemoryRecord> {
    let options = SkuOptions::new()
        .generate_from(fields.iter().cloned())
        .save_to(SKU_FIELD)
        .using_separator(config.separator.as_str());

    if config.allow_duplicates {
        options.allow_duplicates()
    } else {
        options
    }
}
