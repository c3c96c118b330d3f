use clap::Parser;
use skuable_core::DEFAULT_SEPARATOR;

pub const VALUES_ENV: &str = "SKUABLE_VALUES";
pub const SEPARATOR_ENV: &str = "SKUABLE_SEPARATOR";
pub const COUNT_ENV: &str = "SKUABLE_COUNT";
pub const ALLOW_DUPLICATES_ENV: &str = "SKUABLE_ALLOW_DUPLICATES";
pub const EXISTING_ENV: &str = "SKUABLE_EXISTING";
pub const MAX_ATTEMPTS_ENV: &str = "SKUABLE_MAX_ATTEMPTS";
pub const PREFIX_LENGTH_ENV: &str = "SKUABLE_PREFIX_LENGTH";
pub const SUFFIX_LENGTH_ENV: &str = "SKUABLE_SUFFIX_LENGTH";

pub const DEFAULT_COUNT: usize = 1;

#[derive(Debug, Parser)]
#[command(name = "skuable", about = "Generate SKUs from source values")]
pub struct CLI {
    /// Source values, joined by the separator to form the base string.
    #[arg(long = "value", env = VALUES_ENV, value_delimiter = ',', required = true)]
    pub values: Vec<String>,

    #[arg(long, env = SEPARATOR_ENV, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Number of records to create.
    #[arg(long, env = COUNT_ENV, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    #[arg(long, env = ALLOW_DUPLICATES_ENV)]
    pub allow_duplicates: bool,

    /// Codes already present in the table before generation starts.
    #[arg(long = "existing", env = EXISTING_ENV, value_delimiter = ',')]
    pub existing: Vec<String>,

    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = skuable_generator::settings::DEFAULT_MAX_ATTEMPTS,
        conflicts_with = "unbounded"
    )]
    pub max_attempts: usize,

    /// Retry until a unique code is found, however long it takes.
    #[arg(long)]
    pub unbounded: bool,

    #[arg(
        long,
        env = PREFIX_LENGTH_ENV,
        default_value_t = skuable_generator::settings::DEFAULT_PREFIX_LENGTH
    )]
    pub prefix_length: usize,

    #[arg(
        long,
        env = SUFFIX_LENGTH_ENV,
        default_value_t = skuable_generator::settings::DEFAULT_SUFFIX_LENGTH
    )]
    pub suffix_length: usize,
}
