use typed_builder::TypedBuilder;

pub const DEFAULT_PREFIX_LENGTH: usize = 3;
pub const DEFAULT_SUFFIX_LENGTH: usize = 8;
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Configures a [`SkuGenerator`][crate::SkuGenerator] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct GeneratorSettings {
    /// Number of characters of the normalized base string kept as prefix.
    #[builder(default = DEFAULT_PREFIX_LENGTH)]
    pub prefix_length: usize,
    /// Number of random digits appended after the separator.
    #[builder(default = DEFAULT_SUFFIX_LENGTH)]
    pub suffix_length: usize,
    /// Maximum number of candidates checked for uniqueness before giving up.
    ///
    /// `None` keeps retrying until a free code is found.
    #[builder(default = Some(DEFAULT_MAX_ATTEMPTS))]
    pub max_attempts: Option<usize>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.prefix_length, 3);
        assert_eq!(settings.suffix_length, 8);
        assert_eq!(settings.max_attempts, Some(100));
    }

    #[test]
    fn overrides() {
        let settings = GeneratorSettings::builder()
            .prefix_length(4)
            .suffix_length(6)
            .max_attempts(None)
            .build();
        assert_eq!(settings.prefix_length, 4);
        assert_eq!(settings.suffix_length, 6);
        assert_eq!(settings.max_attempts, None);
    }
}
