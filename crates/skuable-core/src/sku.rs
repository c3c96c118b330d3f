use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A generated (or caller-supplied) SKU code.
///
/// Generated codes have the shape `{prefix}{separator}{suffix}`, for example
/// `BLU-04718263`. Caller-supplied codes are kept verbatim and may have any
/// shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(SmolStr);

impl Sku {
    /// Wraps an existing code without inspecting it.
    pub fn new(code: impl Into<SmolStr>) -> Self {
        Self(code.into())
    }

    /// Builds a code from its three parts.
    pub fn compose(prefix: &str, separator: &str, suffix: &str) -> Self {
        let mut code = String::with_capacity(prefix.len() + separator.len() + suffix.len());
        code.push_str(prefix);
        code.push_str(separator);
        code.push_str(suffix);
        Self(SmolStr::from(code))
    }

    /// Splits the code at the last occurrence of `separator`.
    ///
    /// The prefix may itself contain the separator (it is derived from user
    /// data), so the suffix is always what follows the last one.
    pub fn split<'a>(&'a self, separator: &str) -> Option<(&'a str, &'a str)> {
        if separator.is_empty() {
            return None;
        }
        self.0.rsplit_once(separator)
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Sku> for String {
    fn from(value: Sku) -> Self {
        value.0.to_string()
    }
}
