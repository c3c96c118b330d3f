use deunicode::deunicode_with_tofu;

/// Replacement for characters that have no ASCII transliteration.
const TOFU: &str = "?";

/// Reduces a base string to plain uppercase ASCII without whitespace.
///
/// Whitespace is removed both before and after transliteration since some
/// scripts transliterate to several space-separated syllables.
pub fn normalize(base: &str) -> String {
    let compact: String = base.chars().filter(|c| !c.is_whitespace()).collect();

    deunicode_with_tofu(&compact, TOFU)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Returns the first `len` characters of the normalized base string.
///
/// Shorter inputs yield a shorter prefix; nothing is padded.
pub fn prefix(base: &str, len: usize) -> String {
    normalize(base).chars().take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces_and_uppercases() {
        assert_eq!(normalize("Blue Widget"), "BLUEWIDGET");
        assert_eq!(prefix("Blue Widget", 3), "BLU");
    }

    #[test]
    fn strips_other_whitespace() {
        assert_eq!(prefix(" \tb\nl u", 3), "BLU");
    }

    #[test]
    fn transliterates_accents() {
        assert_eq!(prefix("Ünïcode", 3), "UNI");
        assert_eq!(prefix("crème brûlée", 5), "CREME");
    }

    #[test]
    fn transliterated_syllables_are_joined() {
        let normalized = normalize("北京");
        assert!(!normalized.contains(' '));
        assert!(normalized.is_ascii());
        assert_eq!(normalized, normalized.to_ascii_uppercase());
    }

    #[test]
    fn short_input_is_not_padded() {
        assert_eq!(prefix("ab", 3), "AB");
        assert_eq!(prefix("", 3), "");
        assert_eq!(prefix("   ", 3), "");
    }

    #[test]
    fn keeps_punctuation() {
        assert_eq!(prefix("-Widget", 3), "-WI");
        assert_eq!(prefix("a-b widget", 3), "A-B");
    }
}
