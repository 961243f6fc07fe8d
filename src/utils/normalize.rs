//! Utterance Normalization
//!
//! Folds raw user input into the canonical form the resolver matches against.
//! Matching is substring containment on this normalized text, so keyword
//! tables only ever carry lowercase entries.

/// Normalize a raw utterance for rule matching.
///
/// Unicode-lowercases and trims surrounding whitespace. Korean keywords are
/// unaffected by case-folding; the lowercase pass exists for mixed-in Latin
/// text ("Hi", "HI" both hit the greeting rule).
///
/// # Examples
/// ```
/// use agrobuddy_core::utils::normalize::normalize_utterance;
///
/// assert_eq!(normalize_utterance("  Hi there  "), "hi there");
/// assert_eq!(normalize_utterance("안녕하세요"), "안녕하세요");
/// ```
pub fn normalize_utterance(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_latin() {
        assert_eq!(normalize_utterance("HI"), "hi");
        assert_eq!(normalize_utterance("Hello World"), "hello world");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_utterance("  물 주기  "), "물 주기");
        assert_eq!(normalize_utterance("\t안녕\n"), "안녕");
    }

    #[test]
    fn test_hangul_passes_through() {
        assert_eq!(normalize_utterance("병충해 진단"), "병충해 진단");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize_utterance(""), "");
        assert_eq!(normalize_utterance("   "), "");
    }
}
