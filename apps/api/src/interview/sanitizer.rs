//! Input sanitizer — rejects markup that could be injected into prompts or rendered output,
//! and bounds the length of free-text answers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters kept from a free-text answer.
pub const MAX_INPUT_CHARS: usize = 1000;

static UNSAFE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)<\s*script",
        r"(?i)<\s*img",
        r"(?i)<\s*iframe",
        r"(?i)onerror\s*=",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("unsafe-input pattern must compile"))
    .collect()
});

/// Returns `false` if the text contains an opening `script`, `img` or `iframe` tag
/// (whitespace allowed after `<`) or an `onerror=` attribute. Case-insensitive.
pub fn is_safe(text: &str) -> bool {
    !UNSAFE_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Trims surrounding whitespace and keeps at most `MAX_INPUT_CHARS` characters.
///
/// A cut that lands on whitespace is trimmed again so that sanitizing twice is a no-op.
pub fn sanitize(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(MAX_INPUT_CHARS) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_safe() {
        assert!(is_safe("I led a migration of 40 services to Kubernetes."));
        assert!(is_safe(""));
        assert!(is_safe("a < b and c > d"));
    }

    #[test]
    fn test_script_tag_rejected() {
        assert!(!is_safe("<script>alert(1)</script>"));
        assert!(!is_safe("hello <SCRIPT src=x>"));
    }

    #[test]
    fn test_tags_with_interior_whitespace_rejected() {
        assert!(!is_safe("<  script>"));
        assert!(!is_safe("< img src=x>"));
        assert!(!is_safe("<\tIFrame src=evil>"));
    }

    #[test]
    fn test_img_and_iframe_rejected() {
        assert!(!is_safe("<img src=x>"));
        assert!(!is_safe("<iframe></iframe>"));
    }

    #[test]
    fn test_onerror_attribute_rejected() {
        assert!(!is_safe("x onerror=alert(1)"));
        assert!(!is_safe("x ONERROR = alert(1)"));
    }

    #[test]
    fn test_mentions_without_markup_are_safe() {
        assert!(is_safe("I wrote a script to resize every img in the iframe"));
        assert!(is_safe("we log onerror callbacks"));
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize("  answer \n"), "answer");
    }

    #[test]
    fn test_sanitize_truncates_to_limit() {
        let long = "a".repeat(MAX_INPUT_CHARS + 250);
        let out = sanitize(&long);
        assert_eq!(out.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_sanitize_counts_characters_not_bytes() {
        let long = "é".repeat(MAX_INPUT_CHARS + 1);
        let out = sanitize(&long);
        assert_eq!(out.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_sanitize_cut_on_whitespace_stays_stable() {
        // 200 * "word " is exactly the limit and ends in a space.
        let text = "word ".repeat(300);
        let out = sanitize(&text);
        assert!(!out.ends_with(' '));
        assert_eq!(sanitize(&out), out);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let samples = [
            String::new(),
            "   padded   ".to_string(),
            format!("  {}  ", "word ".repeat(400)),
            "x".repeat(MAX_INPUT_CHARS),
        ];
        for s in &samples {
            let once = sanitize(s);
            assert!(once.chars().count() <= MAX_INPUT_CHARS);
            assert_eq!(sanitize(&once), once);
        }
    }
}
