//! Preview formatting for documentation text

/// Returned in place of documentation when there is nothing to show.
pub const NOT_FOUND_MESSAGE: &str = "No documentation found.";

/// Default preview budget, in characters.
pub const DEFAULT_MAX_CHARS: usize = 2000;

/// Budget used by the command line driver.
pub const DISPLAY_MAX_CHARS: usize = 5000;

/// Cut `text` down to `max_chars` characters for display.
///
/// Text within budget comes back unchanged. Longer text keeps its first
/// `max_chars` characters followed by a notice giving the original length.
/// Lengths count characters, not bytes.
pub fn format_for_display(text: &str, max_chars: usize) -> String {
    if text.is_empty() {
        return NOT_FOUND_MESSAGE.to_string();
    }

    let total = text.chars().count();
    if total > max_chars {
        let preview = take_chars(text, max_chars);
        return format!("{preview}\n\n... (truncated - total {total} characters)");
    }

    text.to_string()
}

/// Longest prefix of `text` holding at most `n` characters.
pub(crate) fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_not_found() {
        assert_eq!(format_for_display("", 0), NOT_FOUND_MESSAGE);
        assert_eq!(format_for_display("", DEFAULT_MAX_CHARS), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn text_within_budget_is_unchanged() {
        let text = "x".repeat(4000);
        assert_eq!(format_for_display(&text, DISPLAY_MAX_CHARS), text);
        assert_eq!(format_for_display("abc", 3), "abc");
    }

    #[test]
    fn long_text_is_truncated_with_total() {
        let text = "a".repeat(2500);
        let formatted = format_for_display(&text, DEFAULT_MAX_CHARS);
        assert!(formatted.starts_with(&"a".repeat(2000)));
        assert!(formatted.ends_with("... (truncated - total 2500 characters)"));
        assert_eq!(
            formatted,
            format!("{}\n\n... (truncated - total 2500 characters)", "a".repeat(2000))
        );
    }

    #[test]
    fn zero_budget_keeps_only_notice() {
        assert_eq!(
            format_for_display("hello", 0),
            "\n\n... (truncated - total 5 characters)"
        );
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "héllo wörld";
        let formatted = format_for_display(text, 2);
        assert!(formatted.starts_with("hé\n\n"));
        assert!(formatted.ends_with("total 11 characters)"));
    }

    #[test]
    fn take_chars_stops_at_end() {
        assert_eq!(take_chars("abc", 10), "abc");
        assert_eq!(take_chars("abc", 0), "");
        assert_eq!(take_chars("ñandú", 3), "ñan");
    }
}
