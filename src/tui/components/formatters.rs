// Text formatters
//
// Shared helpers for fitting text into fixed-width card cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `width` display columns, ending in "…" when cut
///
/// Measures display width, not bytes, so names with accents or CJK
/// characters line up with the card border.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// "1 random user" / "3 random users"
pub fn pluralize(count: u16, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Liam", 10), "Liam");
        assert_eq!(truncate("Liam", 4), "Liam");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("liam.walker@example.com", 10), "liam.walk…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn wide_characters_count_double() {
        // Each CJK character is two columns wide
        assert_eq!(truncate("山田太郎", 5), "山田…");
        assert!(truncate("山田太郎", 5).width() <= 5);
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(pluralize(1, "random user"), "1 random user");
        assert_eq!(pluralize(12, "random user"), "12 random users");
    }
}
