use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncate `text` to `max_width` display columns, ending with `...` when cut.
///
/// # Examples
/// ```
/// use tally_core::utils::text::truncate_text;
/// assert_eq!(truncate_text("Globex Corporation", 9), "Globex...");
/// ```
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    if max_width <= ELLIPSIS.len() {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ELLIPSIS.len();
    let mut result = String::with_capacity(max_width);
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

/// Wrap text to `max_width` display columns, breaking at word boundaries.
/// Words wider than a line are split.
///
/// # Examples
/// ```
/// use tally_core::utils::text::wrap_text;
/// let wrapped = wrap_text("net 30 payment terms apply", 12);
/// assert_eq!(wrapped, vec!["net 30", "payment", "terms apply"]);
/// ```
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current_line.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= max_width {
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
            current_width = needed;
            continue;
        }

        if !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if word_width <= max_width {
            current_line.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            current_line.push(ch);
            current_width += ch_width;
        }
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Acme", 10), "Acme");
        assert_eq!(truncate_text("Hello World!", 8), "Hello...");
        assert_eq!(truncate_text("", 5), "");
        assert_eq!(truncate_text("Initech", 2), "..");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // each character is two columns wide
        assert_eq!(truncate_text("請求書の一覧", 7), "請求...");
    }

    #[test]
    fn test_wrap_text() {
        let wrapped = wrap_text("This is a long text that needs wrapping", 10);
        assert_eq!(wrapped, vec!["This is a", "long text", "that needs", "wrapping"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let wrapped = wrap_text("superlongword", 5);
        assert_eq!(wrapped, vec!["super", "longw", "ord"]);
    }
}
