//! List rendering
//!
//! Trait lists print as a bracketed, quoted literal:
//! `['flight', 'x-ray vision']`. Labels containing a single quote (and no
//! double quote) switch to double quotes, the same way the labels read when
//! typed by hand.

/// Render a slice of labels as a quoted list literal
pub fn render_list<S: AsRef<str>>(labels: &[S]) -> String {
    let items: Vec<String> = labels.iter().map(|l| quote_label(l.as_ref())).collect();
    format!("[{}]", items.join(", "))
}

/// Quote a single label, escaping backslashes, the active quote and control whitespace
pub fn quote_label(label: &str) -> String {
    let quote = if label.contains('\'') && !label.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(label.len() + 2);
    out.push(quote);
    for c in label.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(render_list(&empty), "[]");
    }

    #[test]
    fn test_render_single() {
        assert_eq!(render_list(&["flight"]), "['flight']");
    }

    #[test]
    fn test_render_many_keeps_order() {
        assert_eq!(
            render_list(&["flight", "x-ray vision", "insane speed"]),
            "['flight', 'x-ray vision', 'insane speed']"
        );
    }

    #[test]
    fn test_render_empty_label() {
        assert_eq!(render_list(&["flight", ""]), "['flight', '']");
    }

    #[test]
    fn test_quote_apostrophe_switches_to_double() {
        assert_eq!(quote_label("it's"), "\"it's\"");
    }

    #[test]
    fn test_quote_both_quotes_escapes_single() {
        assert_eq!(quote_label("it's \"x\""), "'it\\'s \"x\"'");
    }

    #[test]
    fn test_quote_escapes_backslash_and_newline() {
        assert_eq!(quote_label("a\\b\nc"), "'a\\\\b\\nc'");
    }
}
