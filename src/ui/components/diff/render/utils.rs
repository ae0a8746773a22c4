pub const NBSP: char = '\u{a0}';

pub const NO_DIFFERENCES: &str = "Nenhuma diferença encontrada.";

/// Replaces every space with a non-breaking one so runs of spaces survive
/// layout. Empty content becomes a single marker to keep the line's height.
pub fn display_content(content: &str) -> String {
    if content.is_empty() {
        return NBSP.to_string();
    }
    content.replace(' ', "\u{a0}")
}

/// Escapes markup-significant characters. Non-breaking spaces are written as
/// entities so the output stays readable.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            NBSP => result.push_str("&nbsp;"),
            _ => result.push(c),
        }
    }
    result
}

pub fn removals_text(count: u64) -> String {
    format!("{count} removals")
}

pub fn additions_text(count: u64) -> String {
    format!("{count} additions")
}

pub fn changes_text(count: u64) -> String {
    format!("{count} changes")
}

pub fn line_count_text(count: u64) -> String {
    format!("{count} linhas")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_nbsp_one_to_one() {
        let shown = display_content("  a b  ");
        assert!(!shown.contains(' '));
        assert_eq!(shown.chars().count(), 7);
        assert_eq!(shown.chars().filter(|c| *c == NBSP).count(), 5);
    }

    #[test]
    fn empty_content_keeps_height() {
        assert_eq!(display_content(""), "\u{a0}");
    }

    #[test]
    fn tabs_are_left_alone() {
        assert_eq!(display_content("\tx"), "\tx");
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        let escaped = escape_html("<script>alert('x') & \"y\"</script>");
        assert_eq!(
            escaped,
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn escape_html_writes_nbsp_entities() {
        assert_eq!(escape_html(&display_content("a b")), "a&nbsp;b");
    }
}
