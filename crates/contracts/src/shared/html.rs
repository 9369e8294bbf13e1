//! HTML escaping for text that must never be interpreted as markup

/// Escape `&`, `<`, `>`, `"` and `'`
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape the text and turn literal newlines into `<br>`
///
/// Example: `"a < b\nc"` -> `"a &lt; b<br>c"`
pub fn text_to_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#039;s &amp; Jerry&#039;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_ampersand_escaped_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_text_to_html_newlines() {
        assert_eq!(text_to_html("line 1\nline 2"), "line 1<br>line 2");
        assert_eq!(
            text_to_html("Hello <script>alert(1)</script>"),
            "Hello &lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }
}
