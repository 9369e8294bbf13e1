//! Display policy for conversation messages
//!
//! User text is always escaped; assistant text goes through a
//! `MarkdownRenderer`, which owns its own escaping.

use super::html::text_to_html;
use crate::domain::a002_chat_message::aggregate::{ChatMessage, Sender};

/// Pluggable Markdown-to-HTML capability
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// Escape-only variant: no Markdown, newlines become `<br>`
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeOnlyRenderer;

impl MarkdownRenderer for EscapeOnlyRenderer {
    fn render(&self, markdown: &str) -> String {
        text_to_html(markdown)
    }
}

/// HTML for one log entry
pub fn render_message(message: &ChatMessage, renderer: &dyn MarkdownRenderer) -> String {
    match message.sender {
        Sender::User => text_to_html(&message.text),
        Sender::Assistant => renderer.render(&message.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseRenderer;

    impl MarkdownRenderer for UppercaseRenderer {
        fn render(&self, markdown: &str) -> String {
            markdown.to_uppercase()
        }
    }

    #[test]
    fn test_user_text_never_reaches_renderer() {
        let msg = ChatMessage::user("**bold** <b>x</b>");
        assert_eq!(
            render_message(&msg, &UppercaseRenderer),
            "**bold** &lt;b&gt;x&lt;/b&gt;"
        );
    }

    #[test]
    fn test_assistant_text_is_not_re_escaped() {
        let msg = ChatMessage::assistant("<p>hi</p>");
        assert_eq!(render_message(&msg, &UppercaseRenderer), "<P>HI</P>");
    }

    #[test]
    fn test_escape_only_renderer() {
        let msg = ChatMessage::assistant("a <b>\nc");
        assert_eq!(render_message(&msg, &EscapeOnlyRenderer), "a &lt;b&gt;<br>c");
    }
}
