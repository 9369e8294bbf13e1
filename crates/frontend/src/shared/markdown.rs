//! CommonMark rendering of assistant messages
//!
//! pulldown-cmark passes raw HTML through, so its output is always run
//! through ammonia before it reaches `inner_html`.

use contracts::shared::render::{EscapeOnlyRenderer, MarkdownRenderer};
use pulldown_cmark::{html, Options, Parser};

#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(markdown, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        sanitize_html(&html_output)
    }
}

/// Strip scripts, event handlers and `javascript:` URLs, keep ordinary markup
pub fn sanitize_html(html: &str) -> String {
    ammonia::Builder::default()
        .add_tags(["input"])
        .add_tag_attributes("input", ["type", "checked", "disabled"])
        .clean(html)
        .to_string()
}

/// Renderer picked by the `[render] markdown` flag
pub fn renderer(markdown: bool) -> &'static (dyn MarkdownRenderer + Sync) {
    if markdown {
        &CommonMarkRenderer
    } else {
        &EscapeOnlyRenderer
    }
}
