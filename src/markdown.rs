//! Markdown Rendering
//!
//! Renders static page content and book descriptions with pulldown-cmark.
//! Raw HTML in the source is emitted as text, since descriptions come
//! from the API and are inserted with `inner_html`.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Parse markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("# Shipping\n\nWe ship **worldwide**.");
        assert!(html.contains("<h1>Shipping</h1>"));
        assert!(html.contains("<strong>worldwide</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("Nice book <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = parse_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
