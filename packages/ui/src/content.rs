//! Rendering of server-provided rich text.
//!
//! Item bodies arrive as HTML or markdown written by the administrator. Both
//! go through pulldown-cmark (raw HTML passes through untouched) and the
//! result is sanitized with ammonia before it reaches `dangerous_inner_html`.

use std::collections::HashSet;

use pulldown_cmark::{html, Options, Parser};

/// Render `source` to HTML that is safe to inject into the page.
pub fn render_rich_content(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, parser);

    ammonia::clean(&rendered)
}

/// Card preview: `source` with every tag removed and whitespace collapsed,
/// cut to about `max_chars`. The result is escaped HTML text, ready to be
/// wrapped in an element and injected.
pub fn excerpt(source: &str, max_chars: usize) -> String {
    let text = ammonia::Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(source)
        .to_string();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    // Don't leave half an entity behind
    if let Some(amp) = cut.rfind('&') {
        if !cut[amp..].contains(';') {
            cut.truncate(amp);
        }
    }
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tags_removed() {
        let html = render_rich_content("<p>Hello</p><script>alert(1)</script>");
        assert!(html.contains("<p>Hello</p>"));
        assert!(!html.contains("script"));
        assert!(!html.contains("alert"));
    }

    #[test]
    fn test_event_handlers_removed() {
        let html = render_rich_content(r#"<img src="/a.png" onerror="steal()">"#);
        assert!(html.contains("/a.png"));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_javascript_links_removed() {
        let html = render_rich_content(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_markdown_rendered() {
        let html = render_rich_content("School **reopens** on Monday");
        assert!(html.contains("<strong>reopens</strong>"));
    }

    #[test]
    fn test_plain_html_kept() {
        let html = render_rich_content("<ul><li>Library</li><li>Lab</li></ul>");
        assert!(html.contains("<li>Library</li>"));
    }

    #[test]
    fn test_excerpt_strips_markup_and_truncates() {
        assert_eq!(excerpt("<p>Short</p>", 20), "Short");
        assert_eq!(excerpt("one two three four", 7), "one two…");
        assert_eq!(excerpt("<p>Lab <b>open</b></p><script>x()</script>", 40), "Lab open");
    }

    #[test]
    fn test_excerpt_keeps_text_after_a_literal_less_than() {
        assert_eq!(
            excerpt("Class sizes: 3 < 5 students per tutor", 200),
            "Class sizes: 3 &lt; 5 students per tutor"
        );
    }

    #[test]
    fn test_excerpt_does_not_split_an_entity() {
        assert_eq!(excerpt("a < b", 4), "a…");
    }
}
