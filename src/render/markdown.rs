//! Markdown to HTML conversion.
//!
//! Conversion is delegated to `pulldown-cmark`. Fenced code blocks are
//! emitted with a `language-<lang>` class so a client-side highlighter can
//! pick them up. If conversion fails for any reason the raw text is
//! HTML-escaped and wrapped in a `<pre>` block, so callers always receive
//! a displayable string.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use tracing::warn;

/// Converts Markdown to HTML.
///
/// Tables and strikethrough are enabled; everything else is CommonMark.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let events = annotate_code_blocks(parser);

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Converts Markdown to HTML, falling back to escaped text on failure.
///
/// The happy path is [`render_markdown`]; a conversion panic is caught and
/// degraded silently to [`escaped_fallback`] instead of reaching the host.
#[must_use]
pub fn render_or_escape(markdown: &str) -> String {
    let result = std::panic::catch_unwind(|| render_markdown(markdown));
    match result {
        Ok(html) => html,
        Err(_) => {
            warn!("markdown conversion failed, falling back to escaped text");
            escaped_fallback(markdown)
        }
    }
}

/// Escapes the raw text and wraps it in a preformatted block.
#[must_use]
pub fn escaped_fallback(raw: &str) -> String {
    format!("<pre>{}</pre>", escape_html(raw))
}

/// Escapes the five HTML-special characters: `& < > " '`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Rewrites code-block events so fenced blocks carry a `language-*` class
/// and their contents are emitted pre-escaped.
fn annotate_code_blocks<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut code_lang: Option<String> = None;
    let mut code_buffer = String::new();
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                code_buffer.clear();
                code_lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                let class = code_lang
                    .take()
                    .map(|lang| format!(" class=\"language-{lang}\""))
                    .unwrap_or_default();
                let block = format!("<pre><code{class}>{}</code></pre>", escape_html(&code_buffer));
                events.push(Event::Html(block.into()));
            }
            Event::Text(text) if in_code_block => code_buffer.push_str(&text),
            other => events.push(other),
        }
    }

    events
}
