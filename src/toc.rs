//! Table-of-contents extraction.
//!
//! Scans rendered HTML for `<h2>`/`<h3>` headings in document order,
//! derives an anchor slug for each (whitespace runs become underscores),
//! and injects matching `id` attributes into the returned HTML. Duplicate
//! heading text is disambiguated with `_2`, `_3`, … suffixes so every
//! outline link lands on its own heading.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h([23])[^>]*>(.*?)</h[23]>").expect("heading regex is valid")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag regex is valid"));

/// One outline entry: heading level, visible text, and anchor slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level, 2 or 3.
    pub level: u8,
    /// Heading text with inline markup stripped.
    pub text: String,
    /// Anchor slug, matching the injected `id` attribute.
    pub anchor: String,
}

/// Result of a TOC build: the outline plus HTML with anchors injected.
#[derive(Debug, Clone, Default)]
pub struct Toc {
    /// Input HTML with an `id` attribute added to each scanned heading.
    pub html: String,
    /// Outline entries in document order.
    pub entries: Vec<TocEntry>,
}

/// Builds the outline for a rendered document.
///
/// Only second- and third-level headings participate; everything else is
/// passed through untouched.
#[must_use]
pub fn build(html: &str) -> Toc {
    let mut entries = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = String::with_capacity(html.len());
    let mut last_end = 0;

    for caps in HEADING_RE.captures_iter(html) {
        let whole = caps.get(0).expect("regex group 0 always present");
        let level: u8 = if &caps[1] == "2" { 2 } else { 3 };
        let inner = &caps[2];

        let text = TAG_RE.replace_all(inner, "").trim().to_string();
        let anchor = disambiguate(slugify(&text), &mut seen);

        out.push_str(&html[last_end..whole.start()]);
        out.push_str(&inject_id(whole.as_str(), &anchor));
        last_end = whole.end();

        entries.push(TocEntry {
            level,
            text,
            anchor,
        });
    }
    out.push_str(&html[last_end..]);

    Toc { html: out, entries }
}

/// Replaces whitespace runs in heading text with underscores.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace && !slug.is_empty() {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    slug
}

/// Appends `_2`, `_3`, … to slugs already handed out.
fn disambiguate(slug: String, seen: &mut HashMap<String, usize>) -> String {
    let count = seen.entry(slug.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        slug
    } else {
        format!("{slug}_{count}")
    }
}

/// Adds an `id` attribute to a heading's opening tag.
fn inject_id(heading: &str, anchor: &str) -> String {
    match heading.find('>') {
        Some(pos) => format!(
            "{} id=\"{}\"{}",
            &heading[..pos],
            anchor,
            &heading[pos..]
        ),
        None => heading.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_markdown;

    #[test]
    fn scans_h2_and_h3_in_document_order() {
        let toc = build("<h2>Setup</h2><p>x</p><h3>Install</h3>");
        assert_eq!(toc.entries.len(), 2);
        assert_eq!(toc.entries[0].anchor, "Setup");
        assert_eq!(toc.entries[0].level, 2);
        assert_eq!(toc.entries[1].anchor, "Install");
        assert_eq!(toc.entries[1].level, 3);
    }

    #[test]
    fn h3_never_precedes_its_parent_h2_in_output() {
        let html = render_markdown("## Setup\n\n### Install\n\n## Usage");
        let toc = build(&html);
        let levels: Vec<u8> = toc.entries.iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![2, 3, 2]);
        // Output order is document order
        let anchors: Vec<&str> = toc.entries.iter().map(|e| e.anchor.as_str()).collect();
        assert_eq!(anchors, vec!["Setup", "Install", "Usage"]);
    }

    #[test]
    fn h1_and_h4_are_ignored() {
        let toc = build("<h1>Title</h1><h2>Setup</h2><h4>Minor</h4>");
        assert_eq!(toc.entries.len(), 1);
        assert_eq!(toc.entries[0].text, "Setup");
    }

    #[test]
    fn whitespace_runs_become_single_underscores() {
        assert_eq!(slugify("Getting  Started Fast"), "Getting_Started_Fast");
        assert_eq!(slugify("Setup"), "Setup");
    }

    #[test]
    fn ids_are_injected_into_the_html() {
        let toc = build("<h2>Getting Started</h2>");
        assert!(toc.html.contains(r#"<h2 id="Getting_Started">"#));
    }

    #[test]
    fn inline_markup_is_stripped_from_text() {
        let toc = build("<h2>The <code>run</code> command</h2>");
        assert_eq!(toc.entries[0].text, "The run command");
        assert_eq!(toc.entries[0].anchor, "The_run_command");
    }

    #[test]
    fn duplicate_headings_get_suffix_counters() {
        let toc = build("<h2>Usage</h2><h3>Usage</h3><h2>Usage</h2>");
        let anchors: Vec<&str> = toc.entries.iter().map(|e| e.anchor.as_str()).collect();
        assert_eq!(anchors, vec!["Usage", "Usage_2", "Usage_3"]);
        assert!(toc.html.contains(r#"id="Usage_3""#));
    }

    #[test]
    fn empty_document_yields_empty_outline() {
        let toc = build("<p>No headings here.</p>");
        assert!(toc.entries.is_empty());
        assert_eq!(toc.html, "<p>No headings here.</p>");
    }
}
