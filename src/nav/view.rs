//! Host-page surface contract and HTML fragments.
//!
//! The host page owns a fixed set of regions (topic menu, sidebar, content,
//! TOC, highlight states); the controller only populates them through the
//! [`Surface`] trait and never creates them. Fragment builders are pure
//! functions so they can be tested without a surface.

use crate::manifest::{Manifest, TopicEntry};
use crate::render::escape_html;
use crate::toc::TocEntry;

/// The host page's fixed regions, populated by the controller.
///
/// One method per region. Implementations range from a full HTML page
/// assembler (the local server) to a recording fake in tests.
pub trait Surface: Send {
    /// Replaces the horizontal topic-menu region.
    fn set_topic_menu(&mut self, html: &str);

    /// Replaces the sidebar region.
    fn set_sidebar(&mut self, html: &str);

    /// Replaces the main content region.
    fn set_content(&mut self, html: &str);

    /// Replaces the table-of-contents region.
    fn set_toc(&mut self, html: &str);

    /// Highlights a section in the topic menu (`None` clears it).
    fn set_active_section(&mut self, section: Option<&str>);

    /// Highlights an entry in the sidebar (`None` clears it).
    fn set_active_entry(&mut self, path: Option<&str>);

    /// Applies or removes the dark-mode class.
    fn set_dark_mode(&mut self, enabled: bool);

    /// Opens or closes the sidebar overlay.
    fn set_sidebar_open(&mut self, open: bool);
}

/// Capitalizes the first character of a section name for display.
#[must_use]
pub fn display_name(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders the horizontal topic menu, one link per section.
#[must_use]
pub fn topic_menu_html(manifest: &Manifest, active: Option<&str>) -> String {
    let mut out = String::new();
    for section in manifest.section_names() {
        let class = if Some(section) == active {
            "topic-link active"
        } else {
            "topic-link"
        };
        out.push_str(&format!(
            "<a href=\"/t/{}\" class=\"{}\" data-section=\"{}\">{}</a>",
            escape_html(section),
            class,
            escape_html(section),
            escape_html(&display_name(section))
        ));
    }
    out
}

/// Renders the sidebar for one section.
#[must_use]
pub fn sidebar_html(section: &str, entries: &[TopicEntry], active_path: Option<&str>) -> String {
    let mut out = format!(
        "<div class=\"sidebar-category\"><div class=\"sidebar-category-title\">{}</div>",
        escape_html(&display_name(section))
    );
    for entry in entries {
        let class = if Some(entry.path.as_str()) == active_path {
            "sidebar-link active"
        } else {
            "sidebar-link"
        };
        out.push_str(&format!(
            "<a href=\"/d/{}\" class=\"{}\" data-section=\"{}\" data-path=\"{}\">{}</a>",
            escape_html(&entry.path),
            class,
            escape_html(section),
            escape_html(&entry.path),
            escape_html(&entry.title)
        ));
    }
    out.push_str("</div>");
    out
}

/// Renders the clickable outline for a document.
#[must_use]
pub fn toc_html(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"toc-title\">On this page</div>");
    for entry in entries {
        out.push_str(&format!(
            "<a href=\"#{}\" class=\"toc-link toc-h{}\">{}</a>",
            escape_html(&entry.anchor),
            entry.level,
            escape_html(&entry.text)
        ));
    }
    out
}

/// Renders one mobile prev/next strip.
///
/// The top strip carries the topic title; the bottom one keeps the slot but
/// hides it. Buttons are disabled at the respective list boundary.
#[must_use]
pub fn mobile_strip_html(title: &str, at_start: bool, at_end: bool, show_title: bool) -> String {
    let prev_disabled = if at_start { " disabled" } else { "" };
    let next_disabled = if at_end { " disabled" } else { "" };
    let title_span = if show_title {
        format!(
            "<span class=\"mobile-topic-title\">{}</span>",
            escape_html(title)
        )
    } else {
        "<span class=\"mobile-topic-title\" style=\"visibility:hidden\">.</span>".to_string()
    };
    format!(
        "<div class=\"mobile-topic-nav\"><button class=\"mobile-prev\"{prev_disabled}>Previous</button>{title_span}<button class=\"mobile-next\"{next_disabled}>Next</button></div>"
    )
}

/// Wraps content HTML with the top and bottom mobile strips.
#[must_use]
pub fn with_mobile_strips(content: &str, title: &str, at_start: bool, at_end: bool) -> String {
    let top = mobile_strip_html(title, at_start, at_end, true);
    let bottom = mobile_strip_html(title, at_start, at_end, false);
    format!("{top}{content}{bottom}")
}

/// Inline fragment shown in place of the sidebar and topic menu when the
/// manifest cannot be loaded.
#[must_use]
pub fn manifest_error_fragment(message: &str) -> String {
    format!(
        "<div class=\"menu-error\">Failed to load menu.json<br>{}</div>",
        escape_html(message)
    )
}

/// In-memory surface holding the latest HTML for every region.
///
/// Doubles as the page assembler for the local server and the one-shot
/// `render` command: [`PageSurface::to_page`] emits a standalone page with
/// the fixed-identifier containers the host contract names.
#[derive(Debug, Default, Clone)]
pub struct PageSurface {
    topic_menu: String,
    sidebar: String,
    content: String,
    toc: String,
    active_section: Option<String>,
    active_path: Option<String>,
    dark_mode: bool,
    sidebar_open: bool,
}

impl PageSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest topic-menu HTML.
    #[must_use]
    pub fn topic_menu(&self) -> &str {
        &self.topic_menu
    }

    /// Latest sidebar HTML.
    #[must_use]
    pub fn sidebar(&self) -> &str {
        &self.sidebar
    }

    /// Latest content HTML.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Latest TOC HTML.
    #[must_use]
    pub fn toc(&self) -> &str {
        &self.toc
    }

    /// Currently highlighted section, if any.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Currently highlighted sidebar entry, if any.
    #[must_use]
    pub fn active_path(&self) -> Option<&str> {
        self.active_path.as_deref()
    }

    /// Whether the dark-mode class is applied.
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Whether the sidebar overlay is open.
    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Assembles the standalone host page.
    ///
    /// Styling is the host's concern; only structure and the fixed
    /// identifiers are emitted here.
    #[must_use]
    pub fn to_page(&self, title: &str) -> String {
        let mut body_class = String::new();
        if self.dark_mode {
            body_class.push_str("dark-mode");
        }
        if self.sidebar_open {
            if !body_class.is_empty() {
                body_class.push(' ');
            }
            body_class.push_str("sidebar-open");
        }
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
             <body class=\"{body_class}\">\n\
             <nav id=\"topicsMenu\">{menu}</nav>\n\
             <input id=\"searchInput\" type=\"search\" placeholder=\"Search topics\">\n\
             <button id=\"darkModeToggle\">Theme</button>\n\
             <button id=\"sidebarToggle\">Menu</button>\n\
             <aside id=\"sidebarMenu\">{sidebar}</aside>\n\
             <main id=\"content\">{content}</main>\n\
             <aside id=\"toc\">{toc}</aside>\n\
             </body>\n</html>\n",
            title = escape_html(title),
            menu = self.topic_menu,
            sidebar = self.sidebar,
            content = self.content,
            toc = self.toc,
        )
    }
}

impl Surface for PageSurface {
    fn set_topic_menu(&mut self, html: &str) {
        html.clone_into(&mut self.topic_menu);
    }

    fn set_sidebar(&mut self, html: &str) {
        html.clone_into(&mut self.sidebar);
    }

    fn set_content(&mut self, html: &str) {
        html.clone_into(&mut self.content);
    }

    fn set_toc(&mut self, html: &str) {
        html.clone_into(&mut self.toc);
    }

    fn set_active_section(&mut self, section: Option<&str>) {
        self.active_section = section.map(str::to_string);
    }

    fn set_active_entry(&mut self, path: Option<&str>) {
        self.active_path = path.map(str::to_string);
    }

    fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }

    fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    fn manifest() -> Manifest {
        Manifest::parse(
            r#"{"python": [{"title": "Guide", "path": "python/guide.md"}], "sql": []}"#,
        )
        .expect("valid manifest")
    }

    #[test]
    fn display_name_capitalizes_first_letter() {
        assert_eq!(display_name("python"), "Python");
        assert_eq!(display_name("genAI"), "GenAI");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn topic_menu_marks_the_active_section() {
        let html = topic_menu_html(&manifest(), Some("python"));
        assert!(html.contains(r#"class="topic-link active" data-section="python""#));
        assert!(html.contains(r#"class="topic-link" data-section="sql""#));
        assert!(html.contains(">Python</a>"));
    }

    #[test]
    fn sidebar_marks_the_active_entry() {
        let manifest = manifest();
        let html = sidebar_html("python", manifest.entries("python"), Some("python/guide.md"));
        assert!(html.contains("sidebar-link active"));
        assert!(html.contains(r#"data-path="python/guide.md""#));
        assert!(html.contains(">Guide</a>"));
    }

    #[test]
    fn toc_html_is_empty_without_entries() {
        assert_eq!(toc_html(&[]), "");
    }

    #[test]
    fn toc_html_links_to_anchors() {
        let entries = vec![
            TocEntry {
                level: 2,
                text: "Setup".to_string(),
                anchor: "Setup".to_string(),
            },
            TocEntry {
                level: 3,
                text: "Install".to_string(),
                anchor: "Install".to_string(),
            },
        ];
        let html = toc_html(&entries);
        assert!(html.contains(r##"href="#Setup""##));
        assert!(html.contains("toc-h2"));
        assert!(html.contains("toc-h3"));
    }

    #[test]
    fn mobile_strip_disables_prev_at_start() {
        let html = mobile_strip_html("Guide", true, false, true);
        assert!(html.contains(r#"class="mobile-prev" disabled"#));
        assert!(!html.contains(r#"class="mobile-next" disabled"#));
        assert!(html.contains(">Guide</span>"));
    }

    #[test]
    fn mobile_strip_disables_next_at_end() {
        let html = mobile_strip_html("Guide", false, true, false);
        assert!(!html.contains(r#"class="mobile-prev" disabled"#));
        assert!(html.contains(r#"class="mobile-next" disabled"#));
        // Bottom strip hides the title but keeps the slot
        assert!(html.contains("visibility:hidden"));
    }

    #[test]
    fn with_mobile_strips_wraps_top_and_bottom() {
        let html = with_mobile_strips("<p>Body</p>", "Guide", true, true);
        let first = html.find("mobile-topic-nav").expect("top strip present");
        let last = html.rfind("mobile-topic-nav").expect("bottom strip present");
        assert!(first < last);
        assert!(html.contains("<p>Body</p>"));
    }

    #[test]
    fn manifest_error_fragment_escapes_message() {
        let html = manifest_error_fragment("boom <script>");
        assert!(html.contains("Failed to load menu.json"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn page_surface_records_regions() {
        let mut surface = PageSurface::new();
        surface.set_topic_menu("<a>menu</a>");
        surface.set_content("<p>body</p>");
        surface.set_active_entry(Some("python/guide.md"));
        assert_eq!(surface.topic_menu(), "<a>menu</a>");
        assert_eq!(surface.active_path(), Some("python/guide.md"));
    }

    #[test]
    fn page_has_all_fixed_identifiers() {
        let page = PageSurface::new().to_page("Docs");
        for id in [
            "id=\"topicsMenu\"",
            "id=\"sidebarMenu\"",
            "id=\"content\"",
            "id=\"toc\"",
            "id=\"searchInput\"",
            "id=\"darkModeToggle\"",
            "id=\"sidebarToggle\"",
        ] {
            assert!(page.contains(id), "page should contain {id}");
        }
    }

    #[test]
    fn page_body_classes_follow_flags() {
        let mut surface = PageSurface::new();
        surface.set_dark_mode(true);
        surface.set_sidebar_open(true);
        let page = surface.to_page("Docs");
        assert!(page.contains("class=\"dark-mode sidebar-open\""));
    }
}
