//! # course-page
//!
//! Leptos SSR renderer for the Course Platform landing page.
//!
//! The page is a fixed composition of three regions - navigation bar, hero
//! call-to-action block and stats block - rendered from compile-time
//! constants into one self-contained HTML document.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration, no signals
//! - **Pure** - Rendering takes no input, does no I/O and cannot fail
//! - **Deterministic** - Identical output on every call
//!
//! ## Quick Start
//!
//! ```rust
//! use course_page::render_page;
//!
//! let html = render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Learn Anything"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Display copy and the [`PageVariant`] switch
//! - [`components`] - Leptos UI components
//! - [`styles`] - Inline CSS and Content-Security-Policy
//! - [`export`] - Writing a rendered page to disk
//!
//! ## Leptos 0.8 SSR
//!
//! Components are turned into markup with Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <Hero /> };
//! let html: String = view.to_html();
//! ```
//!
//! ---
//!
//! Developed with 💀 by The Course Platform Team (c)2026

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod export;
pub mod styles;

pub use content::PageVariant;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the landing page: navigation bar, hero, stats block.
///
/// Equivalent to `render_variant(PageVariant::Landing)`.
///
/// # Example
///
/// ```rust
/// use course_page::{render_page, render_variant, PageVariant};
///
/// assert_eq!(render_page(), render_variant(PageVariant::Landing));
/// ```
pub fn render_page() -> String {
    render_variant(PageVariant::Landing)
}

/// Render one page variant as a complete HTML document, including
/// `<!DOCTYPE html>`.
pub fn render_variant(variant: PageVariant) -> String {
    let doc = view! { <PageDocument variant=variant /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HERO, STATS, WELCOME};
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Slice of `html` from the first `open` tag to the matching `close`.
    fn region<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
        let start = html.find(open).expect("region start");
        let end = html[start..].find(close).expect("region end") + start + close.len();
        &html[start..end]
    }

    #[test]
    fn renders_full_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("Course Platform"));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains(".stat-value"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn nav_has_exactly_two_auth_links() {
        let html = render_page();
        assert_eq!(html.matches("<nav").count(), 1);

        let nav = region(&html, "<nav", "</nav>");
        assert_eq!(nav.matches("<a ").count(), 2);

        let login = nav.find("href=\"/login\"").expect("login link");
        let signup = nav.find("href=\"/signup\"").expect("signup link");
        let log_in_label = nav.find("Log in").expect("Log in label");
        let get_started_label = nav.find("Get Started").expect("Get Started label");
        assert!(login < log_in_label && log_in_label < signup);
        assert!(signup < get_started_label);
    }

    #[test]
    fn headline_mentions_anything_and_anytime() {
        let html = render_page();
        let h1 = region(&html, "<h1", "</h1>");

        assert!(h1.contains("Learn Anything"));
        assert!(h1.contains("Anytime"));
    }

    #[test]
    fn hero_links_to_courses_catalogue() {
        let html = render_page();
        let hero = region(&html, "<section class=\"hero\"", "</section>");

        assert!(hero.contains("href=\"/courses\""));
        assert!(hero.contains(HERO.primary_cta.label));
        assert!(hero.contains("real-time quizzes"));
        assert!(hero.contains("progress tracking"));
    }

    #[test]
    fn stats_render_three_entries_in_order() {
        let html = render_page();
        assert_eq!(html.matches("class=\"stat-value\"").count(), 3);
        assert_eq!(html.matches("class=\"stat-label\"").count(), 3);

        let mut cursor = 0;
        for stat in STATS {
            let value_at = html[cursor..].find(stat.value).expect("stat value") + cursor;
            let label_at = html[value_at..].find(stat.label).expect("stat label") + value_at;
            cursor = label_at;
        }
    }

    #[test]
    fn regions_appear_in_fixed_order() {
        let html = render_page();

        let nav = html.find("<nav").unwrap();
        let hero = html.find("class=\"hero\"").unwrap();
        let stats = html.find("class=\"container stats\"").unwrap();
        assert!(nav < hero && hero < stats);
    }

    #[test]
    fn rerendering_is_byte_identical() {
        let first = render_page();
        let second = render_page();
        assert_eq!(first, second);

        assert_eq!(
            render_variant(PageVariant::Welcome),
            render_variant(PageVariant::Welcome)
        );
    }

    #[test]
    fn welcome_variant_has_only_heading_and_tagline() {
        let html = render_variant(PageVariant::Welcome);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(WELCOME.title));
        assert!(html.contains(WELCOME.tagline));
        assert!(html.contains("data-variant=\"welcome\""));
        assert!(!html.contains("<nav"));
        assert!(!html.contains("class=\"stat-value\""));
    }

    #[test]
    fn variants_differ() {
        assert!(render_page() != render_variant(PageVariant::Welcome));
        assert!(render_page().contains("data-variant=\"landing\""));
    }

    #[test]
    fn welcome_block_keeps_side_gutters() {
        let html = render_variant(PageVariant::Welcome);
        assert!(html.contains("class=\"container welcome\""));

        // `.welcome` follows `.container`, so its padding must not zero the sides.
        let rule = region(&html, ".welcome {", "}");
        assert!(rule.contains("padding: 5rem 1rem;"), "{rule}");
    }

    #[test]
    #[serial]
    fn rendering_touches_no_files() {
        let dir = TempDir::new().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let landing = render_page();
        let welcome = render_variant(PageVariant::Welcome);

        std::env::set_current_dir(previous).unwrap();
        assert!(!landing.is_empty() && !welcome.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
