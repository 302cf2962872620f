//! Shared test utilities for the pixelco test suite.
//!
//! Renders pages through a headless shell and provides the structural
//! assertions most page tests need.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_path("/services");
//! assert_single_frame(&html);
//! assert_eq!(count(&html, r#"class="reveal service-row""#), 3);
//! ```

use crate::config::SiteConfig;
use crate::shell::Shell;

/// A headless shell with default config, mounted at `path`.
pub fn test_shell(path: &str) -> Shell {
    Shell::headless(&SiteConfig::default(), path)
}

/// Full document for `path`.
pub fn render_path(path: &str) -> String {
    test_shell(path).render().into_string()
}

/// Non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Assert the document has exactly one navigation bar, one `<main>` and one
/// footer, in that order.
pub fn assert_single_frame(html: &str) {
    for (needle, what) in [
        (r#"<nav class="site-nav""#, "navigation bar"),
        ("<main ", "page"),
        (r#"<footer class="site-footer""#, "footer"),
    ] {
        let n = count(html, needle);
        assert_eq!(n, 1, "expected exactly one {what}, found {n}");
    }
    let nav = html.find(r#"<nav class="site-nav""#).unwrap();
    let main = html.find("<main ").unwrap();
    let footer = html.find(r#"<footer class="site-footer""#).unwrap();
    assert!(nav < main && main < footer, "frame out of order");
}
