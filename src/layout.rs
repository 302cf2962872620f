//! Document skeleton shared by every page.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into each page:
//! - `static/style.css`: Base styles (palette and motion variables injected from config)
//! - `static/site.js`: Menu toggle, scroll reset and one-shot entrance reveals
//!
//! The script adds `js` to `<html>` before anything else runs; every rule
//! that hides content ahead of an entrance is scoped to `html.js`, so the
//! site reads fine with scripting off.

use crate::config::{self, SiteConfig};
use crate::route::Theme;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");
const JS_FLAG: &str = "document.documentElement.classList.add('js');";

/// Everything a page needs besides its body: metadata and the stylesheet.
#[derive(Debug, Clone)]
pub struct Layout {
    lang: String,
    description: String,
    css: String,
}

impl Layout {
    pub fn new(config: &SiteConfig) -> Self {
        let css = format!(
            "{}\n\n{}\n\n{}",
            config::generate_color_css(&config.colors),
            config::generate_motion_css(&config.motion),
            CSS_STATIC
        );
        Self {
            lang: config.site.lang.clone(),
            description: config.site.description.clone(),
            css,
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// Render the full HTML document around `body`.
    pub fn document(&self, title: &str, theme: Theme, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang=(self.lang) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="description" content=(self.description);
                    title { (title) }
                    script { (PreEscaped(JS_FLAG)) }
                    style { (PreEscaped(&self.css)) }
                }
                body class=(theme.body_class()) {
                    (body)
                    script { (PreEscaped(JS)) }
                }
            }
        }
    }
}
