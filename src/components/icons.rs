//! Inline SVG glyphs.
//!
//! Stroke icons on a 24×24 grid, drawn with `currentColor` so they follow the
//! surrounding text colour.

use crate::content::SocialNetwork;
use maud::{Markup, PreEscaped, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    ArrowUpRight,
    Menu,
    Close,
    Instagram,
    Twitter,
    LinkedIn,
}

impl Icon {
    fn paths(self) -> &'static str {
        match self {
            Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Icon::ArrowUpRight => r#"<path d="M7 7h10v10"/><path d="M7 17 17 7"/>"#,
            Icon::Menu => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            Icon::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Icon::Instagram => {
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
            }
            Icon::Twitter => {
                r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#
            }
            Icon::LinkedIn => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
        }
    }
}

impl From<SocialNetwork> for Icon {
    fn from(network: SocialNetwork) -> Self {
        match network {
            SocialNetwork::Instagram => Icon::Instagram,
            SocialNetwork::Twitter => Icon::Twitter,
            SocialNetwork::LinkedIn => Icon::LinkedIn,
        }
    }
}

/// Render `icon` at `size` pixels. Decorative: hidden from assistive tech.
pub fn icon(icon: Icon, size: u32) -> Markup {
    html! {
        svg.icon xmlns="http://www.w3.org/2000/svg" width=(size) height=(size)
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            (PreEscaped(icon.paths()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_sized_and_decorative() {
        let html = icon(Icon::ArrowRight, 16).into_string();
        assert!(html.starts_with("<svg"));
        assert!(html.contains(r#"width="16""#));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains("M5 12h14"));
    }

    #[test]
    fn every_social_network_has_a_glyph() {
        for network in crate::content::SOCIALS {
            let html = icon(network.into(), 20).into_string();
            assert!(html.contains("<path") || html.contains("<rect"));
        }
    }
}
