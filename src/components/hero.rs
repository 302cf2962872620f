//! Full-height opening section of the Home page.

use super::animated;
use crate::content::HERO_TAGLINE;
use crate::reveal::{Entrance, Motion, RevealSpec};
use crate::route::Route;
use maud::{Markup, html};

pub const HEADLINE: Entrance = Entrance::on_mount(Motion::SlideUp);
pub const TAGLINE: Entrance = Entrance::on_mount(Motion::Fade).delayed(500);
pub const ACTIONS: Entrance = Entrance::on_mount(Motion::Scale).delayed(800);

fn headline() -> RevealSpec {
    RevealSpec::new("hero-headline", HEADLINE)
}

fn tagline() -> RevealSpec {
    RevealSpec::new("hero-tagline", TAGLINE)
}

fn actions() -> RevealSpec {
    RevealSpec::new("hero-actions", ACTIONS)
}

pub fn reveals() -> Vec<RevealSpec> {
    vec![headline(), tagline(), actions()]
}

pub fn render() -> Markup {
    html! {
        section.hero {
            div.hero-glow aria-hidden="true" {
                span.blob.blob-yellow {}
                span.blob.blob-purple {}
                span.blob.blob-blue {}
            }
            div.hero-body {
                (animated(&headline(), "hero-headline", html! {
                    h1 { "DIGITAL " br; span.gradient-text { "ALCHEMY" } }
                }))
                (animated(&tagline(), "hero-tagline", html! {
                    p { (HERO_TAGLINE) }
                }))
                (animated(&actions(), "hero-actions", html! {
                    a.button.button-accent href=(Route::Services.path()) { "Our Services" }
                    a.button.button-outline href=(Route::About.path()) { "Who We Are" }
                }))
            }
        }
    }
}
