//! About: studio story, portrait and the three DNA traits.

use crate::components::animated;
use crate::content::{ABOUT_COPY, ABOUT_PORTRAIT, DNA, STUDIO_NAME};
use crate::reveal::{Entrance, Motion, RevealSpec};
use maud::{Markup, html};

const HEADLINE: Entrance = Entrance::on_mount(Motion::SlideLeft);
const COPY: Entrance = Entrance::on_mount(Motion::Fade).delayed(300);
const PORTRAIT: Entrance = Entrance::on_mount(Motion::Scale).delayed(500);

fn headline() -> RevealSpec {
    RevealSpec::new("about-headline", HEADLINE)
}

fn copy() -> RevealSpec {
    RevealSpec::new("about-copy", COPY)
}

fn portrait() -> RevealSpec {
    RevealSpec::new("about-portrait", PORTRAIT)
}

pub fn reveals() -> Vec<RevealSpec> {
    vec![headline(), copy(), portrait()]
}

pub fn render() -> Markup {
    html! {
        div.page.container {
            (animated(&headline(), "page-headline", html! {
                h1 { "WE ARE " span.accent { "PIXEL." } }
            }))
            div.about-intro {
                (animated(&copy(), "about-copy", html! {
                    @for paragraph in ABOUT_COPY {
                        p { (paragraph) }
                    }
                }))
                (animated(&portrait(), "about-portrait", html! {
                    img src=(ABOUT_PORTRAIT) alt={ "The " (STUDIO_NAME) " team" };
                }))
            }
            section.dna {
                h3.eyebrow { "Our DNA" }
                div.dna-grid {
                    @for (idx, item) in DNA.iter().enumerate() {
                        article.dna-card {
                            h4 { "0" (idx + 1) ". " (item.title) }
                            p.muted { (item.description) }
                        }
                    }
                }
            }
        }
    }
}
