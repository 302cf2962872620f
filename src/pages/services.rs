//! Services: one row per offering, each revealed once as it scrolls in.

use crate::components::animated;
use crate::content::{SERVICES, Service};
use crate::reveal::{Entrance, Motion, RevealSpec};
use maud::{Markup, html};

const ROW: Entrance = Entrance::in_view(Motion::SlideUp);
const STAGGER_MS: u32 = 100;

fn row_reveal(index: usize) -> RevealSpec {
    RevealSpec::new(format!("service-{index}"), ROW.staggered(index, STAGGER_MS))
}

pub fn reveals() -> Vec<RevealSpec> {
    (0..SERVICES.len()).map(row_reveal).collect()
}

fn service_row(index: usize, service: &Service) -> Markup {
    animated(&row_reveal(index), "service-row", html! {
        div.service-title { h2 { (service.title) } }
        div.service-desc { p { (service.description) } }
        ul.tags {
            @for tag in service.tags {
                li.tag { (tag) }
            }
        }
    })
}

pub fn render() -> Markup {
    html! {
        div.page.container {
            h1.page-headline { "OUR " span.accent { "CRAFT." } }
            div.service-list {
                @for (idx, service) in SERVICES.iter().enumerate() {
                    (service_row(idx, service))
                }
            }
        }
    }
}
