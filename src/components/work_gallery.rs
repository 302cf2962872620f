//! "Selected Works" grid on the Home page.
//!
//! Each card rises into view the first time it is scrolled to, staggered by
//! its position, and stays put afterwards.

use super::animated;
use super::icons::{Icon, icon};
use crate::content::{WORKS, WorkItem};
use crate::reveal::{Entrance, Motion, RevealSpec};
use crate::route::Route;
use maud::{Markup, html};

const CARD: Entrance = Entrance::in_view(Motion::SlideUp);
const STAGGER_MS: u32 = 200;

fn card_reveal(index: usize) -> RevealSpec {
    RevealSpec::new(format!("work-{index}"), CARD.staggered(index, STAGGER_MS))
}

pub fn reveals() -> Vec<RevealSpec> {
    (0..WORKS.len()).map(card_reveal).collect()
}

fn work_card(index: usize, work: &WorkItem) -> Markup {
    animated(&card_reveal(index), "work-card", html! {
        div.work-frame {
            img src=(work.image) alt=(work.title) loading="lazy";
            div.work-overlay aria-hidden="true" {
                span.work-badge { (icon(Icon::ArrowUpRight, 32)) }
            }
        }
        h3 { (work.title) }
        p.muted { (work.category) }
    })
}

pub fn render() -> Markup {
    html! {
        section.selected-work {
            div.container {
                div.section-head {
                    h2 { "SELECTED " br; "WORKS" }
                    a.view-all href=(Route::Services.path()) {
                        "View All Projects " (icon(Icon::ArrowRight, 16))
                    }
                }
                div.work-grid {
                    @for (idx, work) in WORKS.iter().enumerate() {
                        (work_card(idx, work))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_card_per_work_item() {
        let html = render().into_string();
        assert_eq!(html.matches(r#"class="reveal work-card""#).count(), 3);
        for work in WORKS {
            assert!(html.contains(&format!("<h3>{}</h3>", work.title)));
        }
    }

    #[test]
    fn cards_are_view_triggered_and_staggered() {
        let delays: Vec<u32> = reveals().iter().map(|r| r.entrance.delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400]);
        let html = render().into_string();
        assert_eq!(html.matches(r#"data-trigger="view""#).count(), 3);
    }

    #[test]
    fn images_are_lazy_remote_references() {
        let html = render().into_string();
        assert_eq!(html.matches(r#"loading="lazy""#).count(), 3);
        assert!(html.contains("images.unsplash.com/photo-1550745165-9bc0b252726f"));
    }
}
