//! Presentational building blocks shared by the pages.
//!
//! Everything here is a pure function returning [`Markup`]. Animated blocks
//! go through [`animated`], which stamps the `data-*` attributes the embedded
//! script reads to play entrances.

pub mod footer;
pub mod hero;
pub mod icons;
pub mod marquee;
pub mod work_gallery;

use crate::reveal::{RevealSpec, RevealState};
use maud::{Markup, html};

/// Wrap `content` in a block that plays `spec`'s entrance.
///
/// The block starts in the `pending` state; without the script it stays fully
/// visible (the hiding CSS is scoped to `html.js`).
pub fn animated(spec: &RevealSpec, class: &str, content: Markup) -> Markup {
    let delay = (spec.entrance.delay_ms > 0).then(|| format!("--reveal-delay: {}ms;", spec.entrance.delay_ms));
    html! {
        div class={ "reveal " (class) }
            id=(spec.id)
            data-reveal=(spec.entrance.motion.name())
            data-trigger=(spec.entrance.trigger.name())
            data-reveal-state=(RevealState::NotTriggered.name())
            style=[delay] {
            (content)
        }
    }
}
