//! Home: hero, selected work, marquee and a closing call to action.

use crate::components::{hero, marquee, work_gallery};
use crate::reveal::RevealSpec;
use crate::route::Route;
use maud::{Markup, html};

pub fn reveals() -> Vec<RevealSpec> {
    let mut specs = hero::reveals();
    specs.extend(work_gallery::reveals());
    specs
}

pub fn render() -> Markup {
    html! {
        (hero::render())
        (work_gallery::render())
        (marquee::render())
        section.closing-cta {
            h2 { "Ready to disrupt " br; "the market?" }
            a.button.button-light.button-large href=(Route::Contact.path()) { "Start Your Project" }
        }
    }
}
