use crate::route::Route;
use maud::{Markup, html};

/// Shown for any path outside the route table.
pub fn render() -> Markup {
    html! {
        div.page.container.not-found {
            h1.page-headline { "LOST IN " span.accent { "SPACE." } }
            p.lead { "Nothing lives at this address. Yet." }
            a.button.button-accent href=(Route::Home.path()) { "Back Home" }
        }
    }
}
