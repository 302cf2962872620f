//! Navigation bar: desktop links, the mobile overlay menu, and its state.
//!
//! The overlay is a two-state machine:
//!
//! ```text
//!            toggle
//!   Closed ─────────▶ Open
//!     ▲                 │
//!     └─────────────────┘
//!    toggle / link selected / navigation
//! ```
//!
//! Selecting a link always forces the menu closed; nothing else would. In the
//! generated HTML the overlay links carry `data-close-menu` so the embedded
//! script does the same in the browser.

use crate::components::icons::{Icon, icon};
use crate::route::{Location, Route};
use maud::{Markup, html};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationBar {
    menu: MenuState,
}

impl NavigationBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggled();
        self.menu
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    /// Pick a link: closes the menu and hands back where to navigate.
    pub fn select_link(&mut self, target: Route) -> Route {
        self.close_menu();
        target
    }

    pub fn render(&self, location: &Location) -> Markup {
        render(location, self.menu)
    }
}

/// A link is active iff its path is exactly the current one.
pub fn is_active(link: Route, location: &Location) -> bool {
    link.path() == location.path()
}

pub fn render(location: &Location, menu: MenuState) -> Markup {
    let open = menu.is_open();
    html! {
        nav.site-nav data-menu=(if open { "open" } else { "closed" }) {
            div.nav-bar {
                a.brand href=(Route::Home.path()) {
                    "PIXEL " span.accent { "&" } " CO"
                }
                ul.nav-links {
                    @for link in Route::ALL {
                        @let active = is_active(link, location);
                        li {
                            a href=(link.path())
                                class=[active.then_some("active")]
                                aria-current=[active.then_some("page")] {
                                (link.label())
                            }
                        }
                    }
                    li {
                        a.button.button-light href=(Route::Contact.path()) { "Let's Talk" }
                    }
                }
                button.menu-toggle type="button" aria-controls="mobile-menu"
                    aria-expanded=(if open { "true" } else { "false" }) aria-label="Toggle menu" {
                    span.icon-open { (icon(Icon::Menu, 32)) }
                    span.icon-close { (icon(Icon::Close, 32)) }
                }
            }
            div class="mobile-menu" id="mobile-menu" hidden[!open] {
                @for link in Route::ALL {
                    a href=(link.path()) data-close-menu { (link.label()) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert_eq!(NavigationBar::new().menu(), MenuState::Closed);
    }

    #[test]
    fn even_number_of_toggles_returns_to_closed() {
        let mut nav = NavigationBar::new();
        for n in 1..=6 {
            nav.toggle_menu();
            let expected = if n % 2 == 0 { MenuState::Closed } else { MenuState::Open };
            assert_eq!(nav.menu(), expected);
        }
    }

    #[test]
    fn selecting_a_link_closes_an_open_menu() {
        let mut nav = NavigationBar::new();
        nav.toggle_menu();
        assert!(nav.menu().is_open());

        assert_eq!(nav.select_link(Route::About), Route::About);
        assert_eq!(nav.menu(), MenuState::Closed);
    }

    #[test]
    fn selecting_a_link_with_menu_closed_keeps_it_closed() {
        let mut nav = NavigationBar::new();
        nav.select_link(Route::Contact);
        assert_eq!(nav.menu(), MenuState::Closed);
    }

    #[test]
    fn exactly_one_link_is_active_per_route() {
        for route in Route::ALL {
            let location = Location::from(route);
            let active: Vec<Route> = Route::ALL
                .into_iter()
                .filter(|l| is_active(*l, &location))
                .collect();
            assert_eq!(active, vec![route]);

            let html = render(&location, MenuState::Closed).into_string();
            assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
            assert!(html.contains(&format!(
                r#"<a href="{}" class="active" aria-current="page">{}</a>"#,
                route.path(),
                route.label()
            )));
        }
    }

    #[test]
    fn unknown_location_has_no_active_link() {
        let html = render(&Location::resolve("/about/team"), MenuState::Closed).into_string();
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn closed_menu_hides_overlay() {
        let html = render(&Route::Home.into(), MenuState::Closed).into_string();
        assert!(html.contains(r#"<div class="mobile-menu" id="mobile-menu" hidden>"#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"data-menu="closed""#));
    }

    #[test]
    fn open_menu_shows_the_same_four_links() {
        let html = render(&Route::Home.into(), MenuState::Open).into_string();
        assert!(html.contains(r#"<div class="mobile-menu" id="mobile-menu">"#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert_eq!(html.matches("data-close-menu").count(), 4);
        for route in Route::ALL {
            assert!(html.contains(&format!(
                r#"<a href="{}" data-close-menu>{}</a>"#,
                route.path(),
                route.label()
            )));
        }
    }
}
