//! Page bodies, one module per route.
//!
//! A page is a pure function of the compiled-in content: it takes no input
//! and always renders the same markup. [`reveals`] lists the animated blocks
//! a page mounts, using the same ids the markup carries.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;

use crate::reveal::RevealSpec;
use crate::route::{Location, Route};
use maud::Markup;

/// Body of the page at `location`, without navigation or footer.
pub fn render(location: &Location) -> Markup {
    match location {
        Location::Route(Route::Home) => home::render(),
        Location::Route(Route::About) => about::render(),
        Location::Route(Route::Services) => services::render(),
        Location::Route(Route::Contact) => contact::render(),
        Location::Unknown(_) => not_found::render(),
    }
}

/// Animated blocks mounted with the page at `location`.
pub fn reveals(location: &Location) -> Vec<RevealSpec> {
    match location {
        Location::Route(Route::Home) => home::reveals(),
        Location::Route(Route::About) => about::reveals(),
        Location::Route(Route::Services) => services::reveals(),
        Location::Route(Route::Contact) | Location::Unknown(_) => Vec::new(),
    }
}

/// Stable page identifier stamped on `<main data-page>`.
pub fn page_name(location: &Location) -> &'static str {
    match location {
        Location::Route(Route::Home) => "home",
        Location::Route(Route::About) => "about",
        Location::Route(Route::Services) => "services",
        Location::Route(Route::Contact) => "contact",
        Location::Unknown(_) => "not-found",
    }
}
