//! The closed set of site routes.
//!
//! Paths match exactly: `/about` is About, `/about/x` and `/About` are not.
//! Anything outside the four known paths resolves to [`Location::Unknown`],
//! which the renderer turns into the not-found page.

use std::fmt;

/// A page of the site, identified by its URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Contact,
}

/// Colour treatment of the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Light text on black. Every page except Contact.
    Dark,
    /// Black text on the brand yellow.
    Accent,
}

impl Theme {
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Accent => "theme-accent",
        }
    }
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Services, Route::Contact];

    /// Resolve a URL path. Exact string match only.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Contact => "/contact",
        }
    }

    /// Link text used by the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Services => "Services",
            Route::Contact => "Contact",
        }
    }

    /// Document `<title>`.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Pixel & Co | Digital Alchemy",
            Route::About => "About | Pixel & Co",
            Route::Services => "Services | Pixel & Co",
            Route::Contact => "Contact | Pixel & Co",
        }
    }

    /// Output file relative to the build directory.
    ///
    /// Every non-root route gets its own directory so `/about` and `/about/`
    /// both resolve on a plain file server.
    pub fn output_file(self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::About => "about/index.html",
            Route::Services => "services/index.html",
            Route::Contact => "contact/index.html",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Route::Contact => Theme::Accent,
            _ => Theme::Dark,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Where the shell currently is: a known route or a path with no mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Route(Route),
    Unknown(String),
}

/// File name of the not-found page in the build output.
pub const NOT_FOUND_FILE: &str = "404.html";

impl Location {
    pub fn resolve(path: &str) -> Location {
        match Route::from_path(path) {
            Some(route) => Location::Route(route),
            None => Location::Unknown(path.to_string()),
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Location::Route(r) => Some(*r),
            Location::Unknown(_) => None,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Location::Route(r) => r.path(),
            Location::Unknown(p) => p,
        }
    }

    pub fn theme(&self) -> Theme {
        self.route().map(Route::theme).unwrap_or(Theme::Dark)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Location::Route(r) => r.title(),
            Location::Unknown(_) => "Not Found | Pixel & Co",
        }
    }
}

impl From<Route> for Location {
    fn from(route: Route) -> Self {
        Location::Route(route)
    }
}
