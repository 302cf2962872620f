//! Top-level composition: the current location and everything that watches it.
//!
//! The shell owns the [`Location`] and passes it explicitly to the parts that
//! depend on it: the [`NavigationBar`] for link highlighting, the
//! [`ScrollRestorer`] for scroll reset, and the page renderer. Every render
//! wraps exactly one page body between the navigation bar and the footer.
//!
//! A navigation does, in order:
//!
//! 1. resolve the path (unknown paths become [`Location::Unknown`]);
//! 2. close the mobile menu;
//! 3. unmount the old page's reveal blocks and register the new page's;
//! 4. let the scroll restorer see the new location;
//! 5. fire the new page's on-mount entrances.
//!
//! Steps 4 and 5 are independent; nothing waits on an animation.

use crate::components::footer;
use crate::config::SiteConfig;
use crate::layout::Layout;
use crate::nav::{MenuState, NavigationBar};
use crate::pages;
use crate::reveal::{RevealState, RevealTracker};
use crate::route::{Location, Route};
use crate::scroll::{MemoryViewport, ScrollRestorer, Viewport};
use maud::{Markup, html};

pub struct Shell<V: Viewport = MemoryViewport> {
    layout: Layout,
    location: Location,
    nav: NavigationBar,
    scroll: ScrollRestorer,
    reveals: RevealTracker,
    viewport: V,
}

impl Shell<MemoryViewport> {
    /// A shell on an in-memory viewport, mounted at `path`.
    pub fn headless(config: &SiteConfig, path: &str) -> Self {
        Self::open(config, MemoryViewport::default(), path)
    }
}

impl<V: Viewport> Shell<V> {
    /// Mount the site at `path`.
    pub fn open(config: &SiteConfig, viewport: V, path: &str) -> Self {
        let mut shell = Self {
            layout: Layout::new(config),
            location: Location::resolve(path),
            nav: NavigationBar::new(),
            scroll: ScrollRestorer::new(),
            reveals: RevealTracker::new(),
            viewport,
        };
        shell.mount_page();
        shell
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn menu(&self) -> MenuState {
        self.nav.menu()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn reveal_state(&self, id: &str) -> Option<RevealState> {
        self.reveals.state(id)
    }

    /// Go to `path`. Navigating to the current location only closes the
    /// menu; the page stays mounted.
    pub fn navigate(&mut self, path: &str) -> &Location {
        let location = Location::resolve(path);
        self.nav.close_menu();
        if location == self.location {
            return &self.location;
        }
        tracing::debug!(from = self.location.path(), to = location.path(), "navigate");
        self.location = location;
        self.mount_page();
        &self.location
    }

    /// Activate a navigation link: close the menu, then navigate.
    pub fn click_link(&mut self, route: Route) -> &Location {
        let target = self.nav.select_link(route);
        self.navigate(target.path())
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.nav.toggle_menu()
    }

    /// Feed a viewport-visibility change for a block on the current page.
    /// Returns `true` when the block's entrance fires.
    pub fn observe_visibility(&mut self, id: &str, visible: bool) -> bool {
        let fired = self.reveals.observe(id, visible);
        if fired {
            tracing::trace!(id, "reveal fired");
        }
        fired
    }

    pub fn complete_reveal(&mut self, id: &str) {
        self.reveals.complete(id);
    }

    fn mount_page(&mut self) {
        self.reveals.reset();
        for spec in pages::reveals(&self.location) {
            self.reveals.register(&spec);
        }
        if self.scroll.observe(&self.location, &mut self.viewport) {
            tracing::trace!(path = self.location.path(), "scroll reset");
        }
        self.reveals.mount();
    }

    /// Render the complete document for the current location.
    pub fn render(&self) -> Markup {
        self.layout.document(
            self.location.title(),
            self.location.theme(),
            html! {
                (self.nav.render(&self.location))
                main data-page=(pages::page_name(&self.location)) {
                    (pages::render(&self.location))
                }
                (footer::render())
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn every_route_renders_one_nav_one_page_one_footer() {
        for route in Route::ALL {
            let html = render_path(route.path());
            assert_single_frame(&html);
            assert!(html.contains(&format!(
                r#"<main data-page="{}">"#,
                pages::page_name(&route.into())
            )));
        }
    }

    #[test]
    fn active_link_matches_current_route() {
        let mut shell = test_shell("/");
        for route in Route::ALL {
            shell.navigate(route.path());
            let html = shell.render().into_string();
            assert_eq!(count(&html, r#"aria-current="page""#), 1);
            assert!(html.contains(&format!(
                r#"href="{}" class="active" aria-current="page""#,
                route.path()
            )));
        }
    }

    #[test]
    fn navigation_resets_scroll() {
        let mut shell = test_shell("/");
        shell.viewport_mut().scroll_by(0, 2400);
        shell.navigate("/services");
        assert_eq!(shell.viewport().scroll_offset(), (0, 0));

        shell.viewport_mut().scroll_by(0, 900);
        shell.click_link(Route::Contact);
        assert_eq!(shell.viewport().scroll_offset(), (0, 0));
    }

    #[test]
    fn initial_mount_leaves_scroll_alone() {
        let mut viewport = MemoryViewport::default();
        viewport.scroll_by(0, 40);
        let shell = Shell::open(&SiteConfig::default(), viewport, "/about");
        assert_eq!(shell.viewport().scroll_offset(), (0, 40));
    }

    #[test]
    fn toggling_twice_returns_to_closed() {
        let mut shell = test_shell("/");
        assert_eq!(shell.toggle_menu(), MenuState::Open);
        assert_eq!(shell.toggle_menu(), MenuState::Closed);
    }

    #[test]
    fn clicking_a_link_with_open_menu_navigates_and_closes() {
        let mut shell = test_shell("/");
        shell.toggle_menu();
        let html = shell.render().into_string();
        assert!(html.contains(r#"data-menu="open""#));

        shell.click_link(Route::Services);
        assert_eq!(shell.location(), &Location::Route(Route::Services));
        assert_eq!(shell.menu(), MenuState::Closed);
        assert!(shell.render().into_string().contains(r#"data-menu="closed""#));
    }

    #[test]
    fn on_mount_reveals_fire_with_the_page() {
        let shell = test_shell("/");
        assert_eq!(shell.reveal_state("hero-headline"), Some(RevealState::Triggered));
        assert_eq!(shell.reveal_state("work-0"), Some(RevealState::NotTriggered));
    }

    #[test]
    fn view_reveal_fires_once_per_mount() {
        let mut shell = test_shell("/services");
        let mut fired = 0;
        for visible in [true, false, true, false, true] {
            if shell.observe_visibility("service-1", visible) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        shell.complete_reveal("service-1");
        assert_eq!(shell.reveal_state("service-1"), Some(RevealState::Done));
        assert!(!shell.observe_visibility("service-1", true));
    }

    #[test]
    fn remounting_a_page_rearms_its_reveals() {
        let mut shell = test_shell("/services");
        assert!(shell.observe_visibility("service-0", true));
        shell.navigate("/");
        assert_eq!(shell.reveal_state("service-0"), None);
        shell.navigate("/services");
        assert!(shell.observe_visibility("service-0", true));
    }

    #[test]
    fn same_path_navigation_keeps_the_page_mounted() {
        let mut shell = test_shell("/services");
        assert!(shell.observe_visibility("service-0", true));
        shell.viewport_mut().scroll_by(0, 500);
        shell.toggle_menu();

        shell.navigate("/services");
        assert_eq!(shell.menu(), MenuState::Closed);
        assert_eq!(shell.viewport().scroll_offset(), (0, 500));
        assert_eq!(shell.reveal_state("service-0"), Some(RevealState::Triggered));
        assert!(!shell.observe_visibility("service-0", true));
    }

    #[test]
    fn unknown_path_renders_not_found_inside_the_frame() {
        let mut shell = test_shell("/");
        shell.navigate("/pricing");
        let html = shell.render().into_string();
        assert_single_frame(&html);
        assert!(html.contains(r#"<main data-page="not-found">"#));
        assert!(html.contains("LOST IN"));
        assert_eq!(count(&html, "aria-current"), 0);
    }

    #[test]
    fn contact_uses_accent_theme_only() {
        for route in Route::ALL {
            let html = render_path(route.path());
            let accent = html.contains(r#"<body class="theme-accent">"#);
            assert_eq!(accent, route == Route::Contact, "{route}");
        }
    }
}
