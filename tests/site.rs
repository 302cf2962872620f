//! End-to-end page scenarios through the public API.

use pixelco::config::SiteConfig;
use pixelco::nav::MenuState;
use pixelco::route::{Location, Route};
use pixelco::scroll::Viewport;
use pixelco::shell::Shell;

fn shell(path: &str) -> Shell {
    Shell::headless(&SiteConfig::default(), path)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn home_shows_hero_three_works_and_ten_marquee_items() {
    let html = shell("/").render().into_string();

    assert!(html.contains("DIGITAL <br><span class=\"gradient-text\">ALCHEMY</span>"));
    assert_eq!(count(&html, r#"class="reveal work-card""#), 3);
    assert_eq!(count(&html, r#"<span class="marquee-item">DESIGN • STRATEGY • MOTION •</span>"#), 10);
}

#[test]
fn contact_uses_accent_theme_and_four_field_form() {
    let html = shell("/contact").render().into_string();

    assert!(html.contains(r#"<body class="theme-accent">"#));
    assert_eq!(count(&html, r#"<div class="field">"#), 4);
    assert_eq!(count(&html, "<option"), 4);
    assert!(html.contains(r#"<option value="" disabled selected>Select Range</option>"#));

    let home = shell("/").render().into_string();
    assert!(home.contains(r#"<body class="theme-dark">"#));
}

#[test]
fn opening_the_menu_shows_the_four_desktop_links() {
    let mut shell = shell("/about");
    assert_eq!(shell.toggle_menu(), MenuState::Open);
    let html = shell.render().into_string();

    assert!(html.contains(r#"<div class="mobile-menu" id="mobile-menu">"#));
    for route in Route::ALL {
        let overlay = format!(r#"<a href="{}" data-close-menu>{}</a>"#, route.path(), route.label());
        assert!(html.contains(&overlay), "overlay missing {}", route.label());
    }
}

#[test]
fn link_in_open_menu_navigates_and_closes() {
    let mut shell = shell("/");
    shell.toggle_menu();
    shell.click_link(Route::About);

    assert_eq!(shell.location(), &Location::Route(Route::About));
    assert_eq!(shell.menu(), MenuState::Closed);
}

#[test]
fn services_rows_carry_title_description_and_tags() {
    let mut shell = shell("/");
    shell.viewport_mut().scroll_by(0, 1800);
    shell.navigate("/services");
    assert_eq!(shell.viewport().scroll_offset(), (0, 0));

    let html = shell.render().into_string();
    assert_eq!(count(&html, r#"class="reveal service-row""#), 3);
    assert!(html.contains("<h2>Brand Identity</h2>"));
    assert!(html.contains("Logo, typography, color systems, and voice guidelines"));
    assert!(html.contains(
        r#"<li class="tag">Strategy</li><li class="tag">Visual</li><li class="tag">Guidelines</li>"#
    ));
    assert!(html.contains(r#"<li class="tag">UI/UX</li>"#));
}

#[test]
fn footer_and_contact_link_the_mailbox() {
    for path in ["/", "/contact"] {
        let html = shell(path).render().into_string();
        assert!(html.contains(r#"href="mailto:hello@pixelandco.com""#), "{path}");
    }
}

#[test]
fn custom_palette_reaches_every_page() {
    let mut config = SiteConfig::default();
    config.colors.brand_yellow = "#00FF99".to_string();
    for route in Route::ALL {
        let html = Shell::headless(&config, route.path()).render().into_string();
        assert!(html.contains("--brand-yellow: #00FF99;"), "{route}");
    }
}

#[test]
fn view_reveal_fires_once_per_page_visit() {
    use pixelco::reveal::RevealState;

    let mut shell = shell("/services");
    assert_eq!(shell.reveal_state("service-1"), Some(RevealState::NotTriggered));
    assert!(shell.observe_visibility("service-1", true));
    assert!(!shell.observe_visibility("service-1", false));
    assert!(!shell.observe_visibility("service-1", true));
    shell.complete_reveal("service-1");
    assert_eq!(shell.reveal_state("service-1"), Some(RevealState::Done));

    shell.navigate("/");
    shell.navigate("/services");
    assert_eq!(shell.reveal_state("service-1"), Some(RevealState::NotTriggered));
}
