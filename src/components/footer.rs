//! Site footer. Identical on every page.

use super::icons::{Icon, icon};
use crate::content::{self, CONTACT_EMAIL, COPYRIGHT_YEAR, SOCIALS, STUDIO_NAME};
use maud::{Markup, html};

pub fn render() -> Markup {
    html! {
        footer.site-footer {
            div.container {
                div.footer-grid {
                    div {
                        h2.footer-headline {
                            "LET'S BUILD " br; span.accent { "THE FUTURE." }
                        }
                        a.footer-mail href=(content::mailto()) {
                            (CONTACT_EMAIL) " " (icon(Icon::ArrowRight, 24))
                        }
                    }
                    div.footer-meta {
                        ul.socials {
                            @for network in SOCIALS {
                                li.social title=(network.label()) {
                                    (icon(network.into(), 20))
                                    span.visually-hidden { (network.label()) }
                                }
                            }
                        }
                        p.legal {
                            "© " (COPYRIGHT_YEAR) " " (STUDIO_NAME) ". All rights reserved." br;
                            "Designed for the bold."
                        }
                    }
                }
                div.footer-wordmark aria-hidden="true" { "PIXEL&CO" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_links_the_studio_mailbox() {
        let html = render().into_string();
        assert!(html.contains(r#"href="mailto:hello@pixelandco.com""#));
        assert!(html.contains("THE FUTURE."));
    }

    #[test]
    fn footer_lists_each_social_network() {
        let html = render().into_string();
        assert_eq!(html.matches(r#"class="social""#).count(), 3);
        assert!(html.contains("LinkedIn"));
    }

    #[test]
    fn footer_escapes_ampersands() {
        let html = render().into_string();
        assert!(html.contains("Pixel &amp; Co. All rights reserved."));
        assert!(html.contains("PIXEL&amp;CO"));
    }
}
