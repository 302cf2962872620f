use crate::content::{MARQUEE_REPEAT, MARQUEE_TEXT};
use maud::{Markup, html};

/// Endless scrolling band of the studio tagline.
pub fn render() -> Markup {
    html! {
        div.marquee aria-label=(MARQUEE_TEXT) {
            div.marquee-track aria-hidden="true" {
                @for _ in 0..MARQUEE_REPEAT {
                    span.marquee-item { (MARQUEE_TEXT) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_tagline_ten_times() {
        let html = render().into_string();
        assert_eq!(html.matches(r#"<span class="marquee-item">"#).count(), 10);
        assert_eq!(html.matches("DESIGN • STRATEGY • MOTION •").count(), 11);
    }
}
