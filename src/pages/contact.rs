//! Contact: studio details and the enquiry form.
//!
//! The form is inert. It has no action and its button is `type="button"`, so
//! activating it does nothing until a backend is wired in.

use crate::content::{
    self, BUDGET_OPTIONS, CONTACT_EMAIL, CONTACT_FIELDS, FieldKind, FormField, STUDIO_ADDRESS,
    STUDIO_PHONE,
};
use maud::{Markup, html};

fn field(field: &FormField) -> Markup {
    let id = format!("contact-{}", field.name);
    html! {
        div.field {
            label for=(id) { (field.label) }
            @match field.kind {
                FieldKind::Text | FieldKind::Email => {
                    input id=(id) name=(field.name)
                        type=(if field.kind == FieldKind::Email { "email" } else { "text" })
                        placeholder=[field.placeholder];
                }
                FieldKind::Select => {
                    select id=(id) name=(field.name) {
                        @for budget in BUDGET_OPTIONS {
                            @if budget.selectable {
                                option { (budget.label) }
                            } @else {
                                option value="" disabled selected { (budget.label) }
                            }
                        }
                    }
                }
                FieldKind::TextArea { rows } => {
                    textarea id=(id) name=(field.name) rows=(rows) placeholder=[field.placeholder] {}
                }
            }
        }
    }
}

pub fn render() -> Markup {
    html! {
        div.page.container {
            h1.page-headline.contact-headline { "SAY HELLO." }
            div.contact-grid {
                div.contact-details {
                    p.lead { "Have a project in mind? Let's build something legendary together." }
                    a.contact-mail href=(content::mailto()) { (CONTACT_EMAIL) }
                    address {
                        @for line in STUDIO_ADDRESS {
                            p { (line) }
                        }
                        p { (STUDIO_PHONE) }
                    }
                }
                form.contact-form data-inert {
                    @for f in &CONTACT_FIELDS {
                        (field(f))
                    }
                    button.button.button-dark type="button" { "Send Request" }
                }
            }
        }
    }
}
