use api::Endpoint;
use dioxus::prelude::*;

use crate::core::presenter::{affordance, status_class, Panel};
use crate::core::schema::{FieldKind, FieldSpec, FormSchema};
use crate::t;

use super::fields::{error_banner, input_field, submit_button, InputSpec};
use super::hook::use_http_form;

pub static NEWSLETTER_FORM: FormSchema = FormSchema {
    id: "newsletter",
    endpoint: Endpoint::Newsletter,
    fields: &[FieldSpec::required("email", FieldKind::Email)],
    fallback_error,
    qr_payment: None,
};

fn fallback_error() -> String {
    t!("newsletter-error")
}

#[component]
pub fn NewsletterForm() -> Element {
    let form = use_http_form(&NEWSLETTER_FORM);
    let status = form.status();
    let view = affordance(status);
    let container_class = format!("{} newsletter", status_class(status));

    rsx! {
        section { class: "{container_class}",
            h2 { {t!("newsletter-title")} }
            p { class: "newsletter__description", {t!("newsletter-description")} }

            if view.panel == Panel::Confirmation {
                div { class: "submittable__success",
                    p { class: "submittable__success-title", {t!("newsletter-success-title")} }
                    p { {t!("newsletter-success-description")} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| form.reset(),
                        {t!("newsletter-subscribe-another")}
                    }
                }
            } else {
                form {
                    class: "submittable__form newsletter__form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        form.submit();
                    },
                    {input_field(form, InputSpec::new("email", t!("newsletter-email"))
                        .placeholder(t!("newsletter-placeholder"))
                        .autocomplete("email"))}
                    {error_banner(view, form.error_message())}
                    {submit_button(view, t!("newsletter-submit"), t!("newsletter-submitting"))}
                }
            }
        }
    }
}
