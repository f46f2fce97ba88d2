use api::Endpoint;
use dioxus::prelude::*;

use crate::core::presenter::{affordance, status_class, Panel};
use crate::core::schema::{FieldKind, FieldSpec, FormSchema};
use crate::t;

use super::fields::{error_banner, input_field, submit_button, textarea_field, InputSpec};
use super::hook::use_http_form;

/// General enquiries, relayed by email through the third-party form service.
pub static CONTACT_FORM: FormSchema = FormSchema {
    id: "contact",
    endpoint: Endpoint::ContactRelay,
    fields: &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::optional("phone", FieldKind::Tel),
        FieldSpec::required("message", FieldKind::LongText),
    ],
    fallback_error,
    qr_payment: None,
};

fn fallback_error() -> String {
    t!("contact-error")
}

#[component]
pub fn ContactForm() -> Element {
    let form = use_http_form(&CONTACT_FORM);
    let status = form.status();
    let view = affordance(status);
    let container_class = format!("{} contact-form", status_class(status));

    if view.panel == Panel::Confirmation {
        return rsx! {
            div { class: "{container_class}",
                div { class: "submittable__success",
                    h3 { {t!("contact-success-title")} }
                    p { {t!("contact-success-description")} }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| form.reset(),
                    {t!("contact-send-another")}
                }
            }
        };
    }

    rsx! {
        div { class: "{container_class}",
            form {
                class: "submittable__form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    form.submit();
                },
                div { class: "form-grid",
                    {input_field(form, InputSpec::new("name", t!("contact-name"))
                        .placeholder(t!("contact-name-placeholder"))
                        .autocomplete("name"))}
                    {input_field(form, InputSpec::new("email", t!("contact-email"))
                        .placeholder(t!("contact-email-placeholder"))
                        .autocomplete("email"))}
                }
                {input_field(form, InputSpec::new("phone", t!("contact-phone"))
                    .placeholder(t!("contact-phone-placeholder"))
                    .autocomplete("tel"))}
                {textarea_field(form, InputSpec::new("message", t!("contact-message"))
                    .placeholder(t!("contact-message-placeholder")), 4)}

                {error_banner(view, form.error_message())}
                {submit_button(view, t!("contact-submit"), t!("contact-sending"))}
            }
        }
    }
}
