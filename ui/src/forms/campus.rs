//! Campus registration, with the manual QR payment detour.

use api::Endpoint;
use dioxus::prelude::*;

use crate::core::form::SuccessKind;
use crate::core::presenter::{affordance, status_class, Panel};
use crate::core::schema::{FieldKind, FieldSpec, FormSchema, QrPayment};
use crate::core::transport::Transport;
use crate::t;

use super::fields::{
    error_banner, input_field, radio_group, select_field, submit_button, InputSpec,
};
use super::hook::{use_http_form, FormHandle};

const QR_CODE: Asset = asset!("/assets/payments/mercadopago-qr.svg");

/// Payment method that routes through the QR panel instead of the endpoint.
pub const QR_METHOD: &str = "mercadopago";

const EXPERIENCE_LEVELS: &[&str] = &["Principiante", "Intermedio", "Avanzado", "Elite"];
const PAYMENT_METHODS: &[&str] = &["cash", "transfer", QR_METHOD];

pub static CAMPUS_FORM: FormSchema = FormSchema {
    id: "campus",
    endpoint: Endpoint::CampusRegistration,
    fields: &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::required("phone", FieldKind::Tel),
        FieldSpec::required("age", FieldKind::Number { min: 8, max: 30 }),
        FieldSpec::required("experience", FieldKind::Choice(EXPERIENCE_LEVELS)),
        FieldSpec::optional("club", FieldKind::Text),
        FieldSpec::required("paymentMethod", FieldKind::Choice(PAYMENT_METHODS)),
    ],
    fallback_error,
    qr_payment: Some(QrPayment {
        field: "paymentMethod",
        method: QR_METHOD,
    }),
};

fn fallback_error() -> String {
    t!("campus-error")
}

#[component]
pub fn CampusRegistrationForm() -> Element {
    let form = use_http_form(&CAMPUS_FORM);
    let status = form.status();
    let view = affordance(status);
    let container_class = format!("{} campus-form", status_class(status));

    let body = match view.panel {
        Panel::Payment => payment_panel(form),
        Panel::Confirmation => success_panel(form),
        Panel::Form => rsx! {
            form {
                class: "submittable__form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    form.submit();
                },
                h2 { {t!("campus-form-title")} }
                {input_field(
                    form,
                    InputSpec::new("name", t!("campus-name")).autocomplete("name"),
                )}
                {input_field(
                    form,
                    InputSpec::new("email", t!("campus-email")).autocomplete("email"),
                )}
                {input_field(
                    form,
                    InputSpec::new("phone", t!("campus-phone")).autocomplete("tel"),
                )}
                {input_field(form, InputSpec::new("age", t!("campus-age")))}
                {select_field(
                    form,
                    InputSpec::new("experience", t!("campus-experience")),
                    t!("campus-select-level"),
                    vec![
                        ("Principiante", t!("campus-level-beginner")),
                        ("Intermedio", t!("campus-level-intermediate")),
                        ("Avanzado", t!("campus-level-advanced")),
                        ("Elite", t!("campus-level-elite")),
                    ],
                )}
                {input_field(form, InputSpec::new("club", t!("campus-club")))}
                {radio_group(
                    form,
                    "paymentMethod",
                    t!("campus-payment-method"),
                    vec![
                        ("cash", t!("campus-payment-cash")),
                        ("transfer", t!("campus-payment-transfer")),
                        (QR_METHOD, t!("campus-payment-mercadopago")),
                    ],
                )}
                if form.value("paymentMethod") == QR_METHOD {
                    {qr_reminder(form)}
                }
                {error_banner(view, form.error_message())}
                {submit_button(view, t!("campus-submit"), t!("campus-processing"))}
            }
        },
    };

    rsx! {
        div { class: "{container_class}", {body} }
    }
}

fn payment_panel<T: Transport + Clone + 'static>(form: FormHandle<T>) -> Element {
    rsx! {
        div { class: "submittable__payment",
            h3 { {t!("campus-pay-with-mercadopago")} }
            img {
                class: "submittable__payment-qr",
                src: QR_CODE,
                alt: t!("campus-qr-alt"),
            }
            p { {t!("campus-scan-qr")} }
            div { class: "submittable__payment-actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| form.confirm_payment(),
                    {t!("campus-payment-complete")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| form.leave_payment(),
                    {t!("campus-back-to-form")}
                }
            }
        }
    }
}

/// Shown in the form while the QR method stays selected after leaving the panel.
fn qr_reminder<T: Transport + Clone + 'static>(form: FormHandle<T>) -> Element {
    rsx! {
        div { class: "submittable__qr-reminder",
            img {
                class: "submittable__qr-reminder-code",
                src: QR_CODE,
                alt: t!("campus-qr-alt"),
            }
            p { {t!("campus-scan-qr")} }
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| form.open_payment(),
                {t!("campus-open-payment")}
            }
        }
    }
}

fn success_panel<T: Transport + Clone + 'static>(form: FormHandle<T>) -> Element {
    let detail = match form.success_kind() {
        Some(SuccessKind::PaymentSelfReported) => t!("campus-success-payment-reported"),
        _ => t!("campus-success-and-payment"),
    };

    rsx! {
        div { class: "submittable__success",
            h3 { {t!("campus-success-title")} }
            p { {t!("campus-success-message")} " " "{detail}" }
            button {
                r#type: "button",
                class: "button button--accent",
                onclick: move |_| form.reset(),
                {t!("campus-new-registration")}
            }
        }
    }
}
