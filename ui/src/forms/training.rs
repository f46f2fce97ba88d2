//! Training-plan registration: personal data, category, training type and a
//! weekly availability grid.

use api::Endpoint;
use dioxus::prelude::*;

use crate::core::presenter::{affordance, status_class, Panel};
use crate::core::schema::{FieldKind, FieldSpec, FormSchema};
use crate::core::transport::Transport;
use crate::t;

use super::fields::{
    describe_issue, error_banner, file_field, input_field, radio_group, select_field,
    submit_button, textarea_field, InputSpec,
};
use super::hook::{use_http_form, FormHandle};

const CATEGORIES: &[&str] = &[
    "Sub-12",
    "Sub-14",
    "Sub-16",
    "Sub-18",
    "Sub-21",
    "Primera",
    "Mamis Hockey",
    "Otra",
];

const TRAINING_TYPES: &[&str] = &["academia", "personalizado", "ambos"];

/// Weekday identifiers, in display order.
pub const WEEKDAYS: &[&str] = &["lunes", "martes", "miercoles", "jueves", "viernes"];
pub const FIRST_HOUR: u32 = 8;
/// Medical fitness certificate: a photo or a PDF of at most 5 MB.
const CERTIFICATE: FieldKind = FieldKind::Document {
    extensions: &["jpg", "jpeg", "png", "pdf"],
    max_bytes: 5 * 1024 * 1024,
};
pub const LAST_HOUR: u32 = 21;

pub static TRAINING_FORM: FormSchema = FormSchema {
    id: "training",
    endpoint: Endpoint::TrainingRegistration,
    fields: &[
        FieldSpec::required("firstName", FieldKind::Text),
        FieldSpec::required("lastName", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::required("phone", FieldKind::Tel),
        FieldSpec::required("birthDate", FieldKind::Date),
        FieldSpec::required("club", FieldKind::Text),
        FieldSpec::required("category", FieldKind::Choice(CATEGORIES)),
        FieldSpec::required("trainingType", FieldKind::Choice(TRAINING_TYPES)),
        FieldSpec::required("availability", FieldKind::SlotList),
        FieldSpec::required("medicalCertificate", CERTIFICATE),
        FieldSpec::optional("allergies", FieldKind::LongText),
        FieldSpec::required("objectives", FieldKind::LongText),
    ],
    fallback_error,
    qr_payment: None,
};

fn fallback_error() -> String {
    t!("training-error")
}

pub fn slot_id(day: &str, hour: u32) -> String {
    format!("{day}-{hour:02}")
}

/// Grid position of a slot, `None` for anything outside the grid.
fn slot_position(slot: &str) -> Option<(usize, u32)> {
    let (day, hour) = slot.rsplit_once('-')?;
    let day_index = WEEKDAYS.iter().position(|d| *d == day)?;
    let hour: u32 = hour.parse().ok()?;
    (FIRST_HOUR..=LAST_HOUR)
        .contains(&hour)
        .then_some((day_index, hour))
}

/// Toggle `slot` in a comma-separated availability list. The result is in
/// grid order, without duplicates or unknown slots.
pub fn toggle_slot(current: &str, slot: &str) -> String {
    let mut positions: Vec<(usize, u32)> = current
        .split(',')
        .filter_map(|s| slot_position(s.trim()))
        .collect();
    positions.sort_unstable();
    positions.dedup();

    if let Some(target) = slot_position(slot) {
        match positions.binary_search(&target) {
            Ok(index) => {
                positions.remove(index);
            }
            Err(index) => positions.insert(index, target),
        }
    }

    positions
        .into_iter()
        .map(|(day, hour)| slot_id(WEEKDAYS[day], hour))
        .collect::<Vec<_>>()
        .join(",")
}

fn has_slot(current: &str, slot: &str) -> bool {
    current.split(',').any(|s| s.trim() == slot)
}

fn weekday_label(day: &str) -> String {
    match day {
        "lunes" => t!("weekday-monday"),
        "martes" => t!("weekday-tuesday"),
        "miercoles" => t!("weekday-wednesday"),
        "jueves" => t!("weekday-thursday"),
        _ => t!("weekday-friday"),
    }
}

fn availability_grid<T: Transport + Clone + 'static>(form: FormHandle<T>) -> Element {
    let current = form.value("availability");
    let issue = form.field_issue("availability");
    let locked = affordance(form.status()).inputs_locked;
    let class = if issue.is_some() {
        "form-field availability form-field--invalid"
    } else {
        "form-field availability"
    };

    rsx! {
        fieldset { class: class, disabled: locked,
            legend { class: "form-field__label",
                {t!("training-availability")}
                span { class: "form-field__required", aria_hidden: "true", " *" }
            }
            p { class: "form-field__hint", {t!("training-availability-hint")} }
            for day in WEEKDAYS.iter().copied() {
                div { key: "{day}", class: "availability__day",
                    span { class: "availability__day-label", {weekday_label(day)} }
                    for hour in FIRST_HOUR..=LAST_HOUR {
                        label { key: "{day}-{hour}", class: "availability__slot",
                            input {
                                r#type: "checkbox",
                                checked: has_slot(&current, &slot_id(day, hour)),
                                onchange: move |_| {
                                    let slot = slot_id(day, hour);
                                    let next = toggle_slot(&form.value("availability"), &slot);
                                    form.set_field("availability", next);
                                },
                            }
                            "{hour}:00"
                        }
                    }
                }
            }
            if let Some(issue) = issue {
                p { class: "form-field__error", role: "alert", {describe_issue(issue)} }
            }
        }
    }
}

#[component]
pub fn TrainingRegistrationForm() -> Element {
    let form = use_http_form(&TRAINING_FORM);
    let status = form.status();
    let view = affordance(status);
    let container_class = format!("{} training-form", status_class(status));

    if view.panel == Panel::Confirmation {
        return rsx! {
            div { class: "{container_class}",
                div { class: "submittable__success",
                    h3 { {t!("training-success-title")} }
                    p { {t!("training-success-description")} }
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| form.reset(),
                        {t!("training-new-registration")}
                    }
                }
            }
        };
    }

    let categories: Vec<(&'static str, String)> = CATEGORIES
        .iter()
        .map(|c| (*c, c.to_string()))
        .collect();

    rsx! {
        div { class: "{container_class}",
            form {
                class: "submittable__form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    form.submit();
                },
                div { class: "submittable__intro", p { {t!("training-intro")} } }

                h2 { {t!("training-personal-data")} }
                div { class: "form-grid",
                    {input_field(form, InputSpec::new("firstName", t!("training-first-name"))
                        .placeholder(t!("training-first-name-placeholder"))
                        .autocomplete("given-name"))}
                    {input_field(form, InputSpec::new("lastName", t!("training-last-name"))
                        .placeholder(t!("training-last-name-placeholder"))
                        .autocomplete("family-name"))}
                    {input_field(form, InputSpec::new("email", t!("training-email"))
                        .placeholder(t!("training-email-placeholder"))
                        .autocomplete("email"))}
                    {input_field(form, InputSpec::new("phone", t!("training-phone"))
                        .autocomplete("tel"))}
                    {input_field(form, InputSpec::new("birthDate", t!("training-birth-date"))
                        .autocomplete("bday"))}
                    {input_field(form, InputSpec::new("club", t!("training-club")))}
                }
                {select_field(
                    form,
                    InputSpec::new("category", t!("training-category")),
                    t!("training-select-category"),
                    categories,
                )}

                h2 { {t!("training-plan")} }
                {radio_group(
                    form,
                    "trainingType",
                    t!("training-type"),
                    vec![
                        ("academia", t!("training-type-academy")),
                        ("personalizado", t!("training-type-personal")),
                        ("ambos", t!("training-type-both")),
                    ],
                )}
                {availability_grid(form)}

                h2 { {t!("training-health-goals")} }
                {file_field(form, InputSpec::new("medicalCertificate", t!("training-certificate")))}
                p { class: "form-field__hint", {t!("training-certificate-hint")} }
                {textarea_field(form, InputSpec::new("allergies", t!("training-allergies"))
                    .placeholder(t!("training-allergies-placeholder")), 3)}
                {textarea_field(form, InputSpec::new("objectives", t!("training-objectives"))
                    .placeholder(t!("training-objectives-placeholder")), 4)}

                {error_banner(view, form.error_message())}
                {submit_button(view, t!("training-submit"), t!("training-sending"))}
            }
        }
    }
}
