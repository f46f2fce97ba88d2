//! Rendering helpers shared by the forms. Native constraint attributes
//! (`required`, `type`, `min`/`max`) come from the form's schema so the browser
//! and the controller agree on what is valid.

use dioxus::prelude::*;

use crate::core::presenter::{affordance, Affordance};
use crate::core::schema::{FieldIssue, FieldKind};
use crate::core::transport::Transport;
use crate::t;

use super::hook::FormHandle;

pub(crate) struct InputSpec {
    pub name: &'static str,
    pub label: String,
    pub placeholder: Option<String>,
    pub autocomplete: Option<&'static str>,
}

impl InputSpec {
    pub fn new(name: &'static str, label: String) -> Self {
        Self {
            name,
            label,
            placeholder: None,
            autocomplete: None,
        }
    }

    pub fn placeholder(mut self, text: String) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub fn autocomplete(mut self, hint: &'static str) -> Self {
        self.autocomplete = Some(hint);
        self
    }
}

/// Localized explanation for a rejected field.
pub fn describe_issue(issue: FieldIssue) -> String {
    match issue {
        FieldIssue::Missing => t!("field-issue-missing"),
        FieldIssue::InvalidEmail => t!("field-issue-invalid-email"),
        FieldIssue::InvalidDate => t!("field-issue-invalid-date"),
        FieldIssue::NotANumber => t!("field-issue-not-a-number"),
        FieldIssue::OutOfRange { min, max } => t!("field-issue-out-of-range", min = min, max = max),
        FieldIssue::UnknownChoice => t!("field-issue-unknown-choice"),
        FieldIssue::UnsupportedFile => t!("field-issue-unsupported-file"),
        FieldIssue::FileTooLarge { max_mb } => t!("field-issue-file-too-large", max = max_mb),
    }
}

fn element_id(form_id: &str, field: &str) -> String {
    format!("{form_id}-{field}")
}

/// Shared metadata every field helper needs.
struct FieldState {
    id: String,
    value: String,
    required: bool,
    kind: FieldKind,
    issue: Option<FieldIssue>,
    locked: bool,
    class: &'static str,
}

fn field_state<T: Transport + Clone + 'static>(form: FormHandle<T>, name: &str) -> FieldState {
    let schema = form.schema();
    let spec = schema.field(name);
    let issue = form.field_issue(name);
    FieldState {
        id: element_id(schema.id, name),
        value: form.value(name),
        required: spec.map(|s| s.required).unwrap_or(false),
        kind: spec.map(|s| s.kind).unwrap_or(FieldKind::Text),
        issue,
        locked: affordance(form.status()).inputs_locked,
        class: if issue.is_some() {
            "form-field form-field--invalid"
        } else {
            "form-field"
        },
    }
}

fn field_label(id: &str, label: &str, required: bool) -> Element {
    rsx! {
        label { r#for: "{id}", class: "form-field__label",
            "{label}"
            if required {
                span { class: "form-field__required", aria_hidden: "true", " *" }
            }
        }
    }
}

fn field_issue(issue: Option<FieldIssue>) -> Element {
    rsx! {
        if let Some(issue) = issue {
            p { class: "form-field__error", role: "alert", {describe_issue(issue)} }
        }
    }
}

pub(crate) fn input_field<T: Transport + Clone + 'static>(
    form: FormHandle<T>,
    spec: InputSpec,
) -> Element {
    let InputSpec {
        name,
        label,
        placeholder,
        autocomplete,
    } = spec;
    let state = field_state(form, name);
    let (min, max) = match state.kind {
        FieldKind::Number { min, max } => (Some(min.to_string()), Some(max.to_string())),
        _ => (None, None),
    };
    let id = state.id.clone();
    let value = state.value.clone();

    rsx! {
        div { class: state.class,
            {field_label(&state.id, &label, state.required)}
            input {
                id: "{id}",
                name: name,
                class: "form-field__input",
                r#type: state.kind.input_type(),
                value: "{value}",
                required: state.required,
                readonly: state.locked,
                min: min,
                max: max,
                placeholder: placeholder,
                autocomplete: autocomplete,
                oninput: move |evt| form.set_field(name, evt.value()),
            }
            {field_issue(state.issue)}
        }
    }
}

/// File picker whose field keeps the chosen file's name.
pub(crate) fn file_field<T: Transport + Clone + 'static>(
    form: FormHandle<T>,
    spec: InputSpec,
) -> Element {
    let InputSpec { name, label, .. } = spec;
    let state = field_state(form, name);
    let accept = match state.kind {
        FieldKind::Document { extensions, .. } => extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(","),
        _ => String::new(),
    };
    let id = state.id.clone();
    let chosen = state.value.clone();

    rsx! {
        div { class: state.class,
            {field_label(&state.id, &label, state.required)}
            input {
                id: "{id}",
                name: name,
                class: "form-field__input form-field__input--file",
                r#type: "file",
                accept: "{accept}",
                disabled: state.locked,
                onchange: move |evt: FormEvent| async move {
                    let Some(files) = evt.files() else {
                        return;
                    };
                    let Some(file_name) = files.files().into_iter().next() else {
                        form.set_field(name, String::new());
                        return;
                    };
                    let size = files.file_size(&file_name).await.unwrap_or_default();
                    form.attach_file(name, file_name, size);
                },
            }
            if !chosen.is_empty() {
                p { class: "form-field__file", "{chosen}" }
            }
            {field_issue(state.issue)}
        }
    }
}

pub(crate) fn textarea_field<T: Transport + Clone + 'static>(
    form: FormHandle<T>,
    spec: InputSpec,
    rows: u32,
) -> Element {
    let InputSpec {
        name,
        label,
        placeholder,
        ..
    } = spec;
    let state = field_state(form, name);
    let id = state.id.clone();
    let value = state.value.clone();

    rsx! {
        div { class: state.class,
            {field_label(&state.id, &label, state.required)}
            textarea {
                id: "{id}",
                name: name,
                class: "form-field__input form-field__input--multiline",
                rows: "{rows}",
                value: "{value}",
                required: state.required,
                readonly: state.locked,
                placeholder: placeholder,
                oninput: move |evt| form.set_field(name, evt.value()),
            }
            {field_issue(state.issue)}
        }
    }
}

pub(crate) fn select_field<T: Transport + Clone + 'static>(
    form: FormHandle<T>,
    spec: InputSpec,
    prompt: String,
    options: Vec<(&'static str, String)>,
) -> Element {
    let name = spec.name;
    let state = field_state(form, name);
    let id = state.id.clone();
    let current = state.value.clone();

    rsx! {
        div { class: state.class,
            {field_label(&state.id, &spec.label, state.required)}
            select {
                id: "{id}",
                name: name,
                class: "form-field__input",
                required: state.required,
                disabled: state.locked,
                value: "{current}",
                onchange: move |evt| form.set_field(name, evt.value()),
                option { value: "", "{prompt}" }
                for (value, label) in options {
                    option {
                        key: "{value}",
                        value: value,
                        selected: current == value,
                        "{label}"
                    }
                }
            }
            {field_issue(state.issue)}
        }
    }
}

/// Radio group. When `name` is the schema's QR payment field, picking an
/// option goes through the payment transition instead of a plain edit.
pub(crate) fn radio_group<T: Transport + Clone + 'static>(
    form: FormHandle<T>,
    name: &'static str,
    legend: String,
    options: Vec<(&'static str, String)>,
) -> Element {
    let state = field_state(form, name);
    let routes_payment = form
        .schema()
        .qr_payment
        .is_some_and(|qr| qr.field == name);
    let group_id = state.id.clone();

    rsx! {
        fieldset { class: state.class, disabled: state.locked,
            legend { class: "form-field__label",
                "{legend}"
                if state.required {
                    span { class: "form-field__required", aria_hidden: "true", " *" }
                }
            }
            for (value, label) in options {
                div { key: "{value}", class: "form-field__choice",
                    input {
                        r#type: "radio",
                        id: "{group_id}-{value}",
                        name: "{group_id}",
                        value: value,
                        required: state.required,
                        checked: state.value == value,
                        onchange: move |_| {
                            if routes_payment {
                                form.select_payment_method(value);
                            } else {
                                form.set_field(name, value.to_string());
                            }
                        },
                    }
                    label { r#for: "{group_id}-{value}", "{label}" }
                }
            }
            {field_issue(state.issue)}
        }
    }
}

pub(crate) fn submit_button(view: Affordance, label: String, busy_label: String) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "button button--primary submittable__submit",
            disabled: view.submit_disabled,
            if view.show_spinner {
                span { class: "spinner", aria_hidden: "true" }
                "{busy_label}"
            } else {
                "{label}"
            }
        }
    }
}

/// Inline banner shown above the submit control after a failed attempt.
pub(crate) fn error_banner(view: Affordance, message: Option<String>) -> Element {
    rsx! {
        if view.show_error {
            if let Some(message) = message {
                div { class: "submittable__error", role: "alert",
                    p { "{message}" }
                }
            }
        }
    }
}
