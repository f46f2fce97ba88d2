use dioxus::prelude::*;

use crate::forms::TrainingRegistrationForm;
use crate::t;

#[component]
pub fn TrainingRegistration() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-training",
            h1 { {t!("training-title")} }
            p { {t!("training-description")} }
            TrainingRegistrationForm {}
        }
    }
}
