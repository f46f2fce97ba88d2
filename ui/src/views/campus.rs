use dioxus::prelude::*;

use crate::forms::CampusRegistrationForm;
use crate::t;

#[component]
pub fn CampusRegistration() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let features = [
        t!("campus-feature-coaching"),
        t!("campus-feature-technique"),
        t!("campus-feature-tactics"),
        t!("campus-feature-fitness"),
        t!("campus-feature-video"),
        t!("campus-feature-kit"),
    ];

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-campus",
            a { class: "page-campus__back", href: "/", "← " {t!("campus-back")} }

            header { class: "page-campus__header",
                h1 { {t!("campus-title")} }
                p { {t!("campus-date")} }
            }

            div { class: "page-campus__grid",
                div { class: "page-campus__info",
                    h2 { {t!("campus-info")} }
                    ul { class: "page-campus__features",
                        for (i, feature) in features.iter().enumerate() {
                            li { key: "{i}", "✓ {feature}" }
                        }
                    }
                    h3 { {t!("campus-price")} }
                    p { class: "page-campus__price", {t!("campus-price-value")} }
                    p { class: "page-campus__installments", {t!("campus-installments")} }
                }
                CampusRegistrationForm {}
            }
        }
    }
}
