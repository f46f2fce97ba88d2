use dioxus::prelude::*;

use crate::components::{
    CampusEditions, ProgramsSection, PromoModal, SponsorsSection, StaffSection,
    TestimonialsSection,
};
use crate::core::{config, links};
use crate::forms::{ContactForm, NewsletterForm};
use crate::t;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    dioxus::logger::tracing::trace!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        log_home_render(&lang_marker);
    }

    let number = &config::site().whatsapp_number;
    let phone_href = links::tel_link(number);
    let phone_label = format!("+{number}");

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            div { class: "page-home__hero",
                h1 { {t!("home-title")} }
                p { class: "page-home__tagline", {t!("home-tagline")} }
                a { class: "button button--primary", href: "#contact", {t!("home-cta")} }
            }

            ul { class: "page-home__features",
                li { {t!("home-feature-academy")} }
                li { {t!("home-feature-personal")} }
                li { {t!("home-feature-campus")} }
            }

            ProgramsSection {}
            StaffSection {}
            CampusEditions {}
            TestimonialsSection {}

            section { id: "contact", class: "page-home__contact",
                h2 { {t!("contact-title")} }
                p { {t!("contact-description")} }
                p { a { class: "page-home__phone", href: "{phone_href}", "{phone_label}" } }
                ContactForm {}
            }

            NewsletterForm {}
            SponsorsSection {}
        }
        PromoModal {}
    }
}
