use dioxus::prelude::*;

use crate::core::{config, links};
use crate::t;

/// Fixed chat button in the corner of every page.
#[component]
pub fn FloatingWhatsApp() -> Element {
    let href = links::whatsapp_link(&config::site().whatsapp_number, &t!("whatsapp-message"));

    rsx! {
        a {
            class: "floating-whatsapp",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "WhatsApp",
            span { class: "floating-whatsapp__icon", aria_hidden: "true", "💬" }
        }
    }
}
