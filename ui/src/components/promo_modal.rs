use dioxus::prelude::*;

use crate::core::{config, links, platform};
use crate::t;

/// Promotional dialog that opens once, a short while after the page mounts.
/// Unmounting the page before the delay elapses cancels it.
#[component]
pub fn PromoModal() -> Element {
    let mut open = use_signal(|| false);

    use_hook(move || {
        let settings = config::site();
        if settings.promo_enabled {
            let delay = settings.promo_delay_ms;
            spawn(async move {
                platform::sleep_ms(delay).await;
                open.set(true);
            });
        }
    });

    if !open() {
        return rsx! {};
    }

    let whatsapp = links::whatsapp_link(
        &config::site().whatsapp_number,
        &t!("promo-whatsapp-message"),
    );

    rsx! {
        div {
            class: "promo-modal__backdrop",
            onclick: move |_| open.set(false),
            div {
                class: "promo-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "promo-modal-title",
                // Clicks inside the dialog must not reach the backdrop.
                onclick: move |evt| evt.stop_propagation(),
                button {
                    r#type: "button",
                    class: "promo-modal__close",
                    aria_label: t!("promo-close"),
                    onclick: move |_| open.set(false),
                    "✕"
                }
                span { class: "promo-modal__badge", {t!("promo-badge")} }
                h2 { id: "promo-modal-title", class: "promo-modal__title", {t!("promo-title")} }
                p { class: "promo-modal__lead", {t!("promo-lead")} }
                ul { class: "promo-modal__highlights",
                    li { {t!("promo-highlight-scholarships")} }
                    li { {t!("promo-highlight-coaches")} }
                    li { {t!("promo-highlight-video")} }
                }
                div { class: "promo-modal__actions",
                    a {
                        class: "button button--primary",
                        href: "{whatsapp}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("promo-cta")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| open.set(false),
                        {t!("promo-dismiss")}
                    }
                }
            }
        }
    }
}
