use crate::core::{config, links};
use crate::i18n::{self};
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` so `ui` can render localized links
/// without knowing the platform's `Route` enum. Each function receives the
/// localized label and returns a `Link` containing it:
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     campus: |label| rsx!( Link { class: "navbar__link", to: Route::Campus {}, "{label}" } ),
///     training: |label| rsx!( Link { class: "navbar__link", to: Route::Training {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder, `AppNavbar` renders its `children` instead.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub campus: fn(label: &str) -> Element,
    pub training: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let mut menu_open = use_signal(|| false);
    let show_switcher = langs().len() > 1;
    // Global language code signal, when the platform provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    debug!("[i18n] AppNavbar render lang={}", current_lang());

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let campus = (b.campus)(&t!("nav-campus"));
        let training = (b.training)(&t!("nav-training"));
        rsx! {
            {home}
            {campus}
            {training}
        }
    });

    let whatsapp = links::whatsapp_link(
        &config::site().whatsapp_number,
        &t!("whatsapp-training-message"),
    );
    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "GOAT Sports" }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: t!("nav-menu-label"),
                    onclick: move |_| menu_open.set(!menu_open()),
                    "☰"
                }

                nav { class: links_class,
                    if let Some(nav) = internal_nav {
                        {nav}
                    } else {
                        {children}
                    }
                    a {
                        class: "navbar__cta button button--accent",
                        href: "{whatsapp}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("nav-whatsapp-cta")}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
