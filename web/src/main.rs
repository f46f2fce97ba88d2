use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, FloatingWhatsApp, NavBuilder, SiteFooter};
use ui::views::{CampusRegistration, Home, TrainingRegistration};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/inscripcion-campus")]
    CampusRegistration {},
    #[route("/registro")]
    TrainingRegistration {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_campus(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::CampusRegistration {},
        "{label}"
    })
}
fn nav_training(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::TrainingRegistration {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            campus: nav_campus,
            training: nav_training,
        });
    }
    // AppNavbar writes the selected language here.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Keyed by language so every localized string is rebuilt on a switch.
        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout around the shared `ui` chrome, typed on this crate's `Route`.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        main { Outlet::<Route> {} }
        SiteFooter { }
        FloatingWhatsApp { }
    }
}
