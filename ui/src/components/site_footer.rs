use dioxus::prelude::*;

use crate::content::{
    Anchor, SocialLink, ADDRESS, CONTACT_EMAIL, HOME_ANCHORS, JOBS_URL, SOCIAL_LINKS,
};
use crate::core::{config, links};
use crate::t;

/// Site footer: social links, home sections, contact details and opening hours.
#[component]
pub fn SiteFooter() -> Element {
    let number = &config::site().whatsapp_number;
    let phone_href = links::tel_link(number);
    let phone_label = format!("+{number}");
    let mail_href = links::mailto_link(CONTACT_EMAIL);
    let whatsapp = links::whatsapp_link(number, &t!("whatsapp-message"));

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__grid",
                div { class: "site-footer__brand",
                    strong { "GOAT Sports" }
                    p { {t!("tagline")} }
                    ul { class: "site-footer__social",
                        {SOCIAL_LINKS.iter().map(social_item)}
                        li {
                            a {
                                href: "{whatsapp}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "WhatsApp"
                            }
                        }
                    }
                }
                nav { class: "site-footer__links", aria_label: t!("footer-quick-links"),
                    h3 { {t!("footer-quick-links")} }
                    ul { {HOME_ANCHORS.iter().map(anchor_item)} }
                }
                div { class: "site-footer__contact",
                    h3 { {t!("footer-contact")} }
                    p { {ADDRESS} }
                    p { a { href: "{phone_href}", "{phone_label}" } }
                    p { a { href: "{mail_href}", {CONTACT_EMAIL} } }
                }
                div { class: "site-footer__hours",
                    h3 { {t!("footer-hours")} }
                    p { {t!("footer-hours-weekdays")} }
                    p { {t!("footer-hours-saturday")} }
                    a {
                        class: "button button--ghost",
                        href: JOBS_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("footer-join-team")}
                    }
                }
            }
            p { class: "site-footer__copyright", {t!("footer-copyright")} }
        }
    }
}

fn social_item(link: &SocialLink) -> Element {
    let label = link.label;
    let url = link.url;
    rsx! {
        li { key: "{label}",
            a {
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{label}"
            }
        }
    }
}

fn anchor_item(anchor: &Anchor) -> Element {
    let id = anchor.id;
    rsx! {
        li { key: "{id}",
            a { href: "/#{id}", {(anchor.label)()} }
        }
    }
}
