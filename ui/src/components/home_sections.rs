use dioxus::prelude::*;

use crate::content::{
    self, CampusEdition, EditionStatus, Program, Sponsor, StaffMember, Testimonial,
    CAMPUS_EDITIONS, HIGHLIGHTS, PROGRAMS, SPONSORS, STAFF, TESTIMONIALS,
};
use crate::t;

#[component]
pub fn ProgramsSection() -> Element {
    rsx! {
        section { id: "services", class: "home-section programs",
            h2 { class: "home-section__title", {t!("programs-title")} }
            p { class: "home-section__lead", {t!("programs-description")} }
            div { class: "programs__grid", {PROGRAMS.iter().map(program_card)} }
        }
    }
}

fn program_card(program: &Program) -> Element {
    let id = program.id;
    rsx! {
        article { key: "{id}", class: "programs__card",
            h3 { {(program.title)()} }
            p { {(program.description)()} }
            p { class: "programs__schedule", {(program.schedule)()} }
        }
    }
}

/// Why train with us, followed by the founding coaches.
#[component]
pub fn StaffSection() -> Element {
    rsx! {
        section { id: "staff", class: "home-section staff",
            h2 { class: "home-section__title", {t!("staff-title")} }
            p { class: "home-section__lead", {t!("staff-description")} }
            ul { class: "staff__highlights",
                for (index, highlight) in HIGHLIGHTS.iter().enumerate() {
                    li { key: "{index}",
                        h3 { {(highlight.title)()} }
                        p { {(highlight.description)()} }
                    }
                }
            }
            h3 { class: "staff__team-title", {t!("staff-team-title")} }
            div { class: "staff__grid", {STAFF.iter().map(staff_card)} }
        }
    }
}

fn staff_card(member: &StaffMember) -> Element {
    let name = member.name;
    let initials = content::initials(name);
    rsx! {
        article { key: "{name}", class: "staff__card",
            span { class: "staff__avatar", aria_hidden: "true", "{initials}" }
            h4 { "{name}" }
            p { class: "staff__role", {(member.role)()} }
            p { {(member.bio)()} }
        }
    }
}

/// Campus editions in two tabs: upcoming and past.
#[component]
pub fn CampusEditions() -> Element {
    let mut show_past = use_signal(|| false);
    let past = show_past();
    let empty = CAMPUS_EDITIONS.iter().all(|edition| edition.is_past() != past);

    rsx! {
        section { id: "campus", class: "home-section campus-editions",
            h2 { class: "home-section__title", {t!("editions-title")} }
            p { class: "home-section__lead", {t!("editions-description")} }
            div { class: "campus-editions__tabs", role: "tablist",
                button {
                    r#type: "button",
                    role: "tab",
                    class: tab_class(!past),
                    aria_selected: !past,
                    onclick: move |_| show_past.set(false),
                    {t!("editions-upcoming")}
                }
                button {
                    r#type: "button",
                    role: "tab",
                    class: tab_class(past),
                    aria_selected: past,
                    onclick: move |_| show_past.set(true),
                    {t!("editions-past")}
                }
            }
            div { class: "campus-editions__list", {content::editions(past).map(edition_card)} }
            if empty {
                p { class: "campus-editions__empty", {t!("editions-empty")} }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "campus-editions__tab campus-editions__tab--active"
    } else {
        "campus-editions__tab"
    }
}

fn edition_card(edition: &CampusEdition) -> Element {
    let id = edition.id;
    let title = edition.title;
    let meta = format!("{} · {}", (edition.date)(), edition.location);
    let link = edition.link;

    rsx! {
        article { key: "{id}", class: "campus-editions__card",
            {status_badge(edition.status)}
            h3 { "{title}" }
            p { class: "campus-editions__meta", "{meta}" }
            p { {(edition.description)()} }
            div { class: "campus-editions__links",
                a {
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {t!("editions-visit-site")}
                }
                if let Some(gallery) = edition.gallery {
                    a {
                        href: "{gallery}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("editions-gallery")}
                    }
                }
            }
        }
    }
}

fn status_badge(status: EditionStatus) -> Element {
    let label = match status {
        EditionStatus::ComingSoon => t!("editions-coming-soon"),
        EditionStatus::Open => t!("editions-open"),
        EditionStatus::Past => return rsx! {},
    };
    rsx! {
        span { class: "campus-editions__badge", "{label}" }
    }
}

#[component]
pub fn TestimonialsSection() -> Element {
    rsx! {
        section { id: "testimonials", class: "home-section testimonials",
            h2 { class: "home-section__title", {t!("testimonials-title")} }
            p { class: "home-section__lead", {t!("testimonials-description")} }
            div { class: "testimonials__grid", {TESTIMONIALS.iter().map(testimonial_card)} }
        }
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Element {
    let name = testimonial.name;
    let initials = content::initials(name);
    rsx! {
        figure { key: "{name}", class: "testimonials__card",
            blockquote { {(testimonial.quote)()} }
            figcaption {
                span { class: "testimonials__avatar", aria_hidden: "true", "{initials}" }
                strong { "{name}" }
                span { class: "testimonials__role", {(testimonial.role)()} }
            }
        }
    }
}

/// Sponsor wordmarks, the featured one on its own row.
#[component]
pub fn SponsorsSection() -> Element {
    rsx! {
        section { class: "home-section sponsors",
            h2 { class: "home-section__title", {t!("sponsors-title")} }
            div { class: "sponsors__featured",
                {SPONSORS.iter().filter(|s| s.featured).map(sponsor_mark)}
            }
            div { class: "sponsors__row",
                {SPONSORS.iter().filter(|s| !s.featured).map(sponsor_mark)}
            }
        }
    }
}

fn sponsor_mark(sponsor: &Sponsor) -> Element {
    let name = sponsor.name;
    match sponsor.url {
        Some(url) => rsx! {
            a {
                key: "{name}",
                class: "sponsors__mark",
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{name}"
            }
        },
        None => rsx! {
            span { key: "{name}", class: "sponsors__mark", "{name}" }
        },
    }
}
