//! Shared UI crate for the GOAT Sports site: the submittable-form core, the
//! forms built on it, localized components and page views.

pub mod content;
pub mod core;
pub mod forms;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod floating_whatsapp;
    pub use floating_whatsapp::FloatingWhatsApp;

    mod promo_modal;
    pub use promo_modal::PromoModal;

    mod home_sections;
    pub use home_sections::{
        CampusEditions, ProgramsSection, SponsorsSection, StaffSection, TestimonialsSection,
    };

    mod site_footer;
    pub use site_footer::SiteFooter;
}
