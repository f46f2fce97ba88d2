//! Static home page content: programs, staff, campus editions, testimonials,
//! sponsors and the footer's contact details.
//!
//! Proper names stay literal; everything a visitor reads as prose goes through
//! the loader, so entries hold lookups rather than strings.

use crate::t;

/// A localized string resolved at render time.
pub type Text = fn() -> String;

pub const CONTACT_EMAIL: &str = "hola@goatsports.ar";
pub const ADDRESS: &str = "San Martin 1649, Vicente Lopez, Buenos Aires";
pub const JOBS_URL: &str = "https://www.linkedin.com/jobs/goat-sports-jobs-worldwide";

pub struct Program {
    pub id: &'static str,
    pub title: Text,
    pub description: Text,
    pub schedule: Text,
}

pub static PROGRAMS: &[Program] = &[
    Program {
        id: "personal",
        title: || t!("program-personal-title"),
        description: || t!("program-personal-description"),
        schedule: || t!("program-personal-schedule"),
    },
    Program {
        id: "academies",
        title: || t!("program-academies-title"),
        description: || t!("program-academies-description"),
        schedule: || t!("program-academies-schedule"),
    },
    Program {
        id: "teams",
        title: || t!("program-teams-title"),
        description: || t!("program-teams-description"),
        schedule: || t!("program-teams-schedule"),
    },
];

pub struct Highlight {
    pub title: Text,
    pub description: Text,
}

pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: || t!("about-coaches-title"),
        description: || t!("about-coaches-description"),
    },
    Highlight {
        title: || t!("about-personalized-title"),
        description: || t!("about-personalized-description"),
    },
    Highlight {
        title: || t!("about-facilities-title"),
        description: || t!("about-facilities-description"),
    },
    Highlight {
        title: || t!("about-results-title"),
        description: || t!("about-results-description"),
    },
];

pub struct StaffMember {
    pub name: &'static str,
    pub role: Text,
    pub bio: Text,
}

pub static STAFF: &[StaffMember] = &[
    StaffMember {
        name: "Santiago Tarazona",
        role: || t!("staff-role-cofounder"),
        bio: || t!("staff-bio-tarazona"),
    },
    StaffMember {
        name: "Gonzalo Basualdo",
        role: || t!("staff-role-cofounder"),
        bio: || t!("staff-bio-basualdo"),
    },
    StaffMember {
        name: "Thomas Habif",
        role: || t!("staff-role-cofounder"),
        bio: || t!("staff-bio-habif"),
    },
    StaffMember {
        name: "Ignacio Anaya",
        role: || t!("staff-role-cofounder"),
        bio: || t!("staff-bio-anaya"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditionStatus {
    /// Announced; registration opens later.
    ComingSoon,
    Open,
    Past,
}

pub struct CampusEdition {
    pub id: &'static str,
    pub title: &'static str,
    pub date: Text,
    pub location: &'static str,
    pub description: Text,
    pub status: EditionStatus,
    /// Microsite of the edition.
    pub link: &'static str,
    pub gallery: Option<&'static str>,
}

impl CampusEdition {
    pub fn is_past(&self) -> bool {
        self.status == EditionStatus::Past
    }
}

/// Newest first.
pub static CAMPUS_EDITIONS: &[CampusEdition] = &[
    CampusEdition {
        id: "summer-2026",
        title: "Campus Verano 2026 GEBA",
        date: || t!("edition-summer-2026-date"),
        location: "Ciudad de Buenos Aires",
        description: || t!("edition-summer-2026-description"),
        status: EditionStatus::ComingSoon,
        link: "https://summer.goatsports.ar",
        gallery: None,
    },
    CampusEdition {
        id: "rosario-2025",
        title: "Campus Verano 2025 Rosario",
        date: || t!("edition-rosario-2025-date"),
        location: "Rosario, Santa Fe",
        description: || t!("edition-rosario-2025-description"),
        status: EditionStatus::Past,
        link: "https://rosario.goatsports.ar",
        gallery: None,
    },
    CampusEdition {
        id: "summer-2025",
        title: "Campus Verano 2025 GEBA",
        date: || t!("edition-summer-2025-date"),
        location: "Ciudad de Buenos Aires",
        description: || t!("edition-summer-2025-description"),
        status: EditionStatus::Past,
        link: "https://summer.goatsports.ar",
        gallery: Some(
            "https://drive.google.com/drive/u/0/folders/1bsYB7a6nSPdCvlogMs8gukOTYH0Fq-Nr",
        ),
    },
    CampusEdition {
        id: "winter-2025",
        title: "Campus Invierno 2025 GEBA",
        date: || t!("edition-winter-2025-date"),
        location: "Ciudad de Buenos Aires",
        description: || t!("edition-winter-2025-description"),
        status: EditionStatus::Past,
        link: "https://winter25.goatsports.ar",
        gallery: Some(
            "https://drive.google.com/drive/folders/1EbotRoIMf4MHTL7ar82Q1Ku6ftFJKHo7",
        ),
    },
    CampusEdition {
        id: "gba-sur-2025",
        title: "Campus GBA Sur 2025 MGRC",
        date: || t!("edition-gba-sur-2025-date"),
        location: "Monte Grande, Provincia de Buenos Aires",
        description: || t!("edition-gba-sur-2025-description"),
        status: EditionStatus::Past,
        link: "https://montegrande.goatsports.ar",
        gallery: Some(
            "https://drive.google.com/drive/u/0/folders/1eTnvBJl8nGCrNiUJOQlleytsRagyDOb_",
        ),
    },
];

/// Editions for one tab of the listing, keeping catalog order.
pub fn editions(past: bool) -> impl Iterator<Item = &'static CampusEdition> {
    CAMPUS_EDITIONS
        .iter()
        .filter(move |edition| edition.is_past() == past)
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: Text,
    pub quote: Text,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Catalina",
        role: || t!("testimonial-catalina-role"),
        quote: || t!("testimonial-catalina-quote"),
    },
    Testimonial {
        name: "Angie",
        role: || t!("testimonial-angie-role"),
        quote: || t!("testimonial-angie-quote"),
    },
    Testimonial {
        name: "Martina",
        role: || t!("testimonial-martina-role"),
        quote: || t!("testimonial-martina-quote"),
    },
    Testimonial {
        name: "Sofía",
        role: || t!("testimonial-sofia-role"),
        quote: || t!("testimonial-sofia-quote"),
    },
];

/// Avatar initials: first letter of the first two words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub struct Sponsor {
    pub name: &'static str,
    pub url: Option<&'static str>,
    /// Shown on its own row above the rest.
    pub featured: bool,
}

pub static SPONSORS: &[Sponsor] = &[
    Sponsor {
        name: "Dole",
        url: None,
        featured: false,
    },
    Sponsor {
        name: "Treos",
        url: None,
        featured: false,
    },
    Sponsor {
        name: "Vlack",
        url: Some("https://vlackhockey.com.ar"),
        featured: true,
    },
    Sponsor {
        name: "Maraton",
        url: None,
        featured: false,
    },
    Sponsor {
        name: "Algabo",
        url: None,
        featured: false,
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/profile.php?id=61575793396752",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/goatsports.arg",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/company/goatsportsar",
    },
];

/// In-page anchors of the home sections, as linked from the footer.
pub struct Anchor {
    pub id: &'static str,
    pub label: Text,
}

pub static HOME_ANCHORS: &[Anchor] = &[
    Anchor {
        id: "services",
        label: || t!("section-services"),
    },
    Anchor {
        id: "staff",
        label: || t!("section-staff"),
    },
    Anchor {
        id: "campus",
        label: || t!("section-campus"),
    },
    Anchor {
        id: "testimonials",
        label: || t!("section-testimonials"),
    },
    Anchor {
        id: "contact",
        label: || t!("section-contact"),
    },
];
