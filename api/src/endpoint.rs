/// Fixed third-party endpoint that relays the general contact form by email.
pub const CONTACT_RELAY_URL: &str = "https://formspree.io/f/xgvknbkj";

/// Header carrying the per-attempt deduplication token.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Every destination a form can post to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CampusRegistration,
    Newsletter,
    TrainingRegistration,
    /// Third-party relay; its URL comes from configuration, not from the API base.
    ContactRelay,
}

impl Endpoint {
    /// Route below the API base for internal endpoints, `None` for the relay.
    pub const fn route(self) -> Option<&'static str> {
        match self {
            Self::CampusRegistration => Some("/api/campus-registration"),
            Self::Newsletter => Some("/api/subscribe"),
            Self::TrainingRegistration => Some("/api/training-registration"),
            Self::ContactRelay => None,
        }
    }

    /// Absolute (or page-relative, when `api_base` is empty) URL to post to.
    pub fn url(self, api_base: &str, relay_url: &str) -> String {
        match self.route() {
            Some(route) => format!("{}{route}", api_base.trim_end_matches('/')),
            None => relay_url.to_string(),
        }
    }

    /// The relay only answers with JSON when asked to.
    pub const fn wants_json_accept(self) -> bool {
        matches!(self, Self::ContactRelay)
    }

    /// Short label used in log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CampusRegistration => "campus-registration",
            Self::Newsletter => "newsletter",
            Self::TrainingRegistration => "training-registration",
            Self::ContactRelay => "contact-relay",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_routes_join_the_base() {
        assert_eq!(
            Endpoint::Newsletter.url("https://goat.example/", CONTACT_RELAY_URL),
            "https://goat.example/api/subscribe"
        );
        assert_eq!(
            Endpoint::CampusRegistration.url("", CONTACT_RELAY_URL),
            "/api/campus-registration"
        );
    }

    #[test]
    fn relay_ignores_the_base() {
        assert_eq!(
            Endpoint::ContactRelay.url("https://goat.example", CONTACT_RELAY_URL),
            CONTACT_RELAY_URL
        );
        assert!(Endpoint::ContactRelay.wants_json_accept());
        assert!(!Endpoint::Newsletter.wants_json_accept());
    }
}
