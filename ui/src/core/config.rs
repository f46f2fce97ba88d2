//! Site configuration.
//!
//! Defaults mirror the production site. Each value can be overridden when the
//! bundle is built:
//!
//! | variable                | field              |
//! |-------------------------|--------------------|
//! | `GOAT_API_BASE`         | `api_base`         |
//! | `GOAT_CONTACT_ENDPOINT` | `contact_endpoint` |
//! | `GOAT_WHATSAPP_NUMBER`  | `whatsapp_number`  |
//! | `GOAT_PROMO_ENABLED`    | `promo_enabled`    |
//! | `GOAT_PROMO_DELAY_MS`   | `promo_delay_ms`   |
//!
//! Overrides that fail to parse are logged and ignored.

use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Prefix for internal API routes. Empty on the web means "same origin".
    pub api_base: String,
    /// Third-party relay receiving the general contact form.
    pub contact_endpoint: String,
    /// International number without symbols, used for `wa.me` links.
    pub whatsapp_number: String,
    pub promo_enabled: bool,
    /// Delay before the promotional modal opens on the home page.
    pub promo_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base().to_string(),
            contact_endpoint: api::CONTACT_RELAY_URL.to_string(),
            whatsapp_number: "5491126578585".to_string(),
            promo_enabled: true,
            promo_delay_ms: 1500,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_api_base() -> &'static str {
    ""
}

// Native renderers have no page origin to resolve relative routes against.
#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> &'static str {
    "http://127.0.0.1:8080"
}

impl SiteConfig {
    /// Defaults plus whatever overrides were present at build time.
    pub fn from_build_env() -> Self {
        let overrides = [
            ("GOAT_API_BASE", option_env!("GOAT_API_BASE")),
            ("GOAT_CONTACT_ENDPOINT", option_env!("GOAT_CONTACT_ENDPOINT")),
            ("GOAT_WHATSAPP_NUMBER", option_env!("GOAT_WHATSAPP_NUMBER")),
            ("GOAT_PROMO_ENABLED", option_env!("GOAT_PROMO_ENABLED")),
            ("GOAT_PROMO_DELAY_MS", option_env!("GOAT_PROMO_DELAY_MS")),
        ];
        overrides
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .fold(Self::default(), |config, (key, value)| config.with_override(key, value))
    }

    /// Apply a single `KEY=value` override. Unknown keys and bad values are ignored.
    pub fn with_override(mut self, key: &str, value: &str) -> Self {
        let value = value.trim();
        match key {
            "GOAT_API_BASE" => self.api_base = value.trim_end_matches('/').to_string(),
            "GOAT_CONTACT_ENDPOINT" if !value.is_empty() => {
                self.contact_endpoint = value.to_string()
            }
            "GOAT_WHATSAPP_NUMBER" if value.chars().any(|c| c.is_ascii_digit()) => {
                self.whatsapp_number = value.chars().filter(char::is_ascii_digit).collect()
            }
            "GOAT_PROMO_ENABLED" => match parse_flag(value) {
                Some(flag) => self.promo_enabled = flag,
                None => warn!("[config] ignoring {key}={value:?}: expected a boolean"),
            },
            "GOAT_PROMO_DELAY_MS" => match value.parse::<u64>() {
                Ok(ms) => self.promo_delay_ms = ms,
                Err(err) => warn!("[config] ignoring {key}={value:?}: {err}"),
            },
            _ => warn!("[config] ignoring {key}={value:?}"),
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(SiteConfig::from_build_env);

/// Process-wide configuration, resolved on first use.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_live_site() {
        let config = SiteConfig::default();
        assert_eq!(config.contact_endpoint, "https://formspree.io/f/xgvknbkj");
        assert_eq!(config.whatsapp_number, "5491126578585");
        assert!(config.promo_enabled);
        assert_eq!(config.promo_delay_ms, 1500);
    }

    #[test]
    fn overrides_apply() {
        let config = SiteConfig::default()
            .with_override("GOAT_API_BASE", "https://api.goat.example/")
            .with_override("GOAT_WHATSAPP_NUMBER", "+54 9 11 0000-0000")
            .with_override("GOAT_PROMO_ENABLED", "off")
            .with_override("GOAT_PROMO_DELAY_MS", "250");
        assert_eq!(config.api_base, "https://api.goat.example");
        assert_eq!(config.whatsapp_number, "5491100000000");
        assert!(!config.promo_enabled);
        assert_eq!(config.promo_delay_ms, 250);
    }

    #[test]
    fn bad_overrides_keep_defaults() {
        let config = SiteConfig::default()
            .with_override("GOAT_PROMO_DELAY_MS", "soon")
            .with_override("GOAT_PROMO_ENABLED", "maybe")
            .with_override("GOAT_CONTACT_ENDPOINT", "  ")
            .with_override("GOAT_UNKNOWN", "x");
        assert_eq!(config, SiteConfig::default());
    }
}
