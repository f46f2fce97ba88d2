//! Localization for `goat-sports-ui`.
//!
//! Stack: `i18n-embed` selects languages and loads assets, `fluent` formats
//! messages, `rust-embed` compiles the `.ftl` files into the binary and
//! `i18n-embed-fl` checks message ids at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/goat-sports-ui.ftl   (fallback/reference)
//!   es-ES/goat-sports-ui.ftl
//! ```
//!
//! Call `init()` once at startup (it is idempotent), then look messages up
//! with the `t!` macro:
//! ```ignore
//! use crate::t;
//! let label = t!("nav-home");
//! let issue = t!("field-issue-out-of-range", min = 8, max = 30);
//! ```
//!
//! Adding a locale: copy `en-US/goat-sports-ui.ftl` into `i18n/<lang-id>/`,
//! translate the values (ids and `$variables` unchanged) and run the tests.
//!
//! Languages requested by the environment come from `navigator.languages` on
//! the web and from the OS locale list natively.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation lookup through the shared loader.
///
/// ```ignore
/// t!("nav-home")
/// t!("field-issue-out-of-range", min = 8, max = 30)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "goat-sports-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used by `t!`.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the environment's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (`Ok` returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language currently used for lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language tags, sorted (for the locale picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
