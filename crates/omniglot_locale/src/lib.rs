//! Omniglot locale preferences
//!
//! Resolves the user's OS locale preferences into the content-variant codes
//! the Omniglot platform serves, and synthesizes the weighted
//! `Accept-Language` header expressing those preferences:
//!
//! - Variant mapping table: language -> script -> region lookup with
//!   `default` wildcards at each level, loaded once from a YAML resource
//! - Preference lists: ordered, deduplicated, variant-aware
//! - Header synthesis: evenly spaced quality-weight ladder
//! - Locale objects: cached resolution of wiki-style language codes
//!
//! # Example
//!
//! ```rust
//! use omniglot_locale::{resolve_variant, VariantMap};
//!
//! let map = VariantMap::parse(
//!     "zh:\n  hant:\n    tw: zh-tw\n    default: zh-hant\n",
//! )
//! .unwrap();
//!
//! assert_eq!(resolve_variant(&map, "zh-Hant-TW").as_deref(), Some("zh-tw"));
//! assert_eq!(resolve_variant(&map, "en-US"), None);
//! ```

mod error;
mod prefs;
mod state;
mod tag;
mod variants;

pub use error::VariantMapError;
pub use prefs::{
    accept_language_header, build_preference_list, preferred_variant_for, resolve_variant,
};
pub use state::{current_locale, LocaleState};
pub use tag::{normalize_tag, LocaleTag};
pub use variants::VariantMap;

pub use unic_langid::LanguageIdentifier;

/// Resolve a locale identifier against the global [`LocaleState`].
///
/// Degrades gracefully when the state is not initialized: every identifier
/// resolves to no variant.
pub fn variant_for(identifier: &str) -> Option<String> {
    let state = LocaleState::try_get()?;
    resolve_variant(state.variants(), identifier)
}
