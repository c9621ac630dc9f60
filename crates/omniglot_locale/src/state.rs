use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, OnceLock};

use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::prefs;
use crate::tag::normalize_tag;
use crate::variants::VariantMap;

/// Wiki-style language codes whose content is English.
const ENGLISH_ALIASES: [&str; 2] = ["simple", "test"];

/// Global locale state singleton.
static LOCALE_STATE: OnceLock<LocaleState> = OnceLock::new();

/// Process-wide locale preference state.
///
/// Owns the variant mapping table (immutable after construction) and the
/// process-lifetime caches: the OS preferred-locale snapshot, the memoized
/// preference list and header derived from it, and the locale object cache.
/// The snapshot is captured on first use and never refreshed; tests
/// construct isolated instances via [`LocaleState::with_locales`].
pub struct LocaleState {
    variants: VariantMap,
    os_locales: OnceLock<Vec<String>>,
    preferred_variants: OnceLock<Vec<String>>,
    header: OnceLock<String>,
    locales: Mutex<HashMap<String, LanguageIdentifier>>,
}

impl LocaleState {
    pub fn new(variants: VariantMap) -> Self {
        Self {
            variants,
            os_locales: OnceLock::new(),
            preferred_variants: OnceLock::new(),
            header: OnceLock::new(),
            locales: Mutex::new(HashMap::new()),
        }
    }

    /// Build a state with a fixed locale list instead of the OS snapshot.
    pub fn with_locales(variants: VariantMap, locales: Vec<String>) -> Self {
        let state = Self::new(variants);
        let _ = state.os_locales.set(locales);
        state
    }

    /// Initialize the global state.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(variants: VariantMap) {
        if LOCALE_STATE.set(Self::new(variants)).is_err() {
            debug!("LocaleState::init called more than once, keeping the first state");
        }
    }

    pub fn get() -> &'static LocaleState {
        LOCALE_STATE
            .get()
            .expect("LocaleState not initialized. Call LocaleState::init() at startup.")
    }

    pub fn try_get() -> Option<&'static LocaleState> {
        LOCALE_STATE.get()
    }

    pub fn variants(&self) -> &VariantMap {
        &self.variants
    }

    /// The raw OS preferred-locale snapshot, captured on first use.
    pub fn os_locales(&self) -> &[String] {
        self.os_locales.get_or_init(|| {
            let locales: Vec<String> = sys_locale::get_locales().collect();
            if locales.is_empty() {
                warn!("OS reported no preferred locales");
            } else {
                debug!(count = locales.len(), "captured OS preferred locale snapshot");
            }
            locales
        })
    }

    /// Ordered variant codes for the user's preferred languages, limited to
    /// languages that have a variant mapping. Computed once per process.
    pub fn preferred_variant_languages(&self) -> &[String] {
        self.preferred_variants
            .get_or_init(|| prefs::build_preference_list(&self.variants, self.os_locales(), false))
    }

    /// Ordered preference list over the snapshot including languages without
    /// a variant mapping. Not memoized; the cached surface is the
    /// variants-only list.
    pub fn preferred_languages(&self) -> Vec<String> {
        prefs::build_preference_list(&self.variants, self.os_locales(), true)
    }

    /// Weighted `Accept-Language` value for the deduplicated OS snapshot.
    ///
    /// Not routed through variant resolution: the codes are the user's
    /// locales as reported, lowercased and deduplicated.
    pub fn accept_language_header(&self) -> &str {
        self.header.get_or_init(|| {
            let mut seen = HashSet::new();
            let mut codes = Vec::new();
            for raw in self.os_locales() {
                let tag = normalize_tag(raw).to_ascii_lowercase();
                if tag.is_empty() {
                    continue;
                }
                if seen.insert(tag.clone()) {
                    codes.push(tag);
                }
            }
            prefs::accept_language_header(&codes)
        })
    }

    /// Resolve a wiki-style language code to a locale object.
    ///
    /// `None` returns the live current OS locale, uncached. Known codes are
    /// cached for the process lifetime; an unrecognized code falls back to
    /// the current locale and is cached under that code, so later lookups
    /// return the locale that was current at first lookup.
    pub fn locale_for(&self, code: Option<&str>) -> LanguageIdentifier {
        let Some(code) = code else {
            return current_locale();
        };

        let key = code.trim().to_ascii_lowercase();
        let mut cache = self.locales.lock().unwrap();
        if let Some(locale) = cache.get(&key) {
            return locale.clone();
        }

        let resolved = if ENGLISH_ALIASES.contains(&key.as_str()) {
            english_locale()
        } else if let Some(locale) = parse_identifier(&key) {
            locale
        } else {
            current_locale()
        };

        cache.insert(key, resolved.clone());
        resolved
    }
}

/// The platform's current locale, re-read on every call.
pub fn current_locale() -> LanguageIdentifier {
    sys_locale::get_locale()
        .and_then(|raw| parse_identifier(&raw))
        .unwrap_or_else(english_locale)
}

fn english_locale() -> LanguageIdentifier {
    "en".parse().unwrap_or_default()
}

fn parse_identifier(code: &str) -> Option<LanguageIdentifier> {
    let normalized = normalize_tag(code);
    if normalized.is_empty() {
        return None;
    }
    let id: LanguageIdentifier = normalized.parse().ok()?;
    (id.language.as_str() != "und").then_some(id)
}
