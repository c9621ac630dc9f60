use unic_langid::LanguageIdentifier;

/// Normalize locale identifiers to a canonical-ish form for parsing.
///
/// - Trims whitespace.
/// - Strips POSIX suffixes (`en_US.UTF-8`, `sr_RS@latin`).
/// - Converts `_` to `-` (Android often reports `en_US`).
pub fn normalize_tag(s: &str) -> String {
    let trimmed = s.trim();
    let stripped = trimmed.split(['.', '@']).next().unwrap_or_default().trim();
    stripped.replace('_', "-")
}

/// A locale identifier decomposed into its subtags, all lowercase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleTag {
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
}

impl LocaleTag {
    /// Decompose a raw locale identifier.
    ///
    /// Returns `None` when the identifier carries no recognizable language
    /// subtag (empty, unparseable, or `und`).
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_tag(raw);
        if normalized.is_empty() {
            return None;
        }

        let id: LanguageIdentifier = normalized.parse().ok()?;
        let language = id.language.as_str().to_ascii_lowercase();
        if language.is_empty() || language == "und" {
            return None;
        }

        Some(Self {
            language,
            script: id.script.map(|s| s.as_str().to_ascii_lowercase()),
            region: id.region.map(|r| r.as_str().to_ascii_lowercase()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_separators_and_posix_suffixes() {
        assert_eq!(normalize_tag(" en_US.UTF-8 "), "en-US");
        assert_eq!(normalize_tag("sr_RS@latin"), "sr-RS");
        assert_eq!(normalize_tag("ko-KR"), "ko-KR");
    }

    #[test]
    fn decomposes_language_script_region() {
        let tag = LocaleTag::parse("zh-Hant-TW").unwrap();
        assert_eq!(tag.language, "zh");
        assert_eq!(tag.script.as_deref(), Some("hant"));
        assert_eq!(tag.region.as_deref(), Some("tw"));
    }

    #[test]
    fn decomposes_bare_language() {
        let tag = LocaleTag::parse("en").unwrap();
        assert_eq!(tag.language, "en");
        assert_eq!(tag.script, None);
        assert_eq!(tag.region, None);
    }

    #[test]
    fn underscore_form_decomposes() {
        let tag = LocaleTag::parse("pt_BR").unwrap();
        assert_eq!(tag.language, "pt");
        assert_eq!(tag.region.as_deref(), Some("br"));
    }

    #[test]
    fn unrecognizable_language_is_none() {
        assert_eq!(LocaleTag::parse(""), None);
        assert_eq!(LocaleTag::parse("   "), None);
        assert_eq!(LocaleTag::parse("und"), None);
        assert_eq!(LocaleTag::parse("!!"), None);
    }
}
