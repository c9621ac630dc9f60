use std::collections::HashSet;

use crate::tag::LocaleTag;
use crate::variants::VariantMap;

/// Resolve a raw locale identifier to its content variant code.
///
/// Pure function of the identifier and the mapping table; an identifier with
/// no recognizable language subtag or no matching table entry yields `None`.
pub fn resolve_variant(map: &VariantMap, identifier: &str) -> Option<String> {
    let tag = LocaleTag::parse(identifier)?;
    map.lookup(&tag.language, tag.script.as_deref(), tag.region.as_deref())
        .map(str::to_string)
}

/// Find the first preference that is a variant of `language`.
///
/// Scans `variants` in order and returns the first entry that begins with
/// `language` followed by a hyphen. First match wins; this is a priority
/// scan, not a best-match scan.
pub fn preferred_variant_for<'a>(language: &str, variants: &'a [String]) -> Option<&'a str> {
    let prefix = format!("{}-", language.to_ascii_lowercase());
    variants
        .iter()
        .map(String::as_str)
        .find(|v| v.to_ascii_lowercase().starts_with(&prefix))
}

/// Build an ordered, deduplicated preference list from raw locale
/// identifiers.
///
/// Each identifier resolves to its variant code when the table has one;
/// otherwise its bare language code is used, but only when
/// `include_plain_languages` is set. An identifier that resolved to a
/// variant never also contributes its bare language code. Output preserves
/// the position of each code's first occurrence.
pub fn build_preference_list(
    map: &VariantMap,
    raw_locales: &[String],
    include_plain_languages: bool,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for raw in raw_locales {
        let Some(tag) = LocaleTag::parse(raw) else {
            continue;
        };

        if let Some(variant) =
            map.lookup(&tag.language, tag.script.as_deref(), tag.region.as_deref())
        {
            if seen.insert(variant.to_string()) {
                out.push(variant.to_string());
            }
            continue;
        }

        if include_plain_languages && seen.insert(tag.language.clone()) {
            out.push(tag.language.clone());
        }
    }

    out
}

/// Synthesize a weighted `Accept-Language` value from an ordered code list.
///
/// With `n` codes, the i-th code carries weight `1.0 - i/n`: the first
/// segment is emitted bare (implicit weight 1.0) and the ladder steps down
/// evenly to `1/n` for the last code.
pub fn accept_language_header(codes: &[String]) -> String {
    if codes.is_empty() {
        return String::new();
    }

    let step = 1.0 / codes.len() as f64;
    let mut segments = Vec::with_capacity(codes.len());
    for (i, code) in codes.iter().enumerate() {
        if i == 0 {
            segments.push(code.clone());
        } else {
            let weight = 1.0 - i as f64 * step;
            segments.push(format!("{};q={}", code, format_weight(weight)));
        }
    }

    segments.join(", ")
}

/// Format a quality weight in `(0, 1)` to two significant digits, with
/// trailing zeros trimmed (`0.67`, `0.5`, `0.033`).
fn format_weight(weight: f64) -> String {
    let mut precision = 2;
    if weight > 0.0 && weight < 0.1 {
        precision = (-weight.log10()).floor() as usize + 2;
    }

    let mut s = format!("{weight:.precision$}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn zh_map() -> VariantMap {
        VariantMap::parse(
            r#"
zh:
  hant:
    tw: zh-tw
    default: zh-hant
  default:
    default: zh
"#,
        )
        .unwrap()
    }

    fn tags(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_variant_from_full_tag() {
        let map = zh_map();
        assert_eq!(resolve_variant(&map, "zh-Hant-TW").as_deref(), Some("zh-tw"));
        assert_eq!(resolve_variant(&map, "zh-Hant-CN").as_deref(), Some("zh-hant"));
        assert_eq!(resolve_variant(&map, "zh"), Some("zh".to_string()));
        assert_eq!(resolve_variant(&map, "en-US"), None);
        assert_eq!(resolve_variant(&map, "!!"), None);
    }

    #[test]
    fn preferred_variant_is_first_match() {
        let prefs = tags(&["en", "zh-Hant", "zh-Hans"]);
        assert_eq!(preferred_variant_for("zh", &prefs), Some("zh-Hant"));
        assert_eq!(preferred_variant_for("ZH", &prefs), Some("zh-Hant"));
        assert_eq!(preferred_variant_for("sr", &prefs), None);
        // A bare "zh" entry is not a variant of "zh".
        assert_eq!(preferred_variant_for("zh", &tags(&["zh", "en"])), None);
    }

    #[test]
    fn preference_list_dedups_in_first_seen_order() {
        let map = VariantMap::new();
        let raw = tags(&["en-US", "fr-FR", "en-GB"]);
        assert_eq!(build_preference_list(&map, &raw, true), tags(&["en", "fr"]));
    }

    #[test]
    fn variant_suppresses_bare_language_code() {
        let map = zh_map();
        let raw = tags(&["zh-Hant-TW", "zh-CN", "en-US"]);
        assert_eq!(
            build_preference_list(&map, &raw, true),
            tags(&["zh-tw", "zh", "en"])
        );
        assert_eq!(
            build_preference_list(&map, &raw, false),
            tags(&["zh-tw", "zh"])
        );
    }

    #[test]
    fn repeated_variants_keep_first_position() {
        let map = zh_map();
        let raw = tags(&["zh-Hant-TW", "en-US", "zh-Hant-TW", "zh-TW"]);
        // The second zh-Hant-TW resolves to zh-tw again and is dropped;
        // zh-TW has no script subtag and lands on the default bucket's "zh".
        assert_eq!(
            build_preference_list(&map, &raw, true),
            tags(&["zh-tw", "en", "zh"])
        );
    }

    #[test]
    fn undecomposable_entries_are_skipped() {
        let map = VariantMap::new();
        let raw = tags(&["und", "", "de-DE"]);
        assert_eq!(build_preference_list(&map, &raw, true), tags(&["de"]));
    }

    #[test]
    fn variants_only_list_is_empty_without_mappings() {
        let map = VariantMap::new();
        let raw = tags(&["en-US", "fr-FR"]);
        assert_eq!(build_preference_list(&map, &raw, false), Vec::<String>::new());
    }

    #[test]
    fn header_weights_step_down_evenly() {
        assert_eq!(
            accept_language_header(&tags(&["en", "fr", "de"])),
            "en, fr;q=0.67, de;q=0.33"
        );
        assert_eq!(accept_language_header(&tags(&["en", "fr"])), "en, fr;q=0.5");
        assert_eq!(
            accept_language_header(&tags(&["en", "fr", "de", "ja"])),
            "en, fr;q=0.75, de;q=0.5, ja;q=0.25"
        );
    }

    #[test]
    fn header_first_segment_carries_no_weight() {
        assert_eq!(accept_language_header(&tags(&["en"])), "en");
        assert_eq!(accept_language_header(&[]), "");
    }

    #[test]
    fn header_final_weight_is_one_over_n() {
        let codes: Vec<String> = (0..10).map(|i| format!("l{i}")).collect();
        let header = accept_language_header(&codes);
        assert_eq!(header.split(", ").count(), 10);
        assert!(header.ends_with("l9;q=0.1"));
    }

    #[test]
    fn weights_are_two_significant_digits() {
        assert_eq!(format_weight(2.0 / 3.0), "0.67");
        assert_eq!(format_weight(0.5), "0.5");
        assert_eq!(format_weight(0.25), "0.25");
        assert_eq!(format_weight(1.0 / 30.0), "0.033");
    }
}
