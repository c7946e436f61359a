//! Pure negotiation of the effective UI language.
//!
//! Locale tags are opaque strings here: matching against the supported list
//! is exact, and a base subtag is whatever precedes the first `-`. Anything
//! that needs real tag parsing lives at the environment boundary instead.

/// Outcome of a negotiation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiatedLanguages {
    /// The first supported entry of the expanded preference list, or the
    /// default language when nothing matched.
    pub language: String,
    /// The primary locale the negotiation ran against, unchanged.
    pub primary_locale: String,
    /// The preference list with base subtags appended and duplicates removed.
    pub expanded_preferred_locales: Vec<String>,
}

/// Returns the base subtag of a locale tag, e.g. `fr` for `fr-CA`.
///
/// Tags without a `-` separator have no separate base subtag.
pub fn base_subtag(tag: &str) -> Option<&str> {
    tag.split_once('-').map(|(base, _)| base)
}

/// Appends the base subtag of every regioned entry to the preference list,
/// then removes duplicates keeping the first occurrence of each tag.
pub fn expand_preferred_locales(preferred: &[String]) -> Vec<String> {
    let bases = preferred.iter().filter_map(|tag| base_subtag(tag));

    let mut expanded: Vec<String> = Vec::with_capacity(preferred.len() * 2);
    for tag in preferred.iter().map(String::as_str).chain(bases) {
        if !expanded.iter().any(|seen| seen == tag) {
            expanded.push(tag.to_owned());
        }
    }
    expanded
}

/// Picks the effective language from the caller's configuration and the
/// environment's preference list.
///
/// `preferred_locales` must be non-empty; callers substitute
/// `[primary_locale]` when the environment reports no list.
pub fn negotiate(
    default_language: &str,
    supported_languages: &[String],
    primary_locale: &str,
    preferred_locales: &[String],
) -> NegotiatedLanguages {
    let expanded = expand_preferred_locales(preferred_locales);

    let language = expanded
        .iter()
        .find(|candidate| supported_languages.iter().any(|lang| lang == *candidate))
        .cloned()
        .unwrap_or_else(|| default_language.to_owned());

    NegotiatedLanguages {
        language,
        primary_locale: primary_locale.to_owned(),
        expanded_preferred_locales: expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|tag| (*tag).to_owned()).collect()
    }

    #[test]
    fn base_subtag_splits_on_first_separator() {
        assert_eq!(base_subtag("fr-CA"), Some("fr"));
        assert_eq!(base_subtag("zh-Hant-TW"), Some("zh"));
        assert_eq!(base_subtag("en"), None);
    }

    #[test]
    fn expand_appends_base_subtags_after_originals() {
        let expanded = expand_preferred_locales(&tags(&["fr-CA", "en-US"]));

        assert_eq!(expanded, tags(&["fr-CA", "en-US", "fr", "en"]));
    }

    #[test]
    fn expand_deduplicates_keeping_first_occurrence() {
        assert_eq!(expand_preferred_locales(&tags(&["en", "en"])), tags(&["en"]));
        assert_eq!(
            expand_preferred_locales(&tags(&["fr", "fr-CA"])),
            tags(&["fr", "fr-CA"])
        );
    }

    #[test]
    fn negotiate_prefers_first_supported_entry() {
        let result = negotiate(
            "en",
            &tags(&["en", "fr"]),
            "fr-CA",
            &tags(&["fr-CA", "en-US"]),
        );

        assert_eq!(result.language, "fr");
        assert_eq!(
            result.expanded_preferred_locales,
            tags(&["fr-CA", "en-US", "fr", "en"])
        );
    }

    #[test]
    fn negotiate_matches_exact_regioned_tag() {
        let result = negotiate("en", &tags(&["fr-CA"]), "fr-CA", &tags(&["fr-CA"]));

        assert_eq!(result.language, "fr-CA");
    }

    #[test]
    fn negotiate_falls_back_to_default_language() {
        let result = negotiate("en", &tags(&["en", "fr"]), "de-DE", &tags(&["de-DE"]));

        assert_eq!(result.language, "en");
        assert_eq!(result.expanded_preferred_locales, tags(&["de-DE", "de"]));
    }

    #[test]
    fn negotiate_is_deterministic() {
        let supported = tags(&["en", "fr"]);
        let preferred = tags(&["fr-CA", "en-US"]);

        let first = negotiate("en", &supported, "fr-CA", &preferred);
        let second = negotiate("en", &supported, "fr-CA", &preferred);

        assert_eq!(first, second);
    }
}
