use bon::Builder;

/// Application-supplied language configuration.
///
/// Supplied once by the embedding application before any consumer registers,
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LanguageConfig {
    /// Fallback tag used when no preferred locale matches a supported one.
    #[builder(into, default = "en".to_owned())]
    pub default_language: String,

    /// Languages the application ships, in declaration order.
    #[builder(default = vec!["en".to_owned()])]
    pub supported_languages: Vec<String>,

    /// Pre-set current language, overriding the negotiated one.
    #[builder(into)]
    pub initial_language: Option<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english_only() {
        let config = LanguageConfig::default();

        assert_eq!(config.default_language, "en");
        assert_eq!(config.supported_languages, vec!["en".to_owned()]);
        assert_eq!(config.initial_language, None);
    }

    #[test]
    fn builder_accepts_overrides() {
        let config = LanguageConfig::builder()
            .default_language("fr")
            .supported_languages(vec!["fr".to_owned(), "en".to_owned()])
            .initial_language("en")
            .build();

        assert_eq!(config.default_language, "fr");
        assert_eq!(config.initial_language.as_deref(), Some("en"));
    }
}
