use std::sync::Arc;

use lang_aware::{
    DisplayLocale, LanguageConfig, LanguageObserver, ObserverError, StaticEnvironment,
};

struct Banner;

impl LanguageObserver for Banner {
    fn language_changed(&self, language: &str) -> Result<(), ObserverError> {
        println!("[banner] now rendered in {language}");
        Ok(())
    }
}

struct StatusLine;

impl LanguageObserver for StatusLine {
    fn language_changed(&self, language: &str) -> Result<(), ObserverError> {
        println!("[status] now rendered in {language}");
        Ok(())
    }
}

/// Stand-in for the document-level `lang` attribute.
struct ConsoleDisplay;

impl DisplayLocale for ConsoleDisplay {
    fn set_display_locale(&self, prefix: &str) {
        println!("[display] lang attribute set to {prefix}");
    }
}

fn main() {
    env_logger::init();

    lang_aware_singleton::init_with(
        LanguageConfig::builder()
            .supported_languages(vec!["en".to_owned(), "fr".to_owned()])
            .build(),
        &StaticEnvironment::new("fr-CA", ["fr-CA", "en-US"]),
        ConsoleDisplay,
    );

    let (banner_id, snapshot) =
        lang_aware_singleton::register(Arc::new(Banner)).expect("registry initialized");
    println!("[banner] mounted with {}", snapshot.current_language);

    lang_aware_singleton::register(Arc::new(StatusLine)).expect("registry initialized");

    lang_aware_singleton::update_language("en");

    lang_aware_singleton::deregister(banner_id);
    lang_aware_singleton::update_language("fr");
}
