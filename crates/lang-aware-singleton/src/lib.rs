#![doc = include_str!("../README.md")]

use std::sync::{Arc, OnceLock};

use lang_aware::{
    DisplayLocale, EnvironmentSource, LanguageConfig, LanguageObserver, LanguageRegistry,
    LanguageSnapshot, NoDisplay, SubscriberId, SystemEnvironment,
};

static REGISTRY: OnceLock<Arc<LanguageRegistry>> = OnceLock::new();

/// Initializes the process-wide registry from the system environment.
///
/// This function should be called once at the beginning of your
/// application's lifecycle. Later calls log a warning and keep the registry
/// from the first call.
pub fn init(config: LanguageConfig) {
    init_with(config, &SystemEnvironment, NoDisplay);
}

/// Initializes the process-wide registry with an explicit environment source
/// and display indicator.
pub fn init_with(
    config: LanguageConfig,
    environment: &dyn EnvironmentSource,
    display: impl DisplayLocale + 'static,
) {
    let registry = LanguageRegistry::initialize_with_display(config, environment, display);
    if REGISTRY.set(Arc::new(registry)).is_err() {
        log::warn!("Language registry already initialized.");
    }
}

/// Returns the process-wide registry, if `init` has run.
pub fn registry() -> Option<Arc<LanguageRegistry>> {
    REGISTRY.get().cloned()
}

/// Registers `observer` with the process-wide registry.
///
/// Returns the subscription handle and the state at registration time, or
/// `None` (with an error logged) when `init` has not run.
pub fn register(observer: Arc<dyn LanguageObserver>) -> Option<(SubscriberId, LanguageSnapshot)> {
    match REGISTRY.get() {
        Some(registry) => Some(registry.register(observer)),
        None => {
            log::error!("Language registry not initialized. Call init() first.");
            None
        },
    }
}

/// Removes a registration from the process-wide registry.
pub fn deregister(id: SubscriberId) {
    if let Some(registry) = REGISTRY.get() {
        registry.deregister(id);
    } else {
        log::error!("Language registry not initialized. Call init() first.");
    }
}

/// Updates the language on the process-wide registry and broadcasts it to
/// every subscriber.
pub fn update_language(language: &str) {
    match REGISTRY.get() {
        Some(registry) => {
            if let Err(error) = registry.update_language(language) {
                log::error!("Failed to update language: {}", error);
            }
        },
        None => log::error!("Language registry not initialized. Call init() first."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lang_aware::{ObserverError, StaticEnvironment};
    use serial_test::serial;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<String>>);

    impl LanguageObserver for Recorder {
        fn language_changed(&self, language: &str) -> Result<(), ObserverError> {
            self.0.lock().unwrap().push(language.to_owned());
            Ok(())
        }
    }

    // One test drives the whole lifecycle: the registry is process-global,
    // so separate tests would observe each other's state.
    #[test]
    #[serial]
    fn init_register_update_roundtrip() {
        init_with(
            LanguageConfig::builder()
                .supported_languages(vec!["en".to_owned(), "fr".to_owned()])
                .build(),
            &StaticEnvironment::new("fr-CA", ["fr-CA"]),
            NoDisplay,
        );

        // A second init keeps the first registry.
        init(LanguageConfig::default());
        assert_eq!(registry().unwrap().current_language(), "fr");

        let observer = Arc::new(Recorder(Mutex::new(Vec::new())));
        let (id, snapshot) = register(observer.clone()).expect("registry initialized");
        assert_eq!(snapshot.current_language, "fr");

        update_language("en");
        assert_eq!(observer.0.lock().unwrap().as_slice(), ["en".to_owned()]);

        deregister(id);
        update_language("fr");
        assert_eq!(observer.0.lock().unwrap().len(), 1);
    }
}
