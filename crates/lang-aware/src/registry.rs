//! Shared language state, subscriptions and broadcast.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use indexmap::IndexMap;
use parking_lot::RwLock;
use thiserror::Error;

use crate::config::LanguageConfig;
use crate::environment::EnvironmentSource;
use crate::negotiate;
use crate::traits::{DisplayLocale, LanguageObserver, NoDisplay};

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("Language update to '{language}' rejected: a broadcast is already in progress")]
    ReentrantUpdate { language: String },
}

/// Handle identifying one registration with a [`LanguageRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Copy of the registry state handed to consumers when they register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSnapshot {
    pub default_language: String,
    pub current_language: String,
    pub primary_locale: String,
    pub expanded_preferred_locales: Vec<String>,
    pub supported_languages: Vec<String>,
}

#[derive(Debug)]
struct NegotiatedState {
    current_language: String,
    default_language: String,
    primary_locale: String,
    expanded_preferred_locales: Vec<String>,
    supported_languages: Vec<String>,
}

/// Shared language state with subscription and broadcast.
///
/// A registry is built once by the application's composition root and passed
/// to consumers by reference. Single-instance behaviour comes from the
/// `lang-aware-singleton` crate when ambient access is wanted; separate
/// registries stay fully isolated, which keeps tests independent.
pub struct LanguageRegistry {
    state: RwLock<NegotiatedState>,
    subscribers: RwLock<IndexMap<SubscriberId, Arc<dyn LanguageObserver>>>,
    next_subscriber: AtomicU64,
    broadcasting: AtomicBool,
    display: Box<dyn DisplayLocale>,
}

impl LanguageRegistry {
    /// Negotiates the initial state and builds a registry with no display
    /// indicator.
    pub fn initialize(config: LanguageConfig, environment: &dyn EnvironmentSource) -> Self {
        Self::initialize_with_display(config, environment, NoDisplay)
    }

    /// Negotiates the initial state and builds a registry that reflects the
    /// current language on `display`.
    ///
    /// The environment signal is gathered here, once: a missing primary
    /// locale falls back to the configured default language, and an empty
    /// preference list falls back to `[primary]`. The indicator is applied
    /// before the registry is handed out, so consumers never observe a
    /// stale one.
    pub fn initialize_with_display(
        config: LanguageConfig,
        environment: &dyn EnvironmentSource,
        display: impl DisplayLocale + 'static,
    ) -> Self {
        let primary_locale = environment
            .primary_locale()
            .unwrap_or_else(|| config.default_language.clone());

        let mut preferred_locales = environment.preferred_locales();
        if preferred_locales.is_empty() {
            preferred_locales = vec![primary_locale.clone()];
        }

        let negotiated = negotiate::negotiate(
            &config.default_language,
            &config.supported_languages,
            &primary_locale,
            &preferred_locales,
        );

        // A pre-set initial language wins over the negotiated one.
        let current_language = config.initial_language.unwrap_or(negotiated.language);

        tracing::debug!(
            language = %current_language,
            primary = %negotiated.primary_locale,
            "negotiated initial language"
        );

        display.set_display_locale(&display_prefix(&current_language));

        Self {
            state: RwLock::new(NegotiatedState {
                current_language,
                default_language: config.default_language,
                primary_locale: negotiated.primary_locale,
                expanded_preferred_locales: negotiated.expanded_preferred_locales,
                supported_languages: config.supported_languages,
            }),
            subscribers: RwLock::new(IndexMap::new()),
            next_subscriber: AtomicU64::new(0),
            broadcasting: AtomicBool::new(false),
            display: Box::new(display),
        }
    }

    /// Adds `observer` to the subscriber set and returns its handle together
    /// with the state at registration time.
    ///
    /// Registration does not deduplicate: registering the same observer
    /// twice yields two live entries, each notified on every update.
    pub fn register(
        &self,
        observer: Arc<dyn LanguageObserver>,
    ) -> (SubscriberId, LanguageSnapshot) {
        let id = SubscriberId(self.next_subscriber.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().insert(id, observer);
        (id, self.snapshot())
    }

    /// Removes the registration behind `id`; unknown ids are a no-op.
    ///
    /// Remaining registrations keep their relative notification order.
    pub fn deregister(&self, id: SubscriberId) {
        self.subscribers.write().shift_remove(&id);
    }

    /// Makes `language` the current language and notifies every subscriber,
    /// in registration order.
    ///
    /// The value is taken as-is; whether it is one of the supported
    /// languages is the caller's concern. A subscriber whose handler fails
    /// is logged and skipped, later subscribers still receive the update.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageError::ReentrantUpdate`] when called from within a
    /// notification handler (or while another thread is broadcasting); the
    /// nested update is not applied.
    pub fn update_language(&self, language: &str) -> Result<(), LanguageError> {
        if self.broadcasting.swap(true, Ordering::Acquire) {
            return Err(LanguageError::ReentrantUpdate {
                language: language.to_owned(),
            });
        }

        self.state.write().current_language = language.to_owned();
        self.display.set_display_locale(&display_prefix(language));

        // Walk a copy of the set so handlers may register or deregister
        // without deadlocking on the subscriber lock.
        let subscribers: Vec<(SubscriberId, Arc<dyn LanguageObserver>)> = self
            .subscribers
            .read()
            .iter()
            .map(|(id, observer)| (*id, Arc::clone(observer)))
            .collect();

        for (id, observer) in subscribers {
            if let Err(error) = observer.language_changed(language) {
                tracing::warn!(
                    subscriber = id.0,
                    %error,
                    "subscriber failed to apply language change"
                );
            }
        }

        self.broadcasting.store(false, Ordering::Release);
        Ok(())
    }

    /// Copies the current state.
    pub fn snapshot(&self) -> LanguageSnapshot {
        let state = self.state.read();
        LanguageSnapshot {
            default_language: state.default_language.clone(),
            current_language: state.current_language.clone(),
            primary_locale: state.primary_locale.clone(),
            expanded_preferred_locales: state.expanded_preferred_locales.clone(),
            supported_languages: state.supported_languages.clone(),
        }
    }

    pub fn current_language(&self) -> String {
        self.state.read().current_language.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

/// First two characters of the tag, the ISO 639-1 abbreviation for
/// two-letter codes. Not a tag parse; three-letter codes come out truncated.
fn display_prefix(language: &str) -> String {
    language.chars().take(2).collect()
}

#[cfg(test)]
mod tests {
    use super::display_prefix;

    #[test]
    fn display_prefix_keeps_at_most_two_chars() {
        assert_eq!(display_prefix("fr-CA"), "fr");
        assert_eq!(display_prefix("en"), "en");
        assert_eq!(display_prefix("f"), "f");
        assert_eq!(display_prefix("fil"), "fi");
    }
}
