use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("An underlying observer error occurred: {0}")]
    Backend(#[from] anyhow::Error),
}

/// A consumer that follows the current UI language.
///
/// Observers register with a [`LanguageRegistry`](crate::LanguageRegistry)
/// when they come up and deregister when they are torn down. A failing
/// handler does not stop delivery to the observers registered after it.
pub trait LanguageObserver: Send + Sync {
    fn language_changed(&self, language: &str) -> Result<(), ObserverError>;
}
