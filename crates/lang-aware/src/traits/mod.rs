mod display;
mod observer;

pub use display::{DisplayLocale, NoDisplay};
pub use observer::{LanguageObserver, ObserverError};
