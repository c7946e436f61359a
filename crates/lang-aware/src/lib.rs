#![doc = include_str!("../README.md")]

pub mod config;
pub mod environment;
pub mod negotiate;
pub mod registry;

mod traits;

pub use config::LanguageConfig;
pub use environment::{EnvironmentSource, StaticEnvironment, SystemEnvironment};
pub use negotiate::{NegotiatedLanguages, negotiate};
pub use registry::{LanguageError, LanguageRegistry, LanguageSnapshot, SubscriberId};
pub use traits::{DisplayLocale, LanguageObserver, NoDisplay, ObserverError};
