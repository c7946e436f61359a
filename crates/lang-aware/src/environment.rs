//! Sources for the host environment's locale signal.

use std::env;

use unic_langid::LanguageIdentifier;

/// Where the registry reads the host's locale preferences from.
///
/// Sources report raw signals only; the registry substitutes the configured
/// default language for a missing primary locale and `[primary]` for an
/// empty preference list.
pub trait EnvironmentSource {
    /// The host's primary locale, if it reports one.
    fn primary_locale(&self) -> Option<String>;

    /// The host's ordered preference list; may be empty.
    fn preferred_locales(&self) -> Vec<String>;
}

const PRIMARY_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Locale signal taken from the process environment.
///
/// The primary locale comes from the first of `LC_ALL`, `LC_MESSAGES` and
/// `LANG` that holds a usable value, then from the operating system via
/// `sys-locale`. The preference list comes from the POSIX `LANGUAGE`
/// variable, colon separated. Entries are normalized from POSIX form
/// (`fr_CA.UTF-8` reads as `fr-CA`) and dropped when they do not form a
/// valid language identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl EnvironmentSource for SystemEnvironment {
    fn primary_locale(&self) -> Option<String> {
        PRIMARY_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .chain(sys_locale::get_locale())
            .find_map(|raw| normalize_posix_tag(&raw))
    }

    fn preferred_locales(&self) -> Vec<String> {
        let Ok(list) = env::var("LANGUAGE") else {
            return Vec::new();
        };

        list.split(':').filter_map(normalize_posix_tag).collect()
    }
}

/// Turns a POSIX locale string into a language tag.
///
/// Strips the codeset and modifier (`fr_CA.UTF-8@euro` keeps `fr_CA`),
/// rejects the `C` and `POSIX` placeholders, and emits the tag in canonical
/// casing when it parses as a language identifier.
fn normalize_posix_tag(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default();

    if stripped.eq_ignore_ascii_case("c") || stripped.eq_ignore_ascii_case("posix") {
        return None;
    }

    let tag = stripped.replace('_', "-");
    tag.parse::<LanguageIdentifier>()
        .ok()
        .map(|id| id.to_string())
}

/// Fixed locale signal, for embedders that know better and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    primary: Option<String>,
    preferred: Vec<String>,
}

impl StaticEnvironment {
    pub fn new(
        primary: impl Into<String>,
        preferred: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            primary: Some(primary.into()),
            preferred: preferred.into_iter().map(Into::into).collect(),
        }
    }

    /// A source that reports nothing, forcing the registry's fallbacks.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl EnvironmentSource for StaticEnvironment {
    fn primary_locale(&self) -> Option<String> {
        self.primary.clone()
    }

    fn preferred_locales(&self) -> Vec<String> {
        self.preferred.clone()
    }
}
