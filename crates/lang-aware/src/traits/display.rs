/// The externally visible indicator of the active display locale.
///
/// The registry passes the first two characters of the language tag, the way
/// a document-level `lang` attribute carries an ISO 639-1 abbreviation. The
/// prefix is not a parsed tag; three-letter codes arrive truncated.
pub trait DisplayLocale: Send + Sync {
    fn set_display_locale(&self, prefix: &str);
}

/// Indicator for hosts with no display surface to reflect the locale on.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisplay;

impl DisplayLocale for NoDisplay {
    fn set_display_locale(&self, _prefix: &str) {}
}
