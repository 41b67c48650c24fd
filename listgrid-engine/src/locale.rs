//! Locale and translation plumbing for cell converters.
//!
//! The host application owns real localization; the engine only needs the
//! active language code (for numeric separators) and a way to resolve a
//! handful of translation keys. Both are injected, never ambient.

/// Translation keys the engine resolves through a [`Translator`].
pub mod keys {
    /// Truthy label for boolean cells without explicit labels.
    pub const YES: &str = "common.yes";
    /// Falsy label for boolean cells without explicit labels.
    pub const NO: &str = "common.no";
    /// Generic error shown when a numeric cell cannot be formatted.
    pub const NUMERIC_ERROR: &str = "error.invalid-number";
}

/// Active locale for a list render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
}

impl Locale {
    /// Create a locale from a language code (`"en"`, `"nl-BE"`, ...).
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// The full language code as supplied.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The primary language subtag (`"nl-BE"` -> `"nl"`).
    fn primary(&self) -> &str {
        self.language
            .split(['-', '_'])
            .next()
            .unwrap_or(&self.language)
    }

    /// Decimal separator for numeric cells.
    pub fn decimal_separator(&self) -> char {
        match self.primary() {
            "nl" | "de" | "es" | "it" | "pt" | "fr" => ',',
            _ => '.',
        }
    }

    /// Digit group separator for numeric cells.
    pub fn group_separator(&self) -> char {
        match self.primary() {
            "nl" | "de" | "es" | "it" | "pt" => '.',
            "fr" => ' ',
            _ => ',',
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

/// Resolves translation keys to display strings.
///
/// Implemented by the host's translation service; the engine ships a
/// [`DefaultTranslator`] with English fallbacks so it works stand-alone.
pub trait Translator: Send + Sync {
    /// Resolve a key to its translation, or `None` if unknown.
    fn resolve(&self, key: &str) -> Option<String>;
}

/// English fallback translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn resolve(&self, key: &str) -> Option<String> {
        let text = match key {
            keys::YES => "Yes",
            keys::NO => "No",
            keys::NUMERIC_ERROR => "Invalid number",
            _ => return None,
        };
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_follow_primary_subtag() {
        let nl = Locale::new("nl-BE");
        assert_eq!(nl.decimal_separator(), ',');
        assert_eq!(nl.group_separator(), '.');

        let en = Locale::default();
        assert_eq!(en.decimal_separator(), '.');
        assert_eq!(en.group_separator(), ',');
    }
}
