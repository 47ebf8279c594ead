//! Internationalization module
//!
//! Provides report labels in English (en) and Thai (th).
//! Supports automatic language detection based on system locale.

mod en;
mod th;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            Self::detect_system_language()
        } else {
            language_from_locale(lang)
        };

        self.translations = match lang {
            "th" => th::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = lang.to_string();

        log::debug!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("en", "English"), ("th", "\u{0E44}\u{0E17}\u{0E22}")]
    }

    fn detect_system_language() -> &'static str {
        let lang_env = std::env::var("LANG")
            .or_else(|_| std::env::var("LC_ALL"))
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .unwrap_or_else(|_| "en".to_string());

        language_from_locale(&lang_env)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Map a locale string (e.g. "th_TH.UTF-8") to a supported language code
fn language_from_locale(locale: &str) -> &'static str {
    let lang_code = locale
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match lang_code {
        "th" => "th",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_mapping() {
        assert_eq!(language_from_locale("th_TH.UTF-8"), "th");
        assert_eq!(language_from_locale("th"), "th");
        assert_eq!(language_from_locale("en_US.UTF-8"), "en");
        assert_eq!(language_from_locale("fr_FR"), "en");
        assert_eq!(language_from_locale(""), "en");
    }

    #[test]
    fn test_lookup_and_fallback() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.get("report.total"), "Total");
        assert_eq!(i18n.get("missing.key"), "missing.key");
    }

    #[test]
    fn test_languages_share_keys() {
        let en = en::get_translations();
        let th = th::get_translations();
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut th_keys: Vec<_> = th.keys().collect();
        en_keys.sort();
        th_keys.sort();
        assert_eq!(en_keys, th_keys);
    }

    #[test]
    fn test_switch_language() {
        let mut i18n = I18n::new("en");
        i18n.set_language("th");
        assert_eq!(i18n.current_language(), "th");
        assert_ne!(i18n.get("report.total"), "Total");
        assert_eq!(I18n::available_languages().len(), 2);
    }
}
