// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl I18n {
    /// Loads the embedded bundles and picks a locale.
    ///
    /// `config_lang` wins over `document_lang`; both fall back to `en-US`.
    /// Unparseable translation files are skipped.
    pub fn new(config_lang: Option<&str>, document_lang: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let Ok(resource) = FluentResource::try_new(source) else {
                continue;
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Unicode isolation marks would leak into plain DOM text.
            bundle.set_use_isolating(false);
            if bundle.add_resource(resource).is_ok() {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(config_lang, document_lang, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Resolves `key` in the current locale, then in `en-US`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        let fallback = default_locale();
        for locale in [&self.current_locale, &fallback] {
            if let Some(value) = self.format(locale, key) {
                return value;
            }
        }
        format!("MISSING: {}", key)
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Picks the first candidate that has a bundle, matching exact tags first and
/// then the bare language (`ru-RU` → `ru`).
fn resolve_locale(
    config_lang: Option<&str>,
    document_lang: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [config_lang, document_lang]
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.trim().parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| {
            available
                .iter()
                .find(|candidate| **candidate == wanted)
                .or_else(|| {
                    available
                        .iter()
                        .find(|candidate| candidate.language == wanted.language)
                })
                .cloned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "ru".parse().unwrap()]
    }

    #[test]
    fn config_language_wins() {
        let lang = resolve_locale(Some("ru"), Some("en-US"), &available());
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }

    #[test]
    fn document_language_used_when_config_missing() {
        let lang = resolve_locale(None, Some("ru-RU"), &available());
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }

    #[test]
    fn unknown_languages_resolve_to_none() {
        assert_eq!(resolve_locale(Some("de"), None, &available()), None);
    }

    #[test]
    fn embedded_bundles_translate_clipboard_messages() {
        let i18n = I18n::new(Some("ru"), None);
        assert_eq!(i18n.current_locale().to_string(), "ru");
        assert_eq!(i18n.tr("notification-copied"), "Скопировано в буфер обмена!");

        let english = I18n::default();
        assert_eq!(english.tr("notification-copied"), "Copied to clipboard!");
    }

    #[test]
    fn missing_keys_are_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
