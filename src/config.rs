use serde::{Deserialize, Serialize};
use tracing::warn;

/// Site-wide routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin used for canonical URLs, without trailing slash
    pub origin: String,
    /// Locale served at unprefixed paths
    pub default_locale: String,
    pub locales: Vec<String>,
    /// City slugs recognised at the end of project paths
    pub known_cities: Vec<String>,
    /// Length of every "related content" panel
    pub related_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://www.erbilhomes.com".to_string(),
            default_locale: "en".to_string(),
            locales: vec!["en".to_string(), "ar".to_string(), "ku".to_string()],
            known_cities: vec![
                "erbil".to_string(),
                "duhok".to_string(),
                "sulaymaniyah".to_string(),
                "baghdad".to_string(),
            ],
            related_limit: 3,
        }
    }
}

impl SiteConfig {
    /// Apply `SITE_*` overrides from any key/value source. Unusable values
    /// are skipped with a warning.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origin) = lookup("SITE_ORIGIN").filter(|value| !value.trim().is_empty()) {
            self.origin = origin.trim().trim_end_matches('/').to_string();
        }

        if let Some(locales) = lookup("SITE_LOCALES") {
            let parsed: Vec<String> = locales
                .split(',')
                .map(|locale| locale.trim().to_lowercase())
                .filter(|locale| !locale.is_empty())
                .collect();
            if parsed.is_empty() {
                warn!(value = %locales, "ignoring empty SITE_LOCALES");
            } else {
                self.locales = parsed;
            }
        }

        if !self.locales.contains(&self.default_locale) {
            if let Some(first) = self.locales.first() {
                warn!(
                    locale = %self.default_locale,
                    fallback = %first,
                    "default locale is not configured, falling back"
                );
                self.default_locale = first.clone();
            }
        }

        if let Some(locale) = lookup("SITE_DEFAULT_LOCALE") {
            let locale = locale.trim().to_lowercase();
            if self.locales.contains(&locale) {
                self.default_locale = locale;
            } else {
                warn!(locale = %locale, "SITE_DEFAULT_LOCALE is not a configured locale");
            }
        }

        if let Some(limit) = lookup("SITE_RELATED_LIMIT") {
            match limit.trim().parse() {
                Ok(limit) => self.related_limit = limit,
                Err(e) => warn!(value = %limit, error = %e, "ignoring SITE_RELATED_LIMIT"),
            }
        }

        self
    }
}
