//! Per-locale URL variants. Pure string mapping; the default locale lives at
//! the unprefixed path, every other locale under `/<locale>`.

use crate::config::SiteConfig;
use crate::routing::canonical::canonical_url;
use serde::Serialize;

/// An inbound path with its locale prefix split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPath {
    pub locale: Option<String>,
    pub path: String,
}

/// One `hreflang` alternate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub locale: String,
    pub url: String,
}

pub fn localized_path(path: &str, locale: &str, default_locale: &str) -> String {
    if locale == default_locale {
        return path.to_string();
    }

    match path.trim_start_matches('/') {
        "" => format!("/{}", locale),
        rest => format!("/{}/{}", locale, rest),
    }
}

/// Strip a recognised locale prefix (`/ar/blog/x` -> `ar`, `/blog/x`).
pub fn split_locale(path: &str, locales: &[String]) -> LocalizedPath {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.find(['/', '?']) {
        Some(index) => trimmed.split_at(index),
        None => (trimmed, ""),
    };

    match locales.iter().find(|locale| locale.as_str() == first) {
        Some(locale) => LocalizedPath {
            locale: Some(locale.clone()),
            path: match rest {
                "" => "/".to_string(),
                rest if rest.starts_with('?') => format!("/{}", rest),
                rest => rest.to_string(),
            },
        },
        None => LocalizedPath {
            locale: None,
            path: path.to_string(),
        },
    }
}

/// Absolute URL of `path` in every configured locale
pub fn alternates(path: &str, config: &SiteConfig) -> Vec<Alternate> {
    config
        .locales
        .iter()
        .map(|locale| Alternate {
            locale: locale.clone(),
            url: canonical_url(
                &config.origin,
                &localized_path(path, locale, &config.default_locale),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Vec<String> {
        vec!["en".to_string(), "ar".to_string(), "ku".to_string()]
    }

    #[test]
    fn test_default_locale_unprefixed() {
        assert_eq!(localized_path("/blog/x", "en", "en"), "/blog/x");
        assert_eq!(localized_path("/blog/x", "ar", "en"), "/ar/blog/x");
        assert_eq!(localized_path("/", "ku", "en"), "/ku");
    }

    #[test]
    fn test_split_locale_prefix() {
        let split = split_locale("/ar/properties?type=villa", &locales());
        assert_eq!(split.locale.as_deref(), Some("ar"));
        assert_eq!(split.path, "/properties?type=villa");

        let split = split_locale("/ku", &locales());
        assert_eq!(split.path, "/");
    }

    #[test]
    fn test_split_ignores_lookalike_segment() {
        let split = split_locale("/arbil-homes", &locales());
        assert_eq!(split.locale, None);
        assert_eq!(split.path, "/arbil-homes");
    }

    #[test]
    fn test_alternates_cover_every_locale() {
        let config = SiteConfig::default();
        let urls: Vec<_> = alternates("/about", &config)
            .into_iter()
            .map(|alternate| alternate.url)
            .collect();
        assert_eq!(
            urls,
            [
                "https://www.erbilhomes.com/about",
                "https://www.erbilhomes.com/ar/about",
                "https://www.erbilhomes.com/ku/about",
            ]
        );
    }
}
