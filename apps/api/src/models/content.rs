//! Per-locale article content and affiliate links, as supplied by the
//! upstream content-package importer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported content locales. The order of `ALL` is the canonical iteration
/// order everywhere in the engine — it fixes the ordering of bundle sections
/// and of the flat result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Pt,
    Es,
    It,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Pt, Locale::Es, Locale::It];

    /// Lowercase locale code ("en", "pt", ...).
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
            Locale::Es => "es",
            Locale::It => "it",
        }
    }

    /// Uppercase tag used in prompt section headers ("=== LOCALE: EN ===").
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Pt => "PT",
            Locale::Es => "ES",
            Locale::It => "IT",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One locale's authored article. `tags`, `category` and `keywords` ride
/// along from the content package; the prompt engine itself only reads
/// title, description and content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleContent {
    pub title: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: String,
    pub keywords: Vec<String>,
}

impl LocaleContent {
    /// A locale with an empty (or whitespace-only) body is treated as absent
    /// for generation purposes.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// One optional affiliate URL per locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AffiliateLinks {
    pub en: String,
    pub pt: String,
    pub es: String,
    pub it: String,
}

impl AffiliateLinks {
    pub fn for_locale(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Pt => &self.pt,
            Locale::Es => &self.es,
            Locale::It => &self.it,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_serde_roundtrip() {
        for locale in Locale::ALL {
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.code()));
            let back: Locale = serde_json::from_str(&json).unwrap();
            assert_eq!(back, locale);
        }
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let result: Result<Locale, _> = serde_json::from_str("\"fr\"");
        assert!(result.is_err(), "unsupported locale must fail deserialization");
    }

    #[test]
    fn test_blank_content_detection() {
        let mut content = LocaleContent::default();
        assert!(content.is_blank());
        content.content = "   \n  ".to_string();
        assert!(content.is_blank());
        content.content = "hello".to_string();
        assert!(!content.is_blank());
    }

    #[test]
    fn test_affiliate_links_default_empty() {
        let links = AffiliateLinks::default();
        for locale in Locale::ALL {
            assert_eq!(links.for_locale(locale), "");
        }
    }
}
