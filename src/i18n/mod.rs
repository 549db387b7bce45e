mod translations;

use std::collections::HashMap;
use std::sync::LazyLock;

use translations::TRANSLATIONS;

static TABLE: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        TRANSLATIONS
            .iter()
            .map(|(key, en, zh)| (*key, (*en, *zh)))
            .collect()
    });

pub const LANGUAGE_COOKIE: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    /// Language from the query string, else the cookie, else `default`.
    pub fn negotiate(query: Option<&str>, cookie_header: Option<&str>, default: Language) -> Self {
        query
            .and_then(Language::parse)
            .or_else(|| cookie_header.and_then(language_from_cookie))
            .unwrap_or(default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// Looks up `key`, falling back to English and then to the key itself.
    pub fn t(&self, key: &'static str) -> &'static str {
        match TABLE.get(key) {
            Some(&(en, zh)) => match self {
                Language::En => en,
                Language::Zh if !zh.is_empty() => zh,
                Language::Zh => en,
            },
            None => key,
        }
    }

    /// Prefers the Chinese variant of a name when rendering in Chinese.
    pub fn pick<'a>(&self, default: &'a str, chinese: Option<&'a str>) -> &'a str {
        match (self, chinese) {
            (Language::Zh, Some(zh)) if !zh.trim().is_empty() => zh,
            _ => default,
        }
    }
}

fn language_from_cookie(header: &str) -> Option<Language> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == LANGUAGE_COOKIE)
        .and_then(|(_, value)| Language::parse(value))
}
