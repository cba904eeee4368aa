//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language used for API messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// Extract language from an Accept-Language header
    ///
    /// Picks the supported language with the highest quality value. Ties go
    /// to the earlier entry and anything unsupported falls back to English.
    pub fn from_accept_language(header: &str) -> Self {
        let mut best: Option<(Language, f32)> = None;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or("").trim();
            let primary = tag.split('-').next().unwrap_or("");

            let Ok(language) = primary.parse::<Language>() else {
                continue;
            };

            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            if best.map_or(true, |(_, q)| quality > q) {
                best = Some((language, quality));
            }
        }

        best.map(|(language, _)| language).unwrap_or_default()
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "fr" | "fra" | "fre" | "french" | "français" => Ok(Language::French),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
