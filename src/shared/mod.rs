//! Shared newtypes and utilities used across the domain and render modules.
//!
//! `Locale` is serialization-transparent: it serializes to the same short
//! code (`"en"` / `"zh"`) used in query strings and page markup.

pub mod fmt;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Locale ──────────────────────────────────────────────────────────────────

/// Display language. Every request carries its own; there is no global selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh")]
    Zh,
}

impl Locale {
    /// Both supported locales, in page order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// `lang` attribute value for the HTML document.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-CN",
        }
    }

    /// The other locale: what the toggle button switches to.
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for an unsupported language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts `en`, `zh` and region-tagged forms like `en-AU` or `zh_CN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_serde() {
        let zh: Locale = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(zh, Locale::Zh);
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }

    #[test]
    fn test_locale_from_str_accepts_region_tags() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("EN-au".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("zh_CN".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!(" zh-Hans ".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Locale::En.toggle(), Locale::Zh);
        assert_eq!(Locale::Zh.toggle().toggle(), Locale::Zh);
    }
}
