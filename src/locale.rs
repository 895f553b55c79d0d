//! Static string selection for page chrome.
//!
//! Pages carry a language tag from the manifest; the chrome strings (back
//! link, footer attribution) are fixed per language. No runtime translation
//! machinery, just string selection.

use serde::Deserialize;

/// Page language for the `lang` attribute and localized chrome strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English chrome strings
    En,
    /// Russian chrome strings
    Ru,
}

impl Lang {
    /// Language code for the `<html lang>` attribute
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Back-to-home navigation label
    pub fn back_to_home(&self) -> &'static str {
        match self {
            Self::En => "← Back to Home",
            Self::Ru => "← Назад на главную",
        }
    }

    /// Leading text of the footer attribution line
    pub fn made_with(&self) -> &'static str {
        match self {
            Self::En => "Made with",
            Self::Ru => "Сделано с",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self::En
    }
}
