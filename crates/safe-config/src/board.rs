//! Board presentation settings.

use serde::{Deserialize, Serialize};

use safe_core::i18n::{EVENT, Lang};
use safe_core::listing::DEFAULT_PAGE_SIZE;

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_lang() -> String {
    Lang::Cht.code().to_string()
}

fn default_event() -> String {
    EVENT.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Records per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Language code used when a request names none or an unknown one.
    #[serde(default = "default_lang")]
    pub default_lang: String,

    /// Event name shown in the title and subtitle.
    #[serde(default = "default_event")]
    pub event: String,

    /// Fixed offset from UTC used when rendering timestamps.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_lang: default_lang(),
            event: default_event(),
            utc_offset_minutes: 0,
        }
    }
}

impl BoardConfig {
    /// The configured default language, if the code is recognized.
    #[must_use]
    pub fn default_lang(&self) -> Option<Lang> {
        Lang::parse(&self.default_lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = BoardConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.default_lang(), Some(Lang::Cht));
        assert_eq!(config.event, EVENT);
        assert_eq!(config.utc_offset_minutes, 0);
    }
}
