//! Bilingual text lookup and the persisted language preference.

pub mod keys;
mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WalletError};
use crate::schedule::Frequency;
use crate::storage::{KeyValueStore, LANGUAGE_KEY};

pub use keys::TranslationKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::Tr => Language::En,
            Language::En => Language::Tr,
        }
    }

    fn table(&self) -> &'static HashMap<TranslationKey, &'static str> {
        match self {
            Language::Tr => &tables::TR,
            Language::En => &tables::EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = WalletError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            other => Err(WalletError::InvalidInput(format!(
                "unsupported language `{other}` (expected tr or en)"
            ))),
        }
    }
}

/// Looks up `key` for `language`. A key missing from one table falls back to
/// the other language, then to the key itself.
pub fn translate(language: Language, key: TranslationKey) -> &'static str {
    language
        .table()
        .get(&key)
        .or_else(|| language.other().table().get(&key))
        .copied()
        .unwrap_or_else(|| key.as_str())
}

pub fn frequency_label(language: Language, frequency: Frequency) -> &'static str {
    let key = match frequency {
        Frequency::Monthly => TranslationKey::FrequencyMonthly,
        Frequency::Weekly => TranslationKey::FrequencyWeekly,
        Frequency::Biweekly => TranslationKey::FrequencyBiweekly,
        Frequency::Yearly => TranslationKey::FrequencyYearly,
    };
    translate(language, key)
}

/// Active language, initialized from the store and written back on change.
pub struct LanguageContext {
    language: Language,
    store: Arc<dyn KeyValueStore>,
}

impl LanguageContext {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(value = %raw, error = %err, "ignoring stored language preference");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(err) => {
                tracing::error!(error = %err, "failed to read language preference");
                Language::default()
            }
        };
        Self { language, store }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.store.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        tracing::info!(%language, "language changed");
        Ok(())
    }

    pub fn t(&self, key: TranslationKey) -> &'static str {
        translate(self.language, key)
    }
}
