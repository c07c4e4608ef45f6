pub mod core;
pub mod sentences;

pub use core::Language;
pub use sentences::random_sentences;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Word lists that ship with the binary
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SupportedLanguage {
    #[default]
    English,
    EnglishLong,
}

impl SupportedLanguage {
    pub fn as_lang(&self) -> Language {
        let file = match self {
            SupportedLanguage::English => "english",
            SupportedLanguage::EnglishLong => "english_long",
        };
        Language::new(file)
    }
}
