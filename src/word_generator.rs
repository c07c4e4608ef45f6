use itertools::Itertools;

use crate::language::{random_sentences, SupportedLanguage};

/// Supplies the target text for each new attempt
pub trait PromptSource {
    fn next_prompt(&mut self) -> String;
}

/// Configuration for word generation
#[derive(Debug, Clone, PartialEq)]
pub struct WordGenConfig {
    pub number_of_words: usize,
    pub number_of_sentences: Option<usize>,
    pub custom_prompt: Option<String>,
    pub language: SupportedLanguage,
}

impl Default for WordGenConfig {
    fn default() -> Self {
        Self {
            number_of_words: 8,
            number_of_sentences: None,
            custom_prompt: None,
            language: SupportedLanguage::English,
        }
    }
}

/// Draws prompts from a custom text, generated sentences, or a word list
pub struct WordGenerator {
    config: WordGenConfig,
}

impl WordGenerator {
    pub fn new(config: WordGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WordGenConfig {
        &self.config
    }

    fn generate_words(&self) -> String {
        self.config
            .language
            .as_lang()
            .get_random(self.config.number_of_words)
            .iter()
            .join(" ")
    }
}

impl PromptSource for WordGenerator {
    fn next_prompt(&mut self) -> String {
        if let Some(ref custom_prompt) = self.config.custom_prompt {
            return custom_prompt.clone();
        }

        if let Some(count) = self.config.number_of_sentences {
            return random_sentences(count);
        }

        self.generate_words()
    }
}

/// Cycles through a fixed list of prompts. Handy for scripted runs.
#[derive(Debug, Clone)]
pub struct FixedPrompts {
    prompts: Vec<String>,
    next: usize,
}

impl FixedPrompts {
    pub fn new<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompts: prompts.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl PromptSource for FixedPrompts {
    fn next_prompt(&mut self) -> String {
        if self.prompts.is_empty() {
            return String::new();
        }

        let prompt = self.prompts[self.next % self.prompts.len()].clone();
        self.next += 1;
        prompt
    }
}
