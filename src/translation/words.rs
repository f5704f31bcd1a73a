/*!
 * Word items: the per-word rows the word translation pass fills in.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static WORD_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s、。]+").expect("static regex is valid"));

/// Translation state of one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum WordTranslation {
    /// Word list built, word pass not started yet
    Waiting,
    /// Word pass started, this word's batch has not resolved
    Pending,
    /// Backend result
    Translated(String),
    /// The word's batch failed
    Failed,
}

impl WordTranslation {
    /// Whether the word pass has produced a final state for this word
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Translated(_) | Self::Failed)
    }
}

impl fmt::Display for WordTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "Waiting for translation..."),
            Self::Pending => write!(f, "Translating..."),
            Self::Translated(text) => write!(f, "{}", text),
            Self::Failed => write!(f, "Translation failed"),
        }
    }
}

/// One recognized word with its reading and translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordItem {
    /// Rendering key, `"{index}-{japanese}"`
    pub key: String,
    pub japanese: String,
    pub romaji: String,
    pub english: WordTranslation,
}

impl WordItem {
    /// Create the item at `index` in a freshly built list
    pub fn new(index: usize, japanese: impl Into<String>, romaji: impl Into<String>) -> Self {
        let japanese = japanese.into();
        Self {
            key: format!("{}-{}", index, japanese),
            japanese,
            romaji: romaji.into(),
            english: WordTranslation::Waiting,
        }
    }

    /// Copy of this item with a different translation state
    pub fn with_english(&self, english: WordTranslation) -> Self {
        Self {
            english,
            ..self.clone()
        }
    }
}

/// Split text on whitespace, `、` and `。`, dropping empty pieces
pub fn split_into_words(text: &str) -> Vec<String> {
    WORD_SEPARATORS
        .split(text)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the word list for a recognized text
pub fn build_word_items<F>(text: &str, romanize: F) -> Vec<WordItem>
where
    F: Fn(&str) -> String,
{
    split_into_words(text)
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            let romaji = romanize(&word);
            WordItem::new(index, word, romaji)
        })
        .collect()
}
