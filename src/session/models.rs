/*!
 * Session-specific models.
 *
 * `RecognizedText` is what OCR produced after filtering; `SessionView` is
 * the state a presentation layer renders, updated from translation events.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::errors::RecognitionError;
use crate::romanization::is_japanese_text;
use crate::translation::{TranslationEvent, WordItem};

/// English text shown when the full-text translation fails
pub const FULL_TEXT_FAILED: &str = "Translation failed. Please try again.";

/// Warning raised once per session when any word batch failed
pub const WORDS_WARNING: &str = "Some words could not be translated.";

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex is valid"));

/// Text recognized in one image, normalized to a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecognizedText(String);

impl RecognizedText {
    /// Build from OCR text blocks
    ///
    /// In Japanese-only mode blocks without Japanese characters are
    /// dropped. The remaining blocks are joined with spaces and every run
    /// of whitespace collapses to one space.
    pub fn from_blocks<S: AsRef<str>>(blocks: &[S], japanese_only: bool) -> Result<Self, RecognitionError> {
        let joined = blocks
            .iter()
            .map(AsRef::as_ref)
            .filter(|block| !japanese_only || is_japanese_text(block))
            .collect::<Vec<_>>()
            .join(" ");
        let text = WHITESPACE_RUNS.replace_all(&joined, " ").trim().to_string();

        if text.is_empty() {
            return Err(if japanese_only {
                RecognitionError::NoJapaneseText
            } else {
                RecognitionError::NoText
            });
        }

        Ok(Self(text))
    }

    /// Build from a single block of plain text
    pub fn from_plain(text: &str, japanese_only: bool) -> Result<Self, RecognitionError> {
        Self::from_blocks(&[text], japanese_only)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecognizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of the full-text English translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum FullTextState {
    /// Translation is not run for this session
    NotRequested,
    Pending,
    Translated(String),
    Failed,
}

impl fmt::Display for FullTextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRequested => Ok(()),
            Self::Pending => write!(f, "Translating..."),
            Self::Translated(text) => write!(f, "{}", text),
            Self::Failed => write!(f, "{}", FULL_TEXT_FAILED),
        }
    }
}

/// Everything a presentation layer shows for one recognition
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: String,
    pub recognized_text: String,
    pub romaji_text: String,
    pub english: FullTextState,
    pub words: Vec<WordItem>,
    pub is_processing: bool,
    pub warning: Option<String>,
    /// Word batches resolved so far, out of `total_batches`
    pub completed_batches: usize,
    pub total_batches: usize,
}

impl SessionView {
    /// Apply one translation event
    pub fn apply(&mut self, event: TranslationEvent) {
        match event {
            TranslationEvent::WordsUpdated { words, completed_batches, total_batches } => {
                self.words = words;
                self.completed_batches = completed_batches;
                self.total_batches = total_batches;
            }
            TranslationEvent::BatchFailed(_) => self.raise_word_warning(),
            TranslationEvent::FullText(Ok(text)) => self.english = FullTextState::Translated(text),
            TranslationEvent::FullText(Err(_)) => self.english = FullTextState::Failed,
        }
    }

    /// Set the word warning unless it is already shown
    pub fn raise_word_warning(&mut self) {
        if self.warning.is_none() {
            self.warning = Some(WORDS_WARNING.to_string());
        }
    }
}
