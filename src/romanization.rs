/*!
 * Kana to romaji conversion.
 *
 * Hepburn romanization comes from `wana_kana`. Kanji and other characters
 * it does not know pass through unchanged, so mixed text like "猫が"
 * comes out as "猫ga".
 */

use once_cell::sync::Lazy;
use regex::Regex;
use wana_kana::ConvertJapanese;

/// Marker shown instead of romaji when Japanese-only mode finds no Japanese
pub const NO_JAPANESE_TEXT: &str = "No Japanese text detected";

static JAPANESE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Hiragana}\p{Katakana}\p{Han}]").expect("static regex is valid")
});

/// Converts Japanese text to a Latin-alphabet reading
pub trait Romanizer: Send + Sync {
    /// Romanize a string
    fn to_romaji(&self, text: &str) -> String;
}

/// Hepburn romanizer for hiragana and katakana
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaRomanizer;

impl KanaRomanizer {
    pub fn new() -> Self {
        Self
    }
}

impl Romanizer for KanaRomanizer {
    fn to_romaji(&self, text: &str) -> String {
        ConvertJapanese::to_romaji(text)
    }
}

/// Whether the text contains any hiragana, katakana or kanji
pub fn is_japanese_text(text: &str) -> bool {
    JAPANESE_CHARS.is_match(text)
}

/// Romaji as displayed for a recognized string
///
/// In Japanese-only mode text without Japanese characters is replaced by
/// [`NO_JAPANESE_TEXT`]; otherwise the text is shown as recognized.
pub fn romanize_for_display(romanizer: &dyn Romanizer, text: &str, japanese_only: bool) -> String {
    if !japanese_only {
        return text.to_string();
    }
    if is_japanese_text(text) {
        romanizer.to_romaji(text)
    } else {
        NO_JAPANESE_TEXT.to_string()
    }
}
