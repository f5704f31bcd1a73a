/*!
 * Tests for kana romanization
 */

use romalens::romanization::{
    KanaRomanizer, NO_JAPANESE_TEXT, Romanizer, is_japanese_text, romanize_for_display,
};

fn romaji(text: &str) -> String {
    KanaRomanizer::new().to_romaji(text)
}

#[test]
fn test_to_romaji_withSignText_shouldRomanizeKanaAndKeepKanji() {
    assert_eq!(romaji("とまれ"), "tomare");
    assert_eq!(romaji("出口はこちら"), "出口hakochira");
}

#[test]
fn test_to_romaji_withSentencePunctuation_shouldMapToAscii() {
    assert_eq!(romaji("はい、そうです。"), "hai,soudesu.");
}

#[test]
fn test_to_romaji_withMixedKatakanaWords_shouldHandleLoanwords() {
    assert_eq!(romaji("ラーメン"), "raamen");
    assert_eq!(romaji("チェック"), "chekku");
    assert_eq!(romaji("ヴァイオリン"), "vaiorin");
}

#[test]
fn test_to_romaji_withSokuonBeforeChi_shouldUseT() {
    assert_eq!(romaji("いっち"), "itchi");
    assert_eq!(romaji("ざっし"), "zasshi");
}

#[test]
fn test_to_romaji_withSyllabicNBeforeY_shouldAddApostrophe() {
    assert_eq!(romaji("こんや"), "kon'ya");
    assert_eq!(romaji("せんせい"), "sensei");
}

#[test]
fn test_is_japanese_text_withLatinOnly_shouldReturnFalse() {
    assert!(!is_japanese_text("OPEN 24h"));
    assert!(!is_japanese_text(""));
    assert!(is_japanese_text("24時間"));
}

#[test]
fn test_romanize_for_display_withTrait_shouldUseGivenRomanizer() {
    struct Upper;
    impl Romanizer for Upper {
        fn to_romaji(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    assert_eq!(romanize_for_display(&Upper, "ねこ", true), "ねこ".to_uppercase());
    assert_eq!(romanize_for_display(&Upper, "cat", true), NO_JAPANESE_TEXT);
}
