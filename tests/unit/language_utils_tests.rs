/*!
 * Tests for language utility functions
 */

use romalens::language_utils::{get_language_name, language_codes_match, normalize_to_part2t};

/// Test normalization of language codes to ISO 639-2/T format
#[test]
fn test_normalize_to_part2t_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("ja").unwrap(), "jpn");
    assert_eq!(normalize_to_part2t("jpn").unwrap(), "jpn");
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fre").unwrap(), "fra");

    // Case insensitivity and whitespace
    assert_eq!(normalize_to_part2t(" JA ").unwrap(), "jpn");
}

#[test]
fn test_normalize_to_part2t_withInvalidCodes_shouldFail() {
    assert!(normalize_to_part2t("xyz").is_err());
    assert!(normalize_to_part2t("j").is_err());
    assert!(normalize_to_part2t("").is_err());
}

/// Test matching of different language code formats
#[test]
fn test_language_codes_match_withMatchingCodes_shouldReturnTrue() {
    assert!(language_codes_match("ja", "jpn"));
    assert!(language_codes_match("eng", "en"));
    assert!(language_codes_match("ger", "de"));
}

#[test]
fn test_language_codes_match_withDifferentCodes_shouldReturnFalse() {
    assert!(!language_codes_match("ja", "en"));
    assert!(!language_codes_match("ja", "invalid"));
}

#[test]
fn test_get_language_name_withValidCodes_shouldReturnEnglishNames() {
    assert_eq!(get_language_name("ja").unwrap(), "Japanese");
    assert_eq!(get_language_name("eng").unwrap(), "English");
    assert!(get_language_name("zz").is_err());
}
