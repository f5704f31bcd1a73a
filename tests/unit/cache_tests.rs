/*!
 * Tests for translation cache functionality
 */

use romalens::translation::cache::TranslationCache;

#[test]
fn test_cache_new_withDisabled_shouldNeverReturnEntries() {
    let cache = TranslationCache::new(false);
    cache.store("猫", "ja", "en", "cat");

    assert!(cache.get("猫", "ja", "en").is_none());
    assert!(cache.is_empty());
    assert!(!cache.is_enabled());
}

#[test]
fn test_cache_store_withEnabledCache_shouldStoreTranslation() {
    let cache = TranslationCache::new(true);
    cache.store("猫", "ja", "en", "cat");

    assert_eq!(cache.get("猫", "ja", "en"), Some("cat".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_get_withDifferentLanguages_shouldReturnNone() {
    let cache = TranslationCache::new(true);
    cache.store("猫", "ja", "en", "cat");

    assert!(cache.get("猫", "ja", "fr").is_none());
    assert!(cache.get("猫", "zh", "en").is_none());
}

#[test]
fn test_cache_stats_shouldCountHitsAndMisses() {
    let cache = TranslationCache::new(true);
    cache.store("犬", "ja", "en", "dog");

    let _ = cache.get("犬", "ja", "en");
    let _ = cache.get("犬", "ja", "en");
    let _ = cache.get("鳥", "ja", "en");

    let stats = cache.stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert!((stats.hit_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_cache_clone_shouldShareEntries() {
    let cache = TranslationCache::new(true);
    let clone = cache.clone();
    clone.store("魚", "ja", "en", "fish");

    assert_eq!(cache.get("魚", "ja", "en"), Some("fish".to_string()));
}

#[test]
fn test_cache_clear_shouldResetEntriesAndStats() {
    let cache = TranslationCache::default();
    cache.store("魚", "ja", "en", "fish");
    let _ = cache.get("魚", "ja", "en");

    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.stats().hits, 0);
    assert_eq!(cache.stats().hit_rate(), 0.0);
}
