/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use romalens::app_config::{Config, LogLevel, PipelineConfig};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "ja");
    assert_eq!(config.target_language, "en");
    assert_eq!(config.translation.endpoint, "http://localhost:11434");
    assert_eq!(config.translation.timeout_secs, 30);
    assert_eq!(config.pipeline.max_chars_per_translation, 20);
    assert_eq!(config.pipeline.batch_size, 5);
    assert_eq!(config.pipeline.batch_delay_ms, 50);
    assert!(config.recognition.japanese_only);
    assert!(config.translation.common.cache_enabled);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid source language
    config.source_language = "xyz".to_string();
    assert!(config.validate().is_err());
    config.source_language = "ja".to_string();

    // Same language on both sides, even in different code formats
    config.target_language = "jpn".to_string();
    assert!(config.validate().is_err());
    config.target_language = "en".to_string();

    config.translation.model = "  ".to_string();
    assert!(config.validate().is_err());
    config.translation.model = "llama3.2:3b".to_string();

    config.translation.common.temperature = 1.5;
    assert!(config.validate().is_err());
    config.translation.common.temperature = 0.3;

    config.pipeline.max_chars_per_translation = 0;
    assert!(config.validate().is_err());
    config.pipeline.max_chars_per_translation = 20;

    config.pipeline.batch_size = 0;
    assert!(config.validate().is_err());
    config.pipeline.batch_size = 5;

    assert!(config.validate().is_ok());
}

/// Test that partial JSON files fall back to defaults
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "pipeline": { "batch_size": 3 }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.pipeline.batch_size, 3);
    assert_eq!(config.pipeline.max_chars_per_translation, 20);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.source_language, "ja");
    Ok(())
}

/// Test that a missing file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    let reloaded = Config::from_file(&path)?;
    assert_eq!(reloaded.pipeline, config.pipeline);
    assert_eq!(reloaded.pipeline, PipelineConfig::default());
    Ok(())
}

/// Test that the system prompt names both languages
#[test]
fn test_render_system_prompt_shouldSubstituteLanguageNames() {
    let config = Config::default();
    let prompt = config.translation.render_system_prompt("Japanese", "English");
    assert!(prompt.contains("from Japanese to English"));
    assert!(!prompt.contains('{'));
}

#[test]
fn test_batch_delay_shouldConvertMilliseconds() {
    let pipeline = PipelineConfig { batch_delay_ms: 250, ..PipelineConfig::default() };
    assert_eq!(pipeline.batch_delay().as_millis(), 250);
}
