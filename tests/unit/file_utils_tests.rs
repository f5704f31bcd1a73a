/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use romalens::file_utils::FileManager;
use serde::Serialize;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "sign.txt", "出口")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    Ok(())
}

#[test]
fn test_read_input_withFilePath_shouldReadContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "sign.txt", "非常口\n")?;

    let content = FileManager::read_input(test_file.to_string_lossy().as_ref())?;

    assert_eq!(content, "非常口\n");
    Ok(())
}

#[test]
fn test_read_input_withMissingFile_shouldReturnError() {
    assert!(FileManager::read_input("definitely_missing_input.txt").is_err());
}

#[derive(Serialize)]
struct Sample {
    word: &'static str,
}

/// Test that JSON output creates missing parent directories
#[test]
fn test_write_json_withNestedPath_shouldCreateDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("nested").join("result.json");

    FileManager::write_json(&path, &Sample { word: "猫" })?;

    let written = FileManager::read_to_string(&path)?;
    let value: serde_json::Value = serde_json::from_str(&written)?;
    assert_eq!(value["word"], "猫");
    Ok(())
}
