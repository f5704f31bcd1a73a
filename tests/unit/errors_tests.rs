/*!
 * Tests for error types and conversions
 */

use romalens::errors::{AppError, ProviderError, RecognitionError, TranslationError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 503,
        message: "model is loading".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("503"));
    assert!(display.contains("model is loading"));
}

#[test]
fn test_providerError_connectionError_shouldDisplayCorrectly() {
    let error = ProviderError::ConnectionError("Host unreachable".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Connection error"));
    assert!(display.contains("Host unreachable"));
}

#[test]
fn test_translationError_chunkCallFailed_shouldDisplayOneBasedChunk() {
    let error = TranslationError::ChunkCallFailed {
        chunk: 1,
        total: 3,
        reason: "timeout".to_string(),
    };
    assert_eq!(error.to_string(), "Translation failed on chunk 2 of 3: timeout");
    assert_eq!(error.reason(), "timeout");
}

#[test]
fn test_translationError_batchCallFailed_shouldDisplayOneBasedBatch() {
    let error = TranslationError::BatchCallFailed {
        batch: 0,
        reason: "refused".to_string(),
    };
    assert_eq!(error.to_string(), "Translation failed on word batch 1: refused");
}

#[test]
fn test_translationError_fromProviderError_shouldWrapCorrectly() {
    let provider_error = ProviderError::RequestFailed("Test error".to_string());
    let error: TranslationError = provider_error.into();

    assert!(matches!(error, TranslationError::Provider(_)));
    assert!(error.reason().contains("Test error"));
}

#[test]
fn test_recognitionError_shouldDisplayUserMessages() {
    assert_eq!(RecognitionError::NoJapaneseText.to_string(), "No Japanese text detected");
    assert_eq!(RecognitionError::NoText.to_string(), "No text detected");
}

#[test]
fn test_appError_fromVariousErrors_shouldWrapCorrectly() {
    let error: AppError = RecognitionError::NoText.into();
    assert!(matches!(error, AppError::Recognition(_)));

    let error: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(error, AppError::File(_)));

    let error: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(error.to_string(), "Unknown error: boom");
}
