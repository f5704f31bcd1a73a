/*!
 * Error types for the romalens application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to the translation backend
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug, Clone)]
pub enum TranslationError {
    /// A single backend call was rejected
    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    /// One chunk of a full-text translation failed, which fails the whole text
    #[error("Translation failed on chunk {} of {total}: {reason}", .chunk + 1)]
    ChunkCallFailed {
        /// Zero-based chunk index
        chunk: usize,
        /// Number of chunks in the request
        total: usize,
        /// Underlying backend error message
        reason: String,
    },

    /// A word batch failed; reported to the caller, never fatal
    #[error("Translation failed on word batch {}: {reason}", .batch + 1)]
    BatchCallFailed {
        /// Zero-based batch index
        batch: usize,
        /// Underlying backend error message
        reason: String,
    },

    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl TranslationError {
    /// The underlying backend message, without the variant prefix
    pub fn reason(&self) -> String {
        match self {
            Self::TranslationFailed(reason) => reason.clone(),
            Self::ChunkCallFailed { reason, .. } => reason.clone(),
            Self::BatchCallFailed { reason, .. } => reason.clone(),
            Self::Provider(e) => e.to_string(),
        }
    }
}

/// Errors raised while turning OCR output into source text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecognitionError {
    /// Japanese-only mode found no Japanese characters
    #[error("No Japanese text detected")]
    NoJapaneseText,

    /// The recognizer produced nothing usable
    #[error("No text detected")]
    NoText,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from text recognition
    #[error("Recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
