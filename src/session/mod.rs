/*!
 * Recognition sessions.
 *
 * This module provides:
 * - Normalization of OCR output into a recognized text
 * - The view a presentation layer renders for one recognition
 * - Running the full-text and word translations for a session
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::RecognitionSession;
pub use models::{FULL_TEXT_FAILED, FullTextState, RecognizedText, SessionView, WORDS_WARNING};
