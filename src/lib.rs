/*!
 * # romalens - romaji and English for Japanese text in images
 *
 * A Rust library that takes the text recognized in a photo and shows its
 * reading and meaning while the translation is still in progress.
 *
 * ## Features
 *
 * - Normalize OCR blocks, optionally keeping Japanese text only
 * - Hepburn romanization of hiragana and katakana
 * - Full-text translation in chunks under a character budget
 * - Word-by-word translation in batches, published after each batch
 * - Translation with a local Ollama model, cached in memory
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: Chunking and incremental translation:
 *   - `translation::chunker`: Character-budget text chunking
 *   - `translation::incremental`: Full-text and word-batch passes
 *   - `translation::core`: Ollama-backed translation service
 *   - `translation::cache`: Caching mechanisms for translations
 * - `session`: One recognition and the view rendered for it
 * - `romanization`: Kana to romaji conversion
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Ollama API client and a mock provider
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod romanization;
pub mod session;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, RecognitionError, TranslationError};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part2t};
pub use romanization::{KanaRomanizer, Romanizer};
pub use session::{RecognitionSession, RecognizedText, SessionView};
pub use translation::{IncrementalTranslator, TextChunker, TranslationService, chunk_text};
