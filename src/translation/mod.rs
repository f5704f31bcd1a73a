/*!
 * Translation of recognized Japanese text.
 *
 * Two passes run over every recognized text. It is split into several submodules:
 *
 * - `chunker`: Splitting long text into chunks under a character budget
 * - `incremental`: The chunked full-text pass and the batched word pass
 * - `words`: Word items and their translation states
 * - `backend`: The translation capability both passes call
 * - `core`: Ollama-backed translation service
 * - `cache`: Caching mechanisms for translations
 * - `cancellation`: Cooperative cancellation of the word pass
 */

// Re-export main types for easier usage
pub use self::backend::TranslationBackend;
pub use self::cancellation::CancellationToken;
pub use self::chunker::{TextChunker, chunk_text};
pub use self::core::TranslationService;
pub use self::incremental::{IncrementalTranslator, TranslationEvent, WordBatchReport};
pub use self::words::{WordItem, WordTranslation, build_word_items, split_into_words};

// Submodules
pub mod backend;
pub mod cache;
pub mod cancellation;
pub mod chunker;
pub mod core;
pub mod incremental;
pub mod words;
