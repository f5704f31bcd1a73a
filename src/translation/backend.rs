/*!
 * The translation backend seam.
 *
 * The incremental translator only needs "translate this string". Anything
 * that can do that (the Ollama-backed service, a mock) implements
 * [`TranslationBackend`].
 */

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::TranslationError;

/// A single-string translation call that may fail
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translate one chunk or word
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

#[async_trait]
impl<T: TranslationBackend + ?Sized> TranslationBackend for Arc<T> {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        (**self).translate(text).await
    }
}
