/*!
 * Incremental translation of recognized text.
 *
 * Two independent passes share one backend:
 * - the full-text pass chunks long text, translates every chunk
 *   concurrently and joins the results in order;
 * - the word pass walks the word list in fixed-size batches, one batch at
 *   a time, and publishes the whole updated list after every batch so the
 *   presentation layer can render partial progress.
 */

use futures::future::try_join_all;
use log::{debug, error};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use crate::app_config::PipelineConfig;
use crate::errors::TranslationError;

use super::backend::TranslationBackend;
use super::cancellation::CancellationToken;
use super::chunker::TextChunker;
use super::words::{WordItem, WordTranslation};

/// Messages published by the translator to whoever renders its progress
#[derive(Debug, Clone)]
pub enum TranslationEvent {
    /// A complete new copy of the word list
    WordsUpdated {
        words: Vec<WordItem>,
        /// Batches resolved so far, failed ones included
        completed_batches: usize,
        total_batches: usize,
    },
    /// A word batch failed with [`TranslationError::BatchCallFailed`]; its
    /// words are marked [`WordTranslation::Failed`]
    BatchFailed(TranslationError),
    /// The full-text pass finished
    FullText(Result<String, TranslationError>),
}

/// Summary of one word pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordBatchReport {
    pub total_batches: usize,
    pub completed_batches: usize,
    /// Zero-based indices of batches whose calls failed
    pub failed_batches: Vec<usize>,
    /// The pass stopped early because its consumer went away
    pub cancelled: bool,
}

impl WordBatchReport {
    /// Whether the caller should warn that some words were not translated
    pub fn has_failures(&self) -> bool {
        !self.failed_batches.is_empty()
    }
}

/// Chunked full-text translation and batched word translation
#[derive(Clone)]
pub struct IncrementalTranslator {
    backend: Arc<dyn TranslationBackend>,
    config: PipelineConfig,
}

impl IncrementalTranslator {
    /// Create a translator over a backend
    pub fn new(backend: Arc<dyn TranslationBackend>, config: PipelineConfig) -> Self {
        Self { backend, config }
    }

    /// Pipeline settings in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Translate a whole text, chunking it when it exceeds the budget
    ///
    /// Whitespace-only text returns an empty string without calling the
    /// backend. A failed chunk fails the whole text.
    pub async fn translate_full_text(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let chunker = TextChunker::new(self.config.max_chars_per_translation);
        if chunker.fits(text) {
            return self.backend.translate(text).await.map_err(|e| {
                error!("Full text translation failed: {}", e);
                TranslationError::ChunkCallFailed { chunk: 0, total: 1, reason: e.reason() }
            });
        }

        let chunks = chunker.chunk(text);
        let total = chunks.len();
        debug!("Translating full text in {} chunks of at most {} chars", total, chunker.max_chars());

        let calls = chunks.iter().enumerate().map(|(index, chunk)| {
            let backend = Arc::clone(&self.backend);
            async move {
                backend.translate(chunk).await.map_err(|e| {
                    error!("Chunk {}/{} failed: {}", index + 1, total, e);
                    TranslationError::ChunkCallFailed { chunk: index, total, reason: e.reason() }
                })
            }
        });

        let translations = try_join_all(calls).await?;
        Ok(translations.join("\n"))
    }

    /// Translate a word list batch by batch, publishing after each batch
    ///
    /// Never fails: batch errors are logged, reported through `events` and
    /// in the returned report. The pass stops silently when `token` is
    /// cancelled or the receiving end of `events` is dropped.
    pub async fn translate_words(
        &self,
        words: Vec<WordItem>,
        token: &CancellationToken,
        events: &UnboundedSender<TranslationEvent>,
    ) -> WordBatchReport {
        let batch_size = self.config.batch_size.max(1);
        let total_batches = words.len().div_ceil(batch_size);
        let mut report = WordBatchReport {
            total_batches,
            ..WordBatchReport::default()
        };

        let mut current: Vec<WordItem> = words
            .iter()
            .map(|item| item.with_english(WordTranslation::Pending))
            .collect();

        if token.is_cancelled() || !publish(events, &current, 0, total_batches) {
            report.cancelled = true;
            return report;
        }

        for batch in 0..total_batches {
            if batch > 0 && !self.config.batch_delay().is_zero() {
                tokio::time::sleep(self.config.batch_delay()).await;
            }

            if token.is_cancelled() {
                debug!("Word translation cancelled before batch {}/{}", batch + 1, total_batches);
                report.cancelled = true;
                return report;
            }

            let start = batch * batch_size;
            let end = (start + batch_size).min(current.len());
            debug!("Translating word batch {}/{} (words {}-{})", batch + 1, total_batches, start, end - 1);

            let result = self.translate_batch(&current[start..end]).await;

            if token.is_cancelled() {
                debug!("Word translation cancelled during batch {}/{}", batch + 1, total_batches);
                report.cancelled = true;
                return report;
            }

            let outcome: Vec<WordTranslation> = match result {
                Ok(translations) => translations.into_iter().map(WordTranslation::Translated).collect(),
                Err(e) => {
                    error!("Error translating word batch {}/{}: {}", batch + 1, total_batches, e);
                    report.failed_batches.push(batch);
                    let failure = TranslationError::BatchCallFailed { batch, reason: e.reason() };
                    let _ = events.send(TranslationEvent::BatchFailed(failure));
                    vec![WordTranslation::Failed; end - start]
                }
            };

            current = current
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    if (start..end).contains(&index) {
                        item.with_english(outcome[index - start].clone())
                    } else {
                        item.clone()
                    }
                })
                .collect();
            report.completed_batches += 1;

            if !publish(events, &current, report.completed_batches, total_batches) {
                debug!("Word list receiver dropped, stopping word translation");
                report.cancelled = true;
                return report;
            }
        }

        report
    }

    /// One concurrent call per non-blank word; results in input order
    async fn translate_batch(&self, items: &[WordItem]) -> Result<Vec<String>, TranslationError> {
        let calls = items.iter().map(|item| {
            let backend = Arc::clone(&self.backend);
            let word = item.japanese.clone();
            async move {
                if word.trim().is_empty() {
                    Ok(String::new())
                } else {
                    backend.translate(&word).await
                }
            }
        });

        try_join_all(calls).await
    }
}

fn publish(
    events: &UnboundedSender<TranslationEvent>,
    words: &[WordItem],
    completed_batches: usize,
    total_batches: usize,
) -> bool {
    events
        .send(TranslationEvent::WordsUpdated {
            words: words.to_vec(),
            completed_batches,
            total_batches,
        })
        .is_ok()
}
