/*!
 * Recognition session lifecycle.
 *
 * A session is created for one recognized text. Starting it launches the
 * full-text translation and the word pass concurrently; both report back
 * over one channel and the session applies their events to its view in
 * arrival order. Closing the session stops the word pass and discards
 * anything still in flight.
 */

use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::errors::TranslationError;
use crate::romanization::{Romanizer, romanize_for_display};
use crate::translation::{
    CancellationToken, IncrementalTranslator, TranslationEvent, WordBatchReport, build_word_items,
};

use super::models::{FullTextState, RecognizedText, SessionView};

/// One recognition and its translations
pub struct RecognitionSession {
    translator: IncrementalTranslator,
    token: CancellationToken,
    japanese_only: bool,
    view: SessionView,
}

impl RecognitionSession {
    /// Create a session; words start out waiting for translation
    pub fn new(
        translator: IncrementalTranslator,
        romanizer: Arc<dyn Romanizer>,
        recognized: RecognizedText,
        japanese_only: bool,
    ) -> Self {
        let text = recognized.as_str();
        let words = build_word_items(text, |word| {
            romanize_for_display(romanizer.as_ref(), word, japanese_only)
        });

        let view = SessionView {
            id: Uuid::new_v4().to_string(),
            recognized_text: text.to_string(),
            romaji_text: romanize_for_display(romanizer.as_ref(), text, japanese_only),
            english: FullTextState::NotRequested,
            words,
            is_processing: false,
            warning: None,
            completed_batches: 0,
            total_batches: 0,
        };

        debug!("Created session {} with {} words", &view.id[..8], view.words.len());

        Self {
            translator,
            token: CancellationToken::new(),
            japanese_only,
            view,
        }
    }

    pub fn id(&self) -> &str {
        &self.view.id
    }

    /// Current presentation state
    pub fn view(&self) -> &SessionView {
        &self.view
    }

    /// Consume the session, keeping its final state
    pub fn into_view(self) -> SessionView {
        self.view
    }

    /// Token that stops this session's word pass when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Tear the session down
    pub fn close(&self) {
        debug!("Closing session {}", &self.view.id[..8]);
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run both translations to completion
    pub async fn start(&mut self) -> WordBatchReport {
        self.start_with_progress(|_, _| {}).await
    }

    /// Run both translations, calling `progress(completed, total)` after
    /// every word batch
    ///
    /// Translation only runs in Japanese-only mode. Returns the word pass
    /// report; the view holds everything else.
    pub async fn start_with_progress<F>(&mut self, mut progress: F) -> WordBatchReport
    where
        F: FnMut(usize, usize),
    {
        if !self.japanese_only {
            debug!("Session {} is not Japanese-only, skipping translation", &self.view.id[..8]);
            return WordBatchReport::default();
        }

        if self.token.is_cancelled() {
            return WordBatchReport { cancelled: true, ..WordBatchReport::default() };
        }

        info!("Translating session {} ({} words)", &self.view.id[..8], self.view.words.len());
        self.view.is_processing = true;
        self.view.english = FullTextState::Pending;

        let (tx, mut rx) = mpsc::unbounded_channel();

        let full_text_task = {
            let translator = self.translator.clone();
            let text = self.view.recognized_text.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = translator.translate_full_text(&text).await;
                if let Err(e) = &result {
                    error!("Full text translation error: {}", e);
                }
                let _ = tx.send(TranslationEvent::FullText(result));
            })
        };

        let word_task = {
            let translator = self.translator.clone();
            let words = self.view.words.clone();
            let token = self.token.clone();
            let tx = tx.clone();
            tokio::spawn(async move { translator.translate_words(words, &token, &tx).await })
        };

        // The loop ends once both tasks have dropped their senders or the
        // session is closed
        drop(tx);

        let mut failed_batches = Vec::new();
        let closed = loop {
            let event = tokio::select! {
                biased;
                _ = self.token.cancelled() => break true,
                event = rx.recv() => match event {
                    Some(event) => event,
                    None => break false,
                },
            };
            if let TranslationEvent::BatchFailed(TranslationError::BatchCallFailed { batch, .. }) = &event {
                failed_batches.push(*batch);
            }
            let words_updated = matches!(event, TranslationEvent::WordsUpdated { .. });
            self.view.apply(event);
            if words_updated {
                progress(self.view.completed_batches, self.view.total_batches);
            }
        };
        drop(rx);

        let report = if closed {
            // In-flight calls finish on their own; their results are discarded
            debug!("Session {} closed while translating", &self.view.id[..8]);
            WordBatchReport {
                total_batches: self.view.total_batches,
                completed_batches: self.view.completed_batches,
                failed_batches,
                cancelled: true,
            }
        } else {
            let mut report = match word_task.await {
                Ok(report) => report,
                Err(e) => {
                    error!("Word translation task failed: {}", e);
                    self.view.raise_word_warning();
                    WordBatchReport { cancelled: true, ..WordBatchReport::default() }
                }
            };
            if let Err(e) = full_text_task.await {
                error!("Full text translation task failed: {}", e);
                self.view.english = FullTextState::Failed;
            }
            report.cancelled |= self.token.is_cancelled();
            report
        };

        if report.has_failures() {
            warn!(
                "{} of {} word batches failed in session {}",
                report.failed_batches.len(),
                report.total_batches,
                &self.view.id[..8]
            );
            self.view.raise_word_warning();
        }

        self.view.is_processing = false;
        report
    }
}
