/*!
 * Common test utilities for the romalens test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use tokio::sync::mpsc;

use romalens::app_config::PipelineConfig;
use romalens::errors::TranslationError;
use romalens::providers::mock::MockProvider;
use romalens::translation::{
    CancellationToken, IncrementalTranslator, TranslationBackend, TranslationEvent, WordItem,
};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Pipeline settings with no pause between batches
pub fn pipeline_config(max_chars: usize, batch_size: usize) -> PipelineConfig {
    PipelineConfig {
        max_chars_per_translation: max_chars,
        batch_size,
        batch_delay_ms: 0,
    }
}

/// Translator over a mock provider
pub fn translator(provider: &MockProvider, max_chars: usize, batch_size: usize) -> IncrementalTranslator {
    IncrementalTranslator::new(Arc::new(provider.clone()), pipeline_config(max_chars, batch_size))
}

/// Word items `w0`, `w1`, ... with placeholder romaji
pub fn numbered_words(count: usize) -> Vec<WordItem> {
    (0..count)
        .map(|i| WordItem::new(i, format!("w{}", i), format!("r{}", i)))
        .collect()
}

/// Every event currently queued on the receiver
pub fn drain_events(rx: &mut mpsc::UnboundedReceiver<TranslationEvent>) -> Vec<TranslationEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// The word lists carried by `WordsUpdated` events, in order
pub fn published_lists(events: &[TranslationEvent]) -> Vec<Vec<WordItem>> {
    events
        .iter()
        .filter_map(|event| match event {
            TranslationEvent::WordsUpdated { words, .. } => Some(words.clone()),
            _ => None,
        })
        .collect()
}

/// Backend that cancels a token once it has seen a given number of calls
pub struct CancelAfterBackend {
    pub inner: MockProvider,
    pub token: CancellationToken,
    pub cancel_after: usize,
    pub calls: AtomicUsize,
}

impl CancelAfterBackend {
    pub fn new(token: CancellationToken, cancel_after: usize) -> Self {
        Self {
            inner: MockProvider::working(),
            token,
            cancel_after,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TranslationBackend for CancelAfterBackend {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) + 1 >= self.cancel_after {
            self.token.cancel();
        }
        self.inner.translate(text).await
    }
}
