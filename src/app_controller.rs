use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::romanization::{KanaRomanizer, Romanizer, romanize_for_display};
use crate::session::{RecognitionSession, RecognizedText, SessionView};
use crate::translation::{
    IncrementalTranslator, TranslationBackend, TranslationService, WordBatchReport, WordItem,
    build_word_items, chunk_text,
};

// @module: Application controller for recognition and translation

/// Result of one `translate` run, as written to the JSON output
#[derive(Debug, Clone, Serialize)]
pub struct TranslationOutput {
    pub session: SessionView,
    pub report: WordBatchReport,
    pub elapsed_ms: u128,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Backend both translation passes call
    backend: Arc<dyn TranslationBackend>,
    // @field: Ollama service when the backend is the real one
    service: Option<TranslationService>,
    romanizer: Arc<dyn Romanizer>,
    show_progress: bool,
}

impl Controller {
    // @method: Create a controller backed by the configured Ollama server
    pub fn with_config(config: Config) -> Result<Self> {
        let service = TranslationService::new(&config).context("Failed to create translation service")?;
        let backend: Arc<dyn TranslationBackend> = Arc::new(service.clone());
        Ok(Self {
            config,
            backend,
            service: Some(service),
            romanizer: Arc::new(KanaRomanizer::new()),
            show_progress: true,
        })
    }

    // @method: Create a controller over any backend
    pub fn with_backend(config: Config, backend: Arc<dyn TranslationBackend>) -> Self {
        Self {
            config,
            backend,
            service: None,
            romanizer: Arc::new(KanaRomanizer::new()),
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn set_show_progress(&mut self, show: bool) {
        self.show_progress = show;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check that the translation server is reachable
    pub async fn test_connection(&self) -> Result<String> {
        match &self.service {
            Some(service) => service.test_connection().await,
            None => Ok("custom backend".to_string()),
        }
    }

    /// Normalize input text the way OCR blocks are normalized
    pub fn recognize(&self, content: &str, as_blocks: bool) -> Result<RecognizedText> {
        let japanese_only = self.config.recognition.japanese_only;
        let recognized = if as_blocks {
            RecognizedText::from_blocks(&FileManager::blocks_from_lines(content), japanese_only)?
        } else {
            RecognizedText::from_plain(content, japanese_only)?
        };
        Ok(recognized)
    }

    /// Run a full recognition session over the input
    pub async fn translate(&self, input: &str, as_blocks: bool, output: Option<&Path>) -> Result<TranslationOutput> {
        let start_time = Instant::now();
        let content = FileManager::read_input(input)?;
        let recognized = self.recognize(&content, as_blocks)?;

        let translator = IncrementalTranslator::new(Arc::clone(&self.backend), self.config.pipeline.clone());
        let mut session = RecognitionSession::new(
            translator,
            Arc::clone(&self.romanizer),
            recognized,
            self.config.recognition.japanese_only,
        );

        info!("Translating, please wait…");
        let progress_bar = self.progress_bar();
        let pb = progress_bar.clone();
        let report = session
            .start_with_progress(move |completed, total| {
                pb.set_length(total as u64);
                pb.set_position(completed as u64);
            })
            .await;
        progress_bar.finish_and_clear();

        let elapsed = start_time.elapsed();
        if report.has_failures() {
            warn!("{} of {} word batches failed", report.failed_batches.len(), report.total_batches);
        }
        info!("Translation finished in {}", Self::format_duration(elapsed));

        let result = TranslationOutput {
            session: session.into_view(),
            report,
            elapsed_ms: elapsed.as_millis(),
        };

        if let Some(path) = output {
            FileManager::write_json(path, &result)?;
            info!("Success: {}", path.display());
        }

        Ok(result)
    }

    /// Chunks the full-text pass would send
    pub fn chunk(&self, input: &str) -> Result<Vec<String>> {
        let content = FileManager::read_input(input)?;
        let chunks = chunk_text(&content, self.config.pipeline.max_chars_per_translation);
        debug!("Split input into {} chunks", chunks.len());
        Ok(chunks)
    }

    /// Word list with romaji, before any translation
    pub fn words(&self, input: &str, as_blocks: bool) -> Result<Vec<WordItem>> {
        let content = FileManager::read_input(input)?;
        let recognized = self.recognize(&content, as_blocks)?;
        let japanese_only = self.config.recognition.japanese_only;
        Ok(build_word_items(recognized.as_str(), |word| {
            romanize_for_display(self.romanizer.as_ref(), word, japanese_only)
        }))
    }

    /// Plain-text rendering of a finished session
    pub fn render_view(view: &SessionView) -> String {
        let mut out = String::new();
        out.push_str(&format!("Japanese: {}\n", view.recognized_text));
        out.push_str(&format!("Romaji:   {}\n", view.romaji_text));
        out.push_str(&format!("English:  {}\n", view.english));

        if !view.words.is_empty() {
            out.push('\n');
            for item in &view.words {
                out.push_str(&format!("  {}  {}  {}\n", item.japanese, item.romaji, item.english));
            }
        }

        if let Some(warning) = &view.warning {
            out.push_str(&format!("\nWarning: {}\n", warning));
        }
        out
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let progress_bar = ProgressBar::new(0);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Translating words");
        progress_bar
    }

    // Format duration in a human-readable format
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
