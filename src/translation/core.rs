/*!
 * Core translation service implementation.
 *
 * This module contains the TranslationService struct, the production
 * translation backend: a local Ollama model prompted to translate one
 * chunk or word at a time, with an in-memory cache in front of it.
 */

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error, info};
use std::time::Instant;

use crate::app_config::{Config, TranslationConfig};
use crate::errors::TranslationError;
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::ollama::{GenerationRequest, Ollama};

use super::backend::TranslationBackend;
use super::cache::TranslationCache;

/// Main translation service backed by a local Ollama server
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Ollama client
    client: Ollama,

    /// Configuration for the translation service
    pub config: TranslationConfig,

    /// Source language code
    source_language: String,

    /// Target language code
    target_language: String,

    /// System prompt with language names filled in
    system_prompt: String,

    /// Translation cache for storing and retrieving translations
    pub cache: TranslationCache,
}

impl TranslationService {
    /// Create a new translation service from the application configuration
    pub fn new(config: &Config) -> Result<Self> {
        let translation = config.translation.clone();
        let client = Ollama::new_with_config(
            &translation.endpoint,
            translation.timeout_secs,
            translation.common.retry_count,
            translation.common.retry_backoff_ms,
        )
        .context("Failed to create Ollama client")?;

        let source_name = language_utils::get_language_name(&config.source_language)?;
        let target_name = language_utils::get_language_name(&config.target_language)?;
        let system_prompt = translation.render_system_prompt(&source_name, &target_name);

        Ok(Self {
            client,
            cache: TranslationCache::new(translation.common.cache_enabled),
            config: translation,
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
            system_prompt,
        })
    }

    /// Prompt sent as the system message
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Check that the Ollama server answers, returning its version
    pub async fn test_connection(&self) -> Result<String> {
        info!("Testing connection to Ollama at {} with model {}", self.client.base_url(), self.config.model);
        let version = self.client.version().await
            .with_context(|| format!("Failed to connect to Ollama at {}", self.client.base_url()))?;
        info!("Connected to Ollama {}", version);
        Ok(version)
    }

    /// Translate a single text string
    pub async fn translate_text(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        if let Some(cached) = self.cache.get(text, &self.source_language, &self.target_language) {
            return Ok(cached);
        }

        let start_time = Instant::now();
        let request = GenerationRequest::new(&self.config.model, text)
            .system(&self.system_prompt)
            .temperature(self.config.common.temperature);

        let response = self.client.complete(request).await.map_err(|e| {
            error!("Ollama translation error: {}", e);
            TranslationError::TranslationFailed(e.to_string())
        })?;

        let translated = Ollama::extract_text(&response);
        debug!("Ollama response received in {:?}", start_time.elapsed());

        self.cache.store(text, &self.source_language, &self.target_language, &translated);
        Ok(translated)
    }
}

#[async_trait]
impl TranslationBackend for TranslationService {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        self.translate_text(text).await
    }
}
