pub mod context;

mod gemini;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::{RecipeError, Result};

pub use context::GenerateContext;

// -- Plugin trait -----------------------------------------------------------

/// Trait that all LLM backends implement.
///
/// A backend takes a prompt and an output schema and returns the raw text
/// of its JSON response. It makes exactly one provider call per invocation
/// and never retries.
#[async_trait::async_trait]
pub trait LlmBackend: Send + Sync {
    /// Human-readable name of this backend (e.g. "Gemini API").
    fn name(&self) -> &str;

    /// Generate a schema-constrained JSON response for the given context.
    async fn generate(&self, ctx: &GenerateContext<'_>) -> Result<String>;
}

// -- Plugin registry --------------------------------------------------------

/// Registry of available LLM backends, keyed by config name.
pub struct LlmPluginRegistry {
    backends: HashMap<String, Arc<dyn LlmBackend>>,
}

impl LlmPluginRegistry {
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    pub fn register(&mut self, key: &str, backend: Arc<dyn LlmBackend>) {
        info!(backend = key, name = backend.name(), "LLM plugin registered");
        self.backends.insert(key.to_string(), backend);
    }

    pub fn get(&self, key: &str) -> Option<Arc<dyn LlmBackend>> {
        self.backends.get(key).cloned()
    }

    /// All registered backend keys, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.backends.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for LlmPluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// -- Trait implementations for built-in backends ----------------------------

#[async_trait::async_trait]
impl LlmBackend for gemini::GeminiEngine {
    fn name(&self) -> &str { "Gemini API" }
    async fn generate(&self, ctx: &GenerateContext<'_>) -> Result<String> {
        self.generate(ctx).await
    }
}

// -- Backend selection ------------------------------------------------------

/// Build the backend named by `config.llm.backend` (overridable with the
/// `LLM_BACKEND` environment variable).
pub fn from_config(config: &Config) -> Result<Arc<dyn LlmBackend>> {
    let backend = std::env::var("LLM_BACKEND")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| config.llm.backend.clone());

    let mut plugins = LlmPluginRegistry::new();
    plugins.register("gemini", Arc::new(gemini::GeminiEngine::new(config)?));

    match plugins.get(&backend) {
        Some(b) => {
            info!(backend = %backend, name = b.name(), "LLM backend selected");
            Ok(b)
        }
        None => Err(RecipeError::Config(format!(
            "unknown LLM backend \"{backend}\" (available: [{}])",
            plugins.list().join(", "),
        ))),
    }
}
