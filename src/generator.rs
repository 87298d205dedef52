use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{GenerationFailure, Result};
use crate::llm::{GenerateContext, LlmBackend};
use crate::recipe::{self, GenerationRequest, Recipe, RecipePrompt};

/// Runs one prompt through the backend and validates what comes back.
///
/// Holds no per-call state; clones share the backend.
#[derive(Clone)]
pub struct RecipeGenerator {
    backend: Arc<dyn LlmBackend>,
}

impl RecipeGenerator {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Generate a recipe from a prepared prompt.
    ///
    /// Makes exactly one backend call. Any failure, whether transport,
    /// refusal, bad JSON or a schema mismatch, comes back as a
    /// [`GenerationFailure`] carrying the cause; nothing partial is returned.
    pub async fn generate(&self, prompt: &RecipePrompt) -> std::result::Result<Recipe, GenerationFailure> {
        match self.try_generate(prompt).await {
            Ok(recipe) => {
                info!(
                    title = %recipe.title,
                    ingredients = recipe.ingredients.len(),
                    steps = recipe.instructions.len(),
                    language = prompt.language.code(),
                    "recipe generated"
                );
                Ok(recipe)
            }
            Err(cause) => {
                warn!(backend = self.backend.name(), error = %cause, "recipe generation failed");
                Err(GenerationFailure::new(cause))
            }
        }
    }

    /// Check the submission, build its prompt and generate.
    ///
    /// Blank ingredients are the caller's problem: this returns the input
    /// error without touching the backend.
    pub async fn generate_for(
        &self,
        req: &GenerationRequest,
    ) -> Result<std::result::Result<Recipe, GenerationFailure>> {
        req.check_input()?;
        let prompt = recipe::build_request(req);
        Ok(self.generate(&prompt).await)
    }

    async fn try_generate(&self, prompt: &RecipePrompt) -> Result<Recipe> {
        let ctx = GenerateContext {
            prompt: &prompt.text,
            schema: prompt.schema,
        };
        let raw = self.backend.generate(&ctx).await?;
        recipe::parse_recipe(&raw)
    }
}
