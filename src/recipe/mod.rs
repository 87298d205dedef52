pub mod options;
pub mod request;
pub mod schema;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use request::{build_request, GenerationRequest, RecipePrompt};
pub use validate::parse_recipe;

/// A recipe that passed validation.
///
/// List order is significant: ingredients as listed, instructions as steps,
/// staples as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub pantry_staples: Vec<String>,
}
