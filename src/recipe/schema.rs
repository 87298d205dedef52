//! Output schema sent to the model alongside the prompt.
//!
//! Written in the OpenAPI subset the Generative Language API accepts for
//! `responseSchema`. The model is asked to conform, but conformance is not
//! guaranteed; see [`super::validate`].

use std::sync::LazyLock;

use serde_json::{json, Value};

/// Required fields holding a single string.
pub const STRING_FIELDS: [&str; 6] = [
    "title",
    "description",
    "prepTime",
    "cookTime",
    "totalTime",
    "servings",
];

/// Required fields holding an ordered list of strings.
pub const LIST_FIELDS: [&str; 3] = ["ingredients", "instructions", "pantryStaples"];

pub static RECIPE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "Creative and catchy title for the recipe."
            },
            "description": {
                "type": "STRING",
                "description": "A brief, enticing description of the dish (2-3 sentences)."
            },
            "prepTime": {
                "type": "STRING",
                "description": "The preparation time, e.g., \"15 minutes\"."
            },
            "cookTime": {
                "type": "STRING",
                "description": "The cooking time, e.g., \"25 minutes\"."
            },
            "totalTime": {
                "type": "STRING",
                "description": "The total time from start to finish, e.g., \"40 minutes\"."
            },
            "servings": {
                "type": "STRING",
                "description": "The number of servings the recipe makes, e.g., \"4 servings\"."
            },
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A complete list of all ingredients with quantities, e.g., \"1 cup flour\". This list should include the ingredients the user provided."
            },
            "instructions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Clear, step-by-step cooking instructions."
            },
            "pantryStaples": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A short list of 5-7 common pantry items assumed to be available (e.g., salt, pepper, olive oil, common spices for the cuisine) that are required for the recipe and are not already part of the main ingredients."
            }
        },
        "required": [
            "title", "description", "prepTime", "cookTime", "totalTime", "servings",
            "ingredients", "instructions", "pantryStaples"
        ]
    })
});

/// The process-wide recipe schema.
pub fn recipe_schema() -> &'static Value {
    &RECIPE_SCHEMA
}
