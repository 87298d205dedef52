//! Client-side re-check of the model's JSON output.
//!
//! The provider is asked to follow [`super::schema`], but nothing downstream
//! trusts that. The derived `Deserialize` on [`Recipe`] enforces presence and
//! string typing of all nine fields; only the non-blank title is checked here.

use serde_json::Value;

use crate::error::{RecipeError, Result};
use crate::recipe::Recipe;

/// Parse raw model output into a validated recipe.
pub fn parse_recipe(raw: &str) -> Result<Recipe> {
    let value: Value = serde_json::from_str(raw.trim())?;
    validate_recipe(value)
}

/// Validate an already-parsed JSON value.
pub fn validate_recipe(value: Value) -> Result<Recipe> {
    if !value.is_object() {
        return Err(RecipeError::SchemaViolation(format!(
            "expected a JSON object, got {}",
            type_name(&value)
        )));
    }

    let recipe: Recipe =
        serde_json::from_value(value).map_err(|e| RecipeError::SchemaViolation(e.to_string()))?;

    if recipe.title.trim().is_empty() {
        return Err(RecipeError::SchemaViolation("title is empty".into()));
    }

    Ok(recipe)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
