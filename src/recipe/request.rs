use serde::Deserialize;
use serde_json::Value;

use crate::error::{RecipeError, Result, MISSING_INGREDIENTS_MESSAGE};
use crate::recipe::options::{Language, ANY, NONE};
use crate::recipe::schema;

/// One form submission.
///
/// Preference fields are opaque strings; missing fields take the sentinel
/// default so a bare `{"ingredients": "..."}` body is a valid request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default = "default_any")]
    pub cuisine: String,
    #[serde(default = "default_none")]
    pub diet: String,
    #[serde(default = "default_none")]
    pub allergies: String,
    #[serde(default = "default_any")]
    pub course: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_any() -> String {
    ANY.to_string()
}
fn default_none() -> String {
    NONE.to_string()
}
fn default_language() -> String {
    Language::En.code().to_string()
}

impl GenerationRequest {
    #[cfg(test)]
    pub fn new(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            cuisine: default_any(),
            diet: default_none(),
            allergies: default_none(),
            course: default_any(),
            language: default_language(),
        }
    }

    /// Reject a submission with no ingredients before anything is sent.
    pub fn check_input(&self) -> Result<()> {
        if self.ingredients.trim().is_empty() {
            return Err(RecipeError::Input(MISSING_INGREDIENTS_MESSAGE.into()));
        }
        Ok(())
    }
}

/// Prompt text plus the schema the response must follow.
#[derive(Debug, Clone)]
pub struct RecipePrompt {
    pub text: String,
    pub schema: &'static Value,
    pub language: Language,
}

fn cuisine_phrase(cuisine: &str) -> &str {
    if cuisine == ANY { "Be creative" } else { cuisine }
}

fn diet_phrase(diet: &str) -> &str {
    if diet == NONE { "No specific restrictions" } else { diet }
}

fn allergies_phrase(allergies: &str) -> &str {
    if allergies == NONE { "No allergies specified" } else { allergies }
}

fn course_phrase(course: &str) -> &str {
    if course == ANY { "Any type of dish is fine" } else { course }
}

/// Build the prompt and schema for a submission.
///
/// Pure: the same request always yields the same prompt text, and the
/// schema is the process-wide constant.
pub fn build_request(req: &GenerationRequest) -> RecipePrompt {
    let language = Language::from_code(&req.language);
    let language_name = language.name();

    let text = format!(
        r#"You are a culinary expert who creates easy-to-follow recipes. Based on the ingredients and constraints provided, generate a delicious recipe.
The entire recipe, including the title, description, ingredients, instructions, and pantry staples, must be in {language_name}. Every text field and every entry of every list must be written in {language_name}.

Available ingredients: {ingredients}
Desired cuisine: {cuisine}
Dietary preference: {diet}
Allergies to avoid: {allergies}
Desired course type: {course}

Please provide the output in the structured JSON format as specified.
The recipe must include: a creative title, a brief description, prep/cook/total times, servings, a list of all ingredients (including amounts), and step-by-step instructions.

IMPORTANT: Also provide a separate short list named "pantryStaples" containing 5-7 common household items like salt, pepper, oil, and common spices relevant to the cuisine that the recipe assumes the user has. Do not repeat items that already appear in the main ingredients list."#,
        ingredients = req.ingredients,
        cuisine = cuisine_phrase(&req.cuisine),
        diet = diet_phrase(&req.diet),
        allergies = allergies_phrase(&req.allergies),
        course = course_phrase(&req.course),
    );

    RecipePrompt {
        text,
        schema: schema::recipe_schema(),
        language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_same_prompt() {
        let req = GenerationRequest {
            ingredients: "eggs, spinach, feta".into(),
            cuisine: "Mediterranean".into(),
            diet: "Vegetarian".into(),
            allergies: "Peanuts".into(),
            course: "Breakfast".into(),
            language: "en".into(),
        };
        let a = build_request(&req);
        let b = build_request(&req);
        assert_eq!(a.text, b.text);
        assert!(a.text.contains("eggs, spinach, feta"));
        assert!(a.text.contains("Desired cuisine: Mediterranean"));
        assert!(a.text.contains("Dietary preference: Vegetarian"));
        assert!(a.text.contains("Allergies to avoid: Peanuts"));
        assert!(a.text.contains("Desired course type: Breakfast"));
    }

    #[test]
    fn ingredients_are_embedded_verbatim() {
        let raw = "  chicken, rice \n";
        let req = GenerationRequest::new(raw);
        assert!(req.check_input().is_ok());
        let prompt = build_request(&req).text;
        assert!(prompt.contains(&format!("Available ingredients: {raw}\nDesired cuisine:")));
    }

    #[test]
    fn sentinels_are_reworded() {
        let prompt = build_request(&GenerationRequest::new("chicken, rice")).text;

        assert!(prompt.contains("Desired cuisine: Be creative"));
        assert!(prompt.contains("Dietary preference: No specific restrictions"));
        assert!(prompt.contains("Allergies to avoid: No allergies specified"));
        assert!(prompt.contains("Desired course type: Any type of dish is fine"));

        assert!(!prompt.contains("Desired cuisine: Any"));
        assert!(!prompt.contains("Dietary preference: None"));
        assert!(!prompt.contains("Allergies to avoid: None"));
    }

    #[test]
    fn default_request_mentions_creativity_and_no_restrictions() {
        let prompt = build_request(&GenerationRequest::new("chicken, rice")).text;
        assert!(prompt.to_lowercase().contains("be creative"));
        assert!(prompt.contains("No specific restrictions"));
        assert!(prompt.contains("Available ingredients: chicken, rice"));
    }

    #[test]
    fn hebrew_is_named_as_output_language() {
        let mut req = GenerationRequest::new("tomatoes");
        req.language = "he".into();
        let prompt = build_request(&req);
        assert_eq!(prompt.language, Language::He);
        assert!(prompt.text.contains("must be in Hebrew"));
        assert!(!prompt.text.contains("English"));
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let mut req = GenerationRequest::new("tomatoes");
        req.language = "fr".into();
        let prompt = build_request(&req);
        assert_eq!(prompt.language, Language::En);
        assert!(prompt.text.contains("must be in English"));
    }

    #[test]
    fn prompt_asks_for_pantry_staples() {
        let prompt = build_request(&GenerationRequest::new("beans")).text;
        assert!(prompt.contains("pantryStaples"));
        assert!(prompt.contains("5-7"));
    }

    #[test]
    fn schema_is_the_shared_constant() {
        let a = build_request(&GenerationRequest::new("a"));
        let b = build_request(&GenerationRequest::new("b"));
        assert!(std::ptr::eq(a.schema, b.schema));
        assert!(std::ptr::eq(a.schema, schema::recipe_schema()));
    }

    #[test]
    fn blank_ingredients_are_rejected() {
        let err = GenerationRequest::new("   \n\t").check_input().unwrap_err();
        match err {
            RecipeError::Input(msg) => assert_eq!(msg, MISSING_INGREDIENTS_MESSAGE),
            other => panic!("unexpected error: {other}"),
        }
        assert!(GenerationRequest::new("rice").check_input().is_ok());
    }

    #[test]
    fn missing_fields_deserialize_to_sentinels() {
        let req: GenerationRequest = serde_json::from_str(r#"{"ingredients": "rice"}"#).unwrap();
        assert_eq!(req.cuisine, ANY);
        assert_eq!(req.diet, NONE);
        assert_eq!(req.allergies, NONE);
        assert_eq!(req.course, ANY);
        assert_eq!(req.language, "en");
    }
}
