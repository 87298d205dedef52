//! Closed option lists offered by the form, and the supported output languages.
//!
//! The first entry of every preference list is its "no preference" sentinel
//! and is what the form starts with.

use serde::Serialize;

/// Sentinel for cuisine and course meaning "no preference".
pub const ANY: &str = "Any";
/// Sentinel for diet and allergies meaning "no restriction".
pub const NONE: &str = "None";

pub const CUISINE_OPTIONS: &[&str] = &[
    ANY,
    "Italian",
    "Mexican",
    "Chinese",
    "Indian",
    "Japanese",
    "Thai",
    "French",
    "Mediterranean",
    "Middle Eastern",
    "American",
];

pub const DIET_OPTIONS: &[&str] = &[
    NONE,
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Keto",
    "Paleo",
    "Low-Carb",
];

pub const ALLERGY_OPTIONS: &[&str] = &[
    NONE,
    "Peanuts",
    "Tree Nuts",
    "Dairy",
    "Eggs",
    "Soy",
    "Wheat",
    "Fish",
    "Shellfish",
];

pub const COURSE_OPTIONS: &[&str] = &[
    ANY,
    "Breakfast",
    "Lunch",
    "Dinner",
    "Appetizer",
    "Side Dish",
    "Dessert",
    "Snack",
];

/// Output language for the generated recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
    Ar,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::He, Language::Ar];

    /// Resolve a language code. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "he" => Language::He,
            "ar" => Language::Ar,
            _ => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
            Language::Ar => "ar",
        }
    }

    /// English name of the language, as used inside the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::He => "Hebrew",
            Language::Ar => "Arabic",
        }
    }

    /// Name of the language in the language itself, for the selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::He => "עברית",
            Language::Ar => "العربية",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::He | Language::Ar)
    }
}
