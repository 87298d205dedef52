use thiserror::Error;

/// Message shown to the user for every generation failure, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate recipe. The model may be unable to \
     create a recipe with the provided ingredients or experienced an issue. Please try again.";

/// Message shown when the form is submitted without ingredients.
pub const MISSING_INGREDIENTS_MESSAGE: &str = "Please enter some ingredients to get started.";

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("missing credential: {0}")]
    MissingCredential(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request refused by provider: {0}")]
    Refused(String),

    #[error("response is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("schema violation: {0}")]
    SchemaViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecipeError>;

/// A failed generation attempt.
///
/// Displays as [`GENERIC_FAILURE_MESSAGE`] so callers can hand it straight to
/// the user; the underlying [`RecipeError`] stays available for logging.
#[derive(Error, Debug)]
#[error("{}", GENERIC_FAILURE_MESSAGE)]
pub struct GenerationFailure {
    #[source]
    pub cause: RecipeError,
}

impl GenerationFailure {
    pub fn new(cause: RecipeError) -> Self {
        Self { cause }
    }
}
