use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::routes::AppState;
use crate::error::RecipeError;
use crate::i18n::{self, Translations};
use crate::recipe::options::{self, Language};
use crate::recipe::{GenerationRequest, Recipe};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct RecipeResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub recipe: Recipe,
}

#[derive(Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub dir: &'static str,
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub cuisines: &'static [&'static str],
    pub diets: &'static [&'static str],
    pub allergies: &'static [&'static str],
    pub courses: &'static [&'static str],
    pub languages: Vec<LanguageOption>,
}

#[derive(Serialize)]
pub struct TranslationsResponse {
    pub lang: &'static str,
    pub dir: &'static str,
    pub strings: &'static Translations,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

// -- Recipe ---------------------------------------------------------------

pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(req): Json<GenerationRequest>,
) -> Response {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        cuisine = %req.cuisine,
        diet = %req.diet,
        allergies = %req.allergies,
        course = %req.course,
        language = %req.language,
        "recipe requested"
    );

    match state.generator.generate_for(&req).await {
        Ok(Ok(recipe)) => Json(RecipeResponse {
            request_id,
            generated_at: Utc::now(),
            recipe,
        })
        .into_response(),
        Ok(Err(failure)) => {
            warn!(%request_id, cause = %failure.cause, "recipe request failed");
            error_response(StatusCode::BAD_GATEWAY, failure.to_string())
        }
        Err(RecipeError::Input(msg)) => error_response(StatusCode::BAD_REQUEST, msg),
        Err(e) => {
            warn!(%request_id, error = %e, "unexpected error before generation");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

// -- Options & translations ----------------------------------------------

pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        cuisines: options::CUISINE_OPTIONS,
        diets: options::DIET_OPTIONS,
        allergies: options::ALLERGY_OPTIONS,
        courses: options::COURSE_OPTIONS,
        languages: Language::ALL
            .iter()
            .map(|&lang| LanguageOption {
                code: lang.code(),
                name: lang.name(),
                native_name: lang.native_name(),
                dir: i18n::direction(lang),
            })
            .collect(),
    })
}

pub async fn get_translations(Path(lang): Path<String>) -> Json<TranslationsResponse> {
    let lang = Language::from_code(&lang);
    Json(TranslationsResponse {
        lang: lang.code(),
        dir: i18n::direction(lang),
        strings: i18n::translations(lang),
    })
}

// -- Health ----------------------------------------------------------------

pub async fn healthz(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "backend": state.generator.backend_name(),
        "model": state.config.llm.model,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::error::{GENERIC_FAILURE_MESSAGE, MISSING_INGREDIENTS_MESSAGE};
    use crate::generator::tests::{sample_recipe_json, MockBackend};
    use crate::generator::RecipeGenerator;
    use crate::web::routes;

    use super::*;

    fn app(mock: Arc<MockBackend>) -> axum::Router {
        routes::build(RecipeGenerator::new(mock), Config::default()).unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_recipe(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/recipe")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn successful_generation_returns_recipe() {
        let mock = MockBackend::ok(sample_recipe_json());
        let resp = app(mock.clone())
            .oneshot(post_recipe(serde_json::json!({
                "ingredients": "chicken, rice",
                "cuisine": "Any",
                "diet": "None",
                "allergies": "None",
                "course": "Any",
                "language": "en"
            })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["recipe"]["title"], "Chicken Fried Rice");
        assert_eq!(body["recipe"]["pantryStaples"][2], "soy sauce");
        assert!(body["request_id"].is_string());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn blank_ingredients_is_bad_request_without_backend_call() {
        let mock = MockBackend::ok(sample_recipe_json());
        let resp = app(mock.clone())
            .oneshot(post_recipe(serde_json::json!({ "ingredients": "   " })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], MISSING_INGREDIENTS_MESSAGE);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn invalid_model_output_is_bad_gateway_with_generic_message() {
        let mock = MockBackend::ok("not json at all");
        let resp = app(mock)
            .oneshot(post_recipe(serde_json::json!({ "ingredients": "rice" })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(resp).await;
        assert_eq!(body["error"], GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn transport_failure_does_not_leak_cause() {
        let mock = MockBackend::failing("dns lookup failed for secret-host");
        let resp = app(mock)
            .oneshot(post_recipe(serde_json::json!({ "ingredients": "rice" })))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(resp).await;
        assert!(!body["error"].as_str().unwrap().contains("secret-host"));
    }

    #[tokio::test]
    async fn options_start_with_sentinels() {
        let resp = app(MockBackend::ok("{}"))
            .oneshot(Request::builder().uri("/api/options").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["cuisines"][0], "Any");
        assert_eq!(body["diets"][0], "None");
        assert_eq!(body["languages"].as_array().unwrap().len(), 3);
        assert_eq!(body["languages"][1]["name"], "Hebrew");
        assert_eq!(body["languages"][1]["dir"], "rtl");
    }

    #[tokio::test]
    async fn translations_fall_back_to_english() {
        let resp = app(MockBackend::ok("{}"))
            .oneshot(Request::builder().uri("/api/i18n/fr").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = body_json(resp).await;
        assert_eq!(body["lang"], "en");
        assert_eq!(body["dir"], "ltr");
        assert_eq!(body["strings"]["generateButton"], "Generate Recipe");
    }

    #[tokio::test]
    async fn index_page_is_served() {
        let resp = app(MockBackend::ok("{}"))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn healthz_reports_backend() {
        let resp = app(MockBackend::ok("{}"))
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "mock");
        assert_eq!(body["model"], "gemini-2.5-flash");
    }
}
