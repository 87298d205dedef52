use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;
use crate::error::{RecipeError, Result};
use crate::generator::RecipeGenerator;

use super::handlers;

/// State shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub generator: RecipeGenerator,
    pub config: Config,
}

pub fn build(generator: RecipeGenerator, config: Config) -> Result<Router> {
    let cors = cors_layer(&config.web.allowed_origins)?;

    let state = AppState { generator, config };

    let router = Router::new()
        // UI
        .route("/", get(serve_index))
        .route("/style.css", get(serve_css))
        .route("/app.js", get(serve_js))
        // API
        .route("/api/recipe", post(handlers::generate_recipe))
        .route("/api/options", get(handlers::get_options))
        .route("/api/i18n/{lang}", get(handlers::get_translations))
        .route("/healthz", get(handlers::healthz))
        .with_state(state);

    Ok(match cors {
        Some(layer) => router.layer(layer),
        None => router,
    })
}

fn cors_layer(origins: &[String]) -> Result<Option<CorsLayer>> {
    if origins.is_empty() {
        return Ok(None);
    }

    let parsed = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|e| RecipeError::Config(format!("invalid allowed origin {o:?}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(origins = ?origins, "CORS enabled for API");

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    ))
}

async fn serve_index() -> axum::response::Html<&'static str> {
    axum::response::Html(include_str!("ui/index.html"))
}

async fn serve_css() -> ([(header::HeaderName, HeaderValue); 1], &'static str) {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/css"))],
        include_str!("ui/style.css"),
    )
}

async fn serve_js() -> ([(header::HeaderName, HeaderValue); 1], &'static str) {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/javascript"))],
        include_str!("ui/app.js"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_origins_means_no_cors_layer() {
        assert!(cors_layer(&[]).unwrap().is_none());
    }

    #[test]
    fn valid_origins_build_a_layer() {
        let layer = cors_layer(&["http://localhost:5173".to_string()]).unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn invalid_origin_is_a_config_error() {
        let err = cors_layer(&["bad\norigin".to_string()]).unwrap_err();
        assert!(matches!(err, RecipeError::Config(_)));
    }
}
