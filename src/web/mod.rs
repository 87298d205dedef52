pub mod handlers;
pub mod routes;

use tracing::info;

use crate::config::Config;
use crate::error::{RecipeError, Result};
use crate::generator::RecipeGenerator;

pub async fn serve(config: Config, generator: RecipeGenerator) -> Result<()> {
    let bind = config.bind.clone();
    let app = routes::build(generator, config)?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|e| RecipeError::Config(format!("failed to bind {bind}: {e}")))?;

    info!(bind = %bind, "web UI listening (HTTP)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
        .map_err(|e| RecipeError::Config(format!("web server error: {e}")))?;

    Ok(())
}
