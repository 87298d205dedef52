mod config;
mod error;
mod generator;
mod i18n;
mod llm;
mod recipe;
mod web;

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::generator::RecipeGenerator;

#[tokio::main]
async fn main() {
    // Load .env file (if present) before anything reads env vars
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    if args.iter().any(|a| a == "--default-config") {
        print!("{}", Config::default_config_contents());
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let config = match Config::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("failed to load config: {e}");
            std::process::exit(1);
        }
    };

    info!(
        bind = %config.bind,
        backend = %config.llm.backend,
        model = %config.llm.model,
        "pantry-chef starting"
    );

    let backend = match llm::from_config(&config) {
        Ok(b) => b,
        Err(e) => {
            error!("failed to initialize LLM backend: {e}");
            std::process::exit(1);
        }
    };

    if args.iter().any(|a| a == "--check") {
        run_checks(&config);
        return;
    }

    let generator = RecipeGenerator::new(backend);

    if let Err(e) = web::serve(config, generator).await {
        error!("server error: {e}");
        std::process::exit(1);
    }

    info!("pantry-chef stopped");
}

fn run_checks(config: &Config) {
    info!("running pre-flight checks...");
    info!("config: OK");
    info!("  bind: {}", config.bind);
    info!("  llm_backend: {}", config.llm.backend);
    info!("  model: {}", config.llm.model);
    info!("  base_url: {}", config.llm.base_url);

    if config.api_key().is_some() {
        info!("api key: OK");
    } else {
        warn!("api key: NOT SET (set GEMINI_API_KEY); recipe requests will fail");
    }
}

fn print_usage() {
    println!(
        "pantry-chef - turn the ingredients you have into a recipe

USAGE:
    pantry-chef [OPTIONS]

OPTIONS:
    --config <PATH>     Path to config file (default: ~/.config/pantry-chef/config.toml)
    --default-config    Print default config to stdout and exit
    --check             Validate config and credentials, then exit
    -h, --help          Print this help message

ENVIRONMENT:
    GEMINI_API_KEY      Google AI Studio API key (API_KEY is also accepted)
    GEMINI_MODEL        Model name (default: gemini-2.5-flash)
    GEMINI_BASE_URL     Generative Language API base URL
    LLM_BACKEND         Backend key (default: gemini)
    PANTRY_CHEF_BIND    Listen address (default: 127.0.0.1:3050)
    RUST_LOG            Log filter (default: info)"
    );
}
