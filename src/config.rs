use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{RecipeError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the web UI and API listen on.
    /// Can be overridden with the `PANTRY_CHEF_BIND` env var.
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub web: WebConfig,
}

// -- LLM -----------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Backend to use. Only "gemini" is built in.
    /// Can be overridden with the `LLM_BACKEND` env var.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Model name passed to the generateContent endpoint.
    /// Can be overridden with the `GEMINI_MODEL` env var.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API.
    /// Can be overridden with the `GEMINI_BASE_URL` env var.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key. Prefer the `GEMINI_API_KEY` (or `API_KEY`) env var; this
    /// field is only consulted when neither is set.
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds (0 = wait for the provider indefinitely).
    #[serde(default)]
    pub timeout_secs: u64,

    /// Sampling temperature. Left to the provider default when unset.
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            model: default_model(),
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: 0,
            temperature: None,
        }
    }
}

// -- Web -----------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebConfig {
    /// Extra origins allowed to call the API cross-origin. The bundled UI is
    /// same-origin and needs none.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// -- Defaults ------------------------------------------------------------

fn default_bind() -> String {
    "127.0.0.1:3050".to_string()
}
fn default_backend() -> String {
    "gemini".to_string()
}
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            llm: LlmConfig::default(),
            web: WebConfig::default(),
        }
    }
}

// -- Config impl ---------------------------------------------------------

impl Config {
    /// Load config from the given path, or the default XDG config location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path(),
        };

        let mut config = if config_path.exists() {
            info!("loading config from {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)
                .map_err(|e| RecipeError::Config(format!("parse error: {e}")))?
        } else {
            info!("no config file found, using defaults");
            Config::default()
        };

        if let Ok(bind) = std::env::var("PANTRY_CHEF_BIND") {
            if !bind.is_empty() {
                config.bind = bind;
            }
        }

        Ok(config)
    }

    /// Returns the default config file path: `$XDG_CONFIG_HOME/pantry-chef/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("pantry-chef")
            .join("config.toml")
    }

    /// Resolve the provider API key: `GEMINI_API_KEY`, then `API_KEY`, then
    /// the config file. `None` when no non-empty value is found.
    pub fn api_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("API_KEY").ok().filter(|k| !k.is_empty()))
            .or_else(|| {
                if self.llm.api_key.is_empty() {
                    None
                } else {
                    Some(self.llm.api_key.clone())
                }
            })
    }

    /// Generate the default config file contents.
    pub fn default_config_contents() -> &'static str {
        include_str!("../config.example.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let c = Config::default();
        assert_eq!(c.bind, "127.0.0.1:3050");
        assert!(c.web.allowed_origins.is_empty());
    }

    #[test]
    fn default_llm_config() {
        let llm = LlmConfig::default();
        assert_eq!(llm.backend, "gemini");
        assert_eq!(llm.model, "gemini-2.5-flash");
        assert!(llm.base_url.starts_with("https://generativelanguage.googleapis.com"));
        assert!(llm.api_key.is_empty());
        assert_eq!(llm.timeout_secs, 0);
        assert!(llm.temperature.is_none());
    }

    #[test]
    fn parse_minimal_toml() {
        let c: Config = toml::from_str(r#"bind = "0.0.0.0:8080""#).unwrap();
        assert_eq!(c.bind, "0.0.0.0:8080");
        assert_eq!(c.llm.backend, "gemini");
    }

    #[test]
    fn parse_llm_section() {
        let toml_str = r#"
        [llm]
        model = "gemini-2.0-flash"
        timeout_secs = 45
        temperature = 0.4
        "#;
        let c: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(c.llm.model, "gemini-2.0-flash");
        assert_eq!(c.llm.timeout_secs, 45);
        assert!((c.llm.temperature.unwrap() - 0.4).abs() < 0.001);
    }

    #[test]
    fn parse_web_section() {
        let toml_str = r#"
        [web]
        allowed_origins = ["http://localhost:5173"]
        "#;
        let c: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(c.web.allowed_origins, vec!["http://localhost:5173"]);
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = Config::load(Some(&dir.path().join("missing.toml"))).unwrap();
        assert_eq!(c.llm.model, "gemini-2.5-flash");
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid %%% toml").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(RecipeError::Config(_))));
    }

    #[test]
    fn load_reads_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[llm]\nmodel = \"custom-model\"\n").unwrap();
        let c = Config::load(Some(&path)).unwrap();
        assert_eq!(c.llm.model, "custom-model");
    }

    #[test]
    fn default_config_path_has_app_name() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("pantry-chef"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn default_config_contents_parses() {
        let contents = Config::default_config_contents();
        let c: Config = toml::from_str(contents).unwrap();
        assert_eq!(c.llm.backend, "gemini");
    }
}
