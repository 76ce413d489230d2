//! Configuration management for the faqbot server.
//!
//! Configuration is layered from multiple sources, later sources winning:
//! - Built-in defaults
//! - Config file (faqbot.yaml)
//! - Environment variables (FAQBOT_*)
//! - Command-line flags

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default timeout for calls to the generation service, in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Main application configuration.
///
/// This struct holds all global options that affect server behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to
    pub bind: String,

    /// Path to the dataset JSON file, read once at startup
    pub dataset_file: PathBuf,

    /// Directory holding uploaded attachment files
    pub upload_dir: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// LLM provider used for fallback answers (e.g., "ollama")
    pub provider: String,

    /// Model identifier passed to the generation service
    pub model: String,

    /// Base URL of the generation service
    pub endpoint: String,

    /// Timeout for a single generation call, in seconds
    pub llm_timeout_secs: u64,

    /// Optional override for the fallback prompt template
    pub prompt_template: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    server: Option<ServerConfig>,
    llm: Option<LlmFileConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServerConfig {
    bind: Option<String>,
    #[serde(rename = "datasetFile")]
    dataset_file: Option<String>,
    #[serde(rename = "uploadDir")]
    upload_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LlmFileConfig {
    provider: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    #[serde(rename = "timeoutSecs")]
    timeout_secs: Option<u64>,
    #[serde(rename = "promptTemplate")]
    prompt_template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            dataset_file: PathBuf::from("dataset.json"),
            upload_dir: PathBuf::from("uploads"),
            config_file: None,
            provider: "ollama".to_string(), // Local-first default
            model: "llama3".to_string(),
            endpoint: "http://localhost:11434".to_string(),
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            prompt_template: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `FAQBOT_CONFIG`: Path to config file (default: ./faqbot.yaml)
    /// - `FAQBOT_BIND`: Bind address
    /// - `FAQBOT_DATASET`: Dataset file path
    /// - `FAQBOT_UPLOAD_DIR`: Upload directory
    /// - `FAQBOT_PROVIDER`: LLM provider
    /// - `FAQBOT_MODEL`: Model identifier
    /// - `FAQBOT_ENDPOINT`: Generation service base URL
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(config_file) = std::env::var("FAQBOT_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Load from YAML config file if it exists
        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            PathBuf::from("faqbot.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(bind) = std::env::var("FAQBOT_BIND") {
            config.bind = bind;
        }

        if let Ok(dataset) = std::env::var("FAQBOT_DATASET") {
            config.dataset_file = PathBuf::from(dataset);
        }

        if let Ok(upload_dir) = std::env::var("FAQBOT_UPLOAD_DIR") {
            config.upload_dir = PathBuf::from(upload_dir);
        }

        if let Ok(provider) = std::env::var("FAQBOT_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("FAQBOT_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("FAQBOT_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(server) = config_file.server {
            if let Some(bind) = server.bind {
                result.bind = bind;
            }
            if let Some(dataset) = server.dataset_file {
                result.dataset_file = PathBuf::from(dataset);
            }
            if let Some(upload_dir) = server.upload_dir {
                result.upload_dir = PathBuf::from(upload_dir);
            }
        }

        if let Some(llm) = config_file.llm {
            if let Some(provider) = llm.provider {
                result.provider = provider;
            }
            if let Some(model) = llm.model {
                result.model = model;
            }
            if let Some(endpoint) = llm.endpoint {
                result.endpoint = endpoint;
            }
            if let Some(timeout) = llm.timeout_secs {
                result.llm_timeout_secs = timeout;
            }
            if llm.prompt_template.is_some() {
                result.prompt_template = llm.prompt_template;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over environment variables and the
    /// config file.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        bind: Option<String>,
        config_file: Option<PathBuf>,
        dataset_file: Option<PathBuf>,
        upload_dir: Option<PathBuf>,
        provider: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(dataset_file) = dataset_file {
            self.dataset_file = dataset_file;
        }

        if let Some(upload_dir) = upload_dir {
            self.upload_dir = upload_dir;
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Ensure the upload directory exists.
    pub fn ensure_upload_dir(&self) -> AppResult<()> {
        if !self.upload_dir.exists() {
            std::fs::create_dir_all(&self.upload_dir).map_err(|e| {
                AppError::Config(format!(
                    "Failed to create upload directory {:?}: {}",
                    self.upload_dir, e
                ))
            })?;
        }
        Ok(())
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let known_providers = ["ollama"];

        if !known_providers.contains(&self.provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                known_providers.join(", ")
            )));
        }

        if self.llm_timeout_secs == 0 {
            return Err(AppError::Config(
                "LLM timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
