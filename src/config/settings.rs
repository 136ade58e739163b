//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// File these settings were read from, `None` when running on defaults
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (vertex, gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (gemini provider)
    #[serde(default)]
    pub api_key: String,

    /// OAuth access token (vertex provider)
    #[serde(default)]
    pub access_token: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint override (for proxies and local emulators)
    #[serde(default)]
    pub endpoint: String,

    /// Google Cloud project id (vertex provider)
    #[serde(default)]
    pub project_id: String,

    /// Google Cloud region (vertex provider)
    #[serde(default = "default_location")]
    pub location: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "vertex".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_location() -> String {
    "us-central1".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            access_token: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            project_id: String::new(),
            location: default_location(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        // Logging is not set up yet; callers report `config_file` afterwards.
        if !config_path.exists() {
            let mut settings = Self::default();
            settings.apply_env_overrides(|key| std::env::var(key).ok());
            return Ok(settings);
        }

        let mut settings = Self::from_file(&config_path)?;
        settings.config_file = Some(config_path);
        settings.apply_env_overrides(|key| std::env::var(key).ok());

        Ok(settings)
    }

    /// Parse settings from a TOML file without applying environment overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Fill empty credentials and deployment fields from the environment.
    ///
    /// Values already present in the config file win, except for location,
    /// which the environment may always override.
    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if self.llm.api_key.trim().is_empty() {
            if let Some(key) = non_empty("TRANSCRIPT_ANALYZER_GEMINI_API_KEY") {
                self.llm.api_key = key;
            }
        }

        if self.llm.access_token.trim().is_empty() {
            if let Some(token) = non_empty("TRANSCRIPT_ANALYZER_ACCESS_TOKEN") {
                self.llm.access_token = token;
            }
        }

        if self.llm.project_id.trim().is_empty() {
            if let Some(project) = non_empty("TRANSCRIPT_ANALYZER_PROJECT_ID")
                .or_else(|| non_empty("PROJECT_ID"))
            {
                self.llm.project_id = project;
            }
        }

        if let Some(location) = non_empty("TRANSCRIPT_ANALYZER_LOCATION") {
            self.llm.location = location;
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "transcript-analyzer", "transcript-analyzer")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
