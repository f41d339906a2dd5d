//! Configuration management for Launchpad.
//!
//! Parses `launchpad.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `genai.model`
//! - `genai.base_url`
//! - `github.api_url`
//! - `github.raw_url`
//!
//! `genai.api_key` is expanded leniently: an unset variable without a
//! default leaves the key empty, and [`Config::require_api_key`] reports it
//! when a command actually needs the generator.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override generator API key.
    pub api_key: Option<String>,
    /// Override generator model.
    pub model: Option<String>,
    /// Override export output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "launchpad.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Live preview server configuration.
    pub server: ServerConfig,
    /// Content generator configuration.
    pub genai: GenAiConfig,
    /// Repository context configuration.
    pub github: GitHubConfig,
    /// Export configuration (paths are relative strings from TOML).
    export: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Generative language model configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GenAiConfig {
    /// API key sent as `x-goog-api-key`.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// REST API base URL, without trailing slash.
    pub base_url: String,
    /// Transport timeout for a single call.
    pub timeout_secs: u64,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: "${GEMINI_API_KEY}".to_owned(),
            model: "gemini-2.5-flash".to_owned(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            timeout_secs: 60,
        }
    }
}

/// GitHub endpoints used to gather repository context.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL.
    pub api_url: String,
    /// Raw content base URL.
    pub raw_url: String,
    /// Branches tried in order when fetching the README.
    pub branches: Vec<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_owned(),
            raw_url: "https://raw.githubusercontent.com".to_owned(),
            branches: vec!["main".to_owned(), "master".to_owned()],
        }
    }
}

/// Raw export configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    output_dir: Option<String>,
}

/// Resolved export configuration.
#[derive(Debug, Default)]
pub struct ExportConfig {
    /// Directory that receives `index.html`.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`github.api_url`").
        field: String,
        /// Error message (e.g., "${`GITHUB_API`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `launchpad.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(api_key) = &settings.api_key {
            self.genai.api_key.clone_from(api_key);
        }
        if let Some(model) = &settings.model {
            self.genai.model.clone_from(model);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.export_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Get the generator API key.
    ///
    /// Only commands that call the content generator need a key, so its
    /// absence is not a load-time error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the key is missing or blank.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        let key = self.genai.api_key.trim();
        if key.is_empty() || key.starts_with("${") {
            return Err(ConfigError::Validation(
                "genai.api_key is not set (export GEMINI_API_KEY or pass --api-key)".to_owned(),
            ));
        }
        Ok(key)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(current)
    }

    fn discover_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        let mut config = Self::default_with_base(&cwd);
        config.genai.api_key = expand::expand_env_lenient(&config.genai.api_key);
        config
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            genai: GenAiConfig::default(),
            github: GitHubConfig::default(),
            export: ExportConfigRaw::default(),
            export_resolved: ExportConfig {
                output_dir: base.to_path_buf(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_genai()?;
        self.validate_github()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_genai(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.genai.model, "genai.model")?;
        require_http_url(&self.genai.base_url, "genai.base_url")?;
        if self.genai.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "genai.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_github(&self) -> Result<(), ConfigError> {
        require_http_url(&self.github.api_url, "github.api_url")?;
        require_http_url(&self.github.raw_url, "github.raw_url")?;
        if self.github.branches.iter().all(|b| b.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "github.branches must name at least one branch".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        self.genai.api_key = expand::expand_env_lenient(&self.genai.api_key);
        self.genai.model = expand::expand_env(&self.genai.model, "genai.model")?;
        self.genai.base_url = expand::expand_env(&self.genai.base_url, "genai.base_url")?;

        self.github.api_url = expand::expand_env(&self.github.api_url, "github.api_url")?;
        self.github.raw_url = expand::expand_env(&self.github.raw_url, "github.raw_url")?;

        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.export_resolved = ExportConfig {
            output_dir: config_dir.join(self.export.output_dir.as_deref().unwrap_or(".")),
        };
    }
}
