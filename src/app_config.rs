/*!
 * Application configuration for the translation core.
 *
 * Handles loading, validating and defaulting the JSON configuration:
 * the active engine name, per-engine connection settings, and the API
 * limits enforced by request validation. Cache and rate-limit knobs are
 * carried as configuration surface only; the core does not act on them.
 */

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::TranslationError;

/// Known translation engines
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Remote translation REST API
    Remote,
    /// Prompt-based LLM backend
    Llm,
    /// Local model stub
    #[default]
    Local,
}

impl Engine {
    /// Capitalized engine name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::Llm => "LLM",
            Self::Local => "Local",
        }
    }

    /// Lowercase engine identifier, the form used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Llm => "llm",
            Self::Local => "local",
        }
    }

    /// All known engines, in registry order
    pub fn all() -> [Engine; 3] {
        [Self::Remote, Self::Llm, Self::Local]
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Engine {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "llm" => Ok(Self::Llm),
            "local" => Ok(Self::Local),
            _ => Err(TranslationError::UnknownEngine(s.to_string())),
        }
    }
}

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Active engine name, matched case-insensitively at dispatch time
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Remote translation API settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// LLM backend settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Local model settings (config surface for the stub)
    #[serde(default)]
    pub local: LocalConfig,

    /// API-level limits enforced before dispatch
    #[serde(default)]
    pub api: ApiConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Remote translation API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemoteConfig {
    /// Service endpoint URL
    #[serde(default = "default_remote_endpoint")]
    pub endpoint: String,

    /// API key, may be empty for unauthenticated instances
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_remote_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// LLM backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    /// Service endpoint URL (OpenAI-compatible)
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// API key for authentication
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Model identifier
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Sampling temperature, low for faithful translation
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate per completion
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            api_key: String::new(),
            model: default_llm_model(),
            temperature: default_llm_temperature(),
            max_tokens: default_llm_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Local model configuration
///
/// The local provider is currently a stub; these settings describe the
/// model a real inference backend would load.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LocalConfig {
    /// Model identifier
    #[serde(default = "default_local_model")]
    pub model_name: String,

    /// Inference device ("cuda", "cpu")
    #[serde(default = "default_local_device")]
    pub device: String,

    /// Numeric precision for inference
    #[serde(default = "default_local_precision")]
    pub precision: String,

    /// Inference batch size
    #[serde(default = "default_local_batch_size")]
    pub batch_size: usize,

    /// Maximum sequence length
    #[serde(default = "default_local_max_length")]
    pub max_length: usize,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            model_name: default_local_model(),
            device: default_local_device(),
            precision: default_local_precision(),
            batch_size: default_local_batch_size(),
            max_length: default_local_max_length(),
        }
    }
}

/// API-level limits and peripheral knobs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    /// Maximum characters in a single text
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Maximum entries in a batch request
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Whether response caching is enabled (not acted on by the core)
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,

    /// Cache time-to-live in seconds (not acted on by the core)
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
            max_batch_size: default_max_batch_size(),
            cache_enabled: default_cache_enabled(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            remote: RemoteConfig::default(),
            llm: LlmConfig::default(),
            local: LocalConfig::default(),
            api: ApiConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        self.engine
            .parse::<Engine>()
            .map_err(|_| anyhow!("Unknown translation engine in config: {}", self.engine))?;

        Url::parse(&self.remote.endpoint)
            .map_err(|e| anyhow!("Invalid remote endpoint '{}': {}", self.remote.endpoint, e))?;
        Url::parse(&self.llm.endpoint)
            .map_err(|e| anyhow!("Invalid llm endpoint '{}': {}", self.llm.endpoint, e))?;

        if self.api.max_text_length == 0 {
            return Err(anyhow!("api.max_text_length must be greater than zero"));
        }
        if self.api.max_batch_size == 0 {
            return Err(anyhow!("api.max_batch_size must be greater than zero"));
        }
        Ok(())
    }
}

fn default_engine() -> String {
    "local".to_string()
}

fn default_remote_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_llm_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_llm_temperature() -> f32 {
    0.3
}

fn default_llm_max_tokens() -> u32 {
    2048
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_local_model() -> String {
    "facebook/nllb-200-distilled-600M".to_string()
}

fn default_local_device() -> String {
    "cuda".to_string()
}

fn default_local_precision() -> String {
    "float32".to_string()
}

fn default_local_batch_size() -> usize {
    8
}

fn default_local_max_length() -> usize {
    512
}

fn default_max_text_length() -> usize {
    5000
}

fn default_max_batch_size() -> usize {
    100
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_ttl_secs() -> u64 {
    3600
}
