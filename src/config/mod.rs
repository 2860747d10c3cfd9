//! Application configuration: YAML settings file plus environment credential.
//!
//! Settings are loaded once at startup and treated as read-only for the rest
//! of the process lifetime, so they are safe to share without locking. A
//! missing API credential is a fatal startup condition.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::{PalaverError, Result};

/// Default location of the YAML settings file.
pub const DEFAULT_CONFIG_PATH: &str = "config/app_config.yaml";

/// Prompt template fields, assembled into the system prompt in fixed order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PromptSettings {
    pub system_role: String,
    pub domain_description: String,
    pub response_style: String,
    pub safety_instructions: String,
    pub output_format: String,
}

/// Model parameters sent with every generation call.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelSettings {
    pub model_name: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

/// Application metadata.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppSettings {
    pub app_name: String,
    pub domain_name: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub enable_telemetry: bool,
    #[serde(default)]
    pub environment: Environment,
}

/// Deployment environment tag.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Raw shape of `app_config.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub prompts: PromptSettings,
    pub model: ModelSettings,
    pub app: AppSettings,
}

impl ConfigFile {
    /// Read and parse a YAML settings file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// Parse YAML settings from a string.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Immutable settings bundle: parsed configuration plus the resolved API
/// credential.
#[derive(Debug, Clone)]
pub struct Settings {
    pub prompts: PromptSettings,
    pub model: ModelSettings,
    pub app: AppSettings,
    pub api_key: String,
}

impl Settings {
    /// Load settings from a YAML file and the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let file = ConfigFile::from_path(path)?;
        Self::from_parts(file, api_key_from_env())
    }

    /// Assemble settings from a parsed file and an optional credential.
    ///
    /// Refuses an absent or blank credential so the process never starts
    /// without one.
    pub fn from_parts(file: ConfigFile, api_key: Option<String>) -> Result<Self> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(PalaverError::MissingApiKey),
        };
        Ok(Self {
            prompts: file.prompts,
            model: file.model,
            app: file.app,
            api_key,
        })
    }
}

/// Resolve the Gemini credential from the environment. Both the
/// `GEMINI_API_KEY` and `GOOGLE_API_KEY` spellings are accepted.
pub fn api_key_from_env() -> Option<String> {
    std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("GOOGLE_API_KEY"))
        .ok()
}
