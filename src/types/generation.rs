//! Generation parameters: configured defaults and per-request overrides.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::config::ModelSettings;

/// Fully-resolved parameters for one generation call. Every field is sent on
/// the wire; resolution against overrides happens before this exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

impl GenerationConfig {
    /// Resolve against configured defaults. Explicit overrides win for
    /// temperature and max_output_tokens; top_p and top_k always come from
    /// configuration.
    pub fn resolve(defaults: &ModelSettings, overrides: &GenerationOverrides) -> Self {
        Self {
            temperature: overrides.temperature.unwrap_or(defaults.temperature),
            max_output_tokens: overrides
                .max_output_tokens
                .unwrap_or(defaults.max_output_tokens),
            top_p: defaults.top_p,
            top_k: defaults.top_k,
        }
    }
}

/// Optional per-request parameter overrides supplied by the presentation
/// layer. Absent fields fall back to the configured defaults.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerationOverrides {
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationOverrides {
    /// No overrides: every parameter comes from configuration.
    pub fn none() -> Self {
        Self::default()
    }
}
