//! Token usage estimates for a single turn.

use serde::{Deserialize, Serialize};

/// Heuristic token estimate for one handled turn. These are display figures
/// derived from character counts, not provider-reported usage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TurnUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl TurnUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Combined estimate for the turn.
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}
