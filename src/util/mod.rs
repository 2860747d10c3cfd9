//! Utility modules: input sanitization and token estimation.

pub mod text;
pub mod tokens;
