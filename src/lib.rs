//! Palaver — domain-tuned Gemini chat
//!
//! A single-user chat assistant around the hosted Gemini API: bounded
//! conversation memory, deterministic prompt assembly from YAML-configured
//! templates, heuristic token accounting, and a model client that absorbs
//! every upstream failure into fixed fallback replies so the conversation
//! never dies mid-session.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use palaver::prelude::*;
//!
//! # async fn example() -> palaver::error::Result<()> {
//! let settings = Arc::new(Settings::load("config/app_config.yaml")?);
//! let service = ChatService::new(Arc::clone(&settings));
//! let mut session = ChatSession::new();
//!
//! let turn = service
//!     .handle_turn(&mut session, "What skills do I need?", &GenerationOverrides::none())
//!     .await;
//! println!("{}", turn.reply.user_text());
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod types;
pub mod util;
