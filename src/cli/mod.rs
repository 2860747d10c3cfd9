//! Interactive terminal front end.

use std::io::{BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::chat::ChatService;
use crate::config::{Settings, DEFAULT_CONFIG_PATH};
use crate::error::Result;
use crate::session::ChatSession;
use crate::types::GenerationOverrides;

/// Palaver terminal chat
#[derive(Parser, Debug)]
#[command(name = "palaver", version, about = "Domain-tuned Gemini chat assistant")]
pub struct Cli {
    /// Path to the YAML settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Sampling temperature for this session (overrides the configured default)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Reply length ceiling in tokens for this session
    #[arg(long)]
    pub max_output_tokens: Option<u32>,

    /// Number of turns to retain in memory
    #[arg(long)]
    pub max_history: Option<usize>,
}

impl Cli {
    /// Session-wide generation overrides assembled from the flags.
    pub fn overrides(&self) -> GenerationOverrides {
        GenerationOverrides {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

/// Run the interactive loop until `/quit` or EOF.
pub async fn run(cli: Cli) -> Result<()> {
    let settings = Arc::new(Settings::load(&cli.config)?);
    let overrides = cli.overrides();
    let service = ChatService::new(Arc::clone(&settings));

    let mut session = match cli.max_history {
        Some(n) => ChatSession::with_max_history(n),
        None => ChatSession::new(),
    };
    let mut session_tokens: u64 = 0;

    println!(
        "{} - {} ({})",
        settings.app.app_name, settings.app.domain_name, settings.model.model_name
    );
    println!("Commands: /clear  /tokens  /quit");
    info!(
        session = %session.id(),
        model = %settings.model.model_name,
        "session started"
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" => break,
            "/clear" => {
                session.reset();
                session_tokens = 0;
                println!("Conversation cleared.");
                continue;
            }
            "/tokens" => {
                println!("~{session_tokens} tokens used this session");
                continue;
            }
            _ => {}
        }

        let result = service.handle_turn(&mut session, input, &overrides).await;
        session_tokens += u64::from(result.usage.total());

        println!("{}", result.reply.user_text());
        println!(
            "  ~{} tokens (session total {})",
            result.usage.total(),
            session_tokens
        );
    }

    info!(
        session = %session.id(),
        total_tokens = session_tokens,
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_defaults() {
        let cli = Cli::try_parse_from(["palaver"]).unwrap();
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
        assert!(cli.temperature.is_none());
        assert!(cli.max_output_tokens.is_none());
        assert!(cli.max_history.is_none());

        let overrides = cli.overrides();
        assert_eq!(overrides, GenerationOverrides::none());
    }

    #[test]
    fn parse_with_all_options() {
        let cli = Cli::try_parse_from([
            "palaver",
            "-c",
            "custom.yaml",
            "-t",
            "0.2",
            "--max-output-tokens",
            "512",
            "--max-history",
            "6",
        ])
        .unwrap();
        assert_eq!(cli.config, "custom.yaml");
        assert!((cli.temperature.unwrap() - 0.2).abs() < f64::EPSILON);
        assert_eq!(cli.max_output_tokens, Some(512));
        assert_eq!(cli.max_history, Some(6));

        let overrides = cli.overrides();
        assert_eq!(overrides.temperature, Some(0.2));
        assert_eq!(overrides.max_output_tokens, Some(512));
    }

    #[test]
    fn parse_rejects_non_numeric_temperature() {
        assert!(Cli::try_parse_from(["palaver", "-t", "warm"]).is_err());
    }
}
