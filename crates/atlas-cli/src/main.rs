//! chat-atlas
//!
//! Turns a ChatGPT export into a navigable hierarchy JSON.
//!
//! # Usage
//!
//! ```bash
//! chat-atlas build chat.html -o chat_atlas.json --pretty
//! chat-atlas topics chat.html --title "Rust help"
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/chat-atlas/config.toml)
//! 3. Environment variables (ATLAS_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use atlas_cli::{handle_build, handle_topics, init_logging, Cli, Commands, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    init_logging(&settings.log_level)?;

    match cli.command {
        Commands::Build {
            input,
            output,
            pretty,
        } => handle_build(&settings, &input, &output, pretty)?,
        Commands::Topics { input, title } => handle_topics(&settings, &input, &title)?,
    }

    Ok(())
}
