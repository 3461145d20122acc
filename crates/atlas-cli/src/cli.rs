//! CLI argument parsing for chat-atlas.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// chat-atlas
///
/// Turns a ChatGPT export into a navigable hierarchy: broad category ->
/// conversation -> topic -> Q/A pair.
#[derive(Parser, Debug)]
#[command(name = "chat-atlas")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/chat-atlas/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// chat-atlas commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the categorized archive from an export
    Build {
        /// Export file (chat.html or the bare conversations JSON)
        input: PathBuf,

        /// Output archive path
        #[arg(short, long, default_value = "chat_atlas.json")]
        output: PathBuf,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Segment a single conversation and print its topics
    Topics {
        /// Export file (chat.html or the bare conversations JSON)
        input: PathBuf,

        /// Title of the conversation to segment
        #[arg(short, long)]
        title: String,
    },
}
