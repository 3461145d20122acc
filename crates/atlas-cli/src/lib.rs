//! # atlas-cli
//!
//! The chat-atlas binary: argument parsing, settings layering, and the
//! build/topics command handlers.

pub mod cli;
pub mod commands;
pub mod settings;

pub use cli::{Cli, Commands};
pub use commands::{build_archive, handle_build, handle_topics, init_logging};
pub use settings::Settings;
