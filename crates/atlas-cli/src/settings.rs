//! Layered settings loading.
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Default config file (~/.config/chat-atlas/config.toml)
//! 3. CLI-specified config file
//! 4. Environment variables (ATLAS_*)
//! 5. CLI flags (applied by the caller)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use atlas_classify::ClassifierConfig;
use atlas_segmentation::SegmenterConfig;

/// Settings for the chat-atlas pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Topic segmentation knobs
    #[serde(default)]
    pub segmentation: SegmenterConfig,

    /// Broad-category rule tables
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            segmentation: SegmenterConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings with the layered precedence above.
    pub fn load(cli_config_path: Option<&str>) -> anyhow::Result<Self> {
        let config_dir = ProjectDirs::from("", "", "chat-atlas")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("ATLAS")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to assemble configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")
    }
}
