//! CLI configuration.
//!
//! Configuration can be loaded from:
//! - Environment variables (VERGATE_*)
//! - TOML configuration file
//! - Command line arguments

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vergate_core::{EnvProbe, FileProbe, ProbeChain, StaticProbe, Version};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where to find the platform version.
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Platform version sources, consulted in field order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Environment variable holding the version.
    #[serde(default = "default_version_env")]
    pub version_env: String,

    /// Literal version.
    #[serde(default)]
    pub version: Option<Version>,

    /// Text file whose first line is the version.
    #[serde(default)]
    pub version_file: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default value functions
fn default_version_env() -> String {
    "VERGATE_PLATFORM_VERSION".to_string()
}

fn default_log_filter() -> String {
    std::env::var("VERGATE_LOG").unwrap_or_else(|_| "vergate=info".to_string())
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            version_env: default_version_env(),
            version: None,
            version_file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from file or defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_paths = [
            "vergate.toml",
            "/etc/vergate/vergate.toml",
            "~/.config/vergate/vergate.toml",
        ];

        for path in &config_paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::from_file(expanded.as_ref());
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Build the platform probe.
    ///
    /// `override_version` (from the command line) takes precedence over every
    /// configured source.
    #[must_use]
    pub fn probe(&self, override_version: Option<&str>) -> ProbeChain {
        let mut chain = ProbeChain::new();
        if let Some(version) = override_version {
            chain = chain.with(StaticProbe::new(version));
        }
        chain = chain.with(EnvProbe::new(&self.platform.version_env));
        if let Some(version) = &self.platform.version {
            chain = chain.with(StaticProbe::new(version.to_text_string()));
        }
        if let Some(path) = &self.platform.version_file {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            chain = chain.with(FileProbe::new(expanded));
        }
        chain
    }
}
