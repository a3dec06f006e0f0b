//! Platform probes.
//!
//! A probe reports the version string of the platform API present at
//! runtime. How that string is found is up to the host: an environment
//! variable, a manifest file, a value reported by a native library. The core
//! only parses whatever the probe returns.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while probing for the platform version.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe's source holds no version.
    #[error("No platform version found in {origin}")]
    NotFound {
        /// Where the probe looked.
        origin: String,
    },

    /// The source exists but holds only whitespace.
    #[error("Platform version in {origin} is empty")]
    Empty {
        /// Where the probe looked.
        origin: String,
    },

    /// An environment variable holds non-Unicode data.
    #[error("Environment variable {var} is not valid Unicode")]
    NotUnicode {
        /// Variable name.
        var: String,
    },

    /// A version file exists but could not be read.
    #[error("Failed to read platform version file {}: {source}", .path.display())]
    Unreadable {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ProbeError {
    /// True if the source simply had nothing to offer.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProbeError::NotFound { .. })
    }
}

/// Reports the version of the platform API present at runtime.
pub trait PlatformProbe {
    /// Return the raw version text.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be determined. Callers treat
    /// this as fatal; a probe must never guess.
    fn probe(&self) -> Result<String, ProbeError>;

    /// Short description used in logs.
    fn describe(&self) -> String {
        "custom probe".to_string()
    }
}

impl<F> PlatformProbe for F
where
    F: Fn() -> Result<String, ProbeError>,
{
    fn probe(&self) -> Result<String, ProbeError> {
        self()
    }
}

/// A probe returning a fixed string.
#[derive(Debug, Clone)]
pub struct StaticProbe(String);

impl StaticProbe {
    /// Create a probe that always reports `version`.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl PlatformProbe for StaticProbe {
    fn probe(&self) -> Result<String, ProbeError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("static value {:?}", self.0)
    }
}

/// A probe reading an environment variable.
#[derive(Debug, Clone)]
pub struct EnvProbe {
    var: String,
}

impl EnvProbe {
    /// Create a probe reading `var`.
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl PlatformProbe for EnvProbe {
    fn probe(&self) -> Result<String, ProbeError> {
        let origin = self.describe();
        match std::env::var(&self.var) {
            Ok(value) => non_empty(value, origin),
            Err(std::env::VarError::NotPresent) => Err(ProbeError::NotFound { origin }),
            Err(std::env::VarError::NotUnicode(_)) => Err(ProbeError::NotUnicode {
                var: self.var.clone(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }
}

/// A probe reading the first line of a text file.
#[derive(Debug, Clone)]
pub struct FileProbe {
    path: PathBuf,
}

impl FileProbe {
    /// Create a probe reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlatformProbe for FileProbe {
    fn probe(&self) -> Result<String, ProbeError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ProbeError::NotFound {
                    origin: self.describe(),
                })
            }
            Err(source) => {
                return Err(ProbeError::Unreadable {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let first_line = contents.lines().next().unwrap_or_default().to_string();
        non_empty(first_line, self.describe())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Tries probes in order and returns the first answer.
///
/// A probe that reports [`ProbeError::NotFound`] passes to the next one; any
/// other error stops the chain.
#[derive(Default)]
pub struct ProbeChain {
    probes: Vec<Box<dyn PlatformProbe + Send + Sync>>,
}

impl ProbeChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a probe.
    #[must_use]
    pub fn with(mut self, probe: impl PlatformProbe + Send + Sync + 'static) -> Self {
        self.probes.push(Box::new(probe));
        self
    }

    /// Number of probes in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Check if the chain has no probes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl PlatformProbe for ProbeChain {
    fn probe(&self) -> Result<String, ProbeError> {
        for probe in &self.probes {
            match probe.probe() {
                Ok(version) => {
                    debug!(source = %probe.describe(), version = %version, "Probe: found platform version");
                    return Ok(version);
                }
                Err(e) if e.is_not_found() => {
                    trace!(source = %probe.describe(), "Probe: nothing found, trying next");
                }
                Err(e) => return Err(e),
            }
        }
        Err(ProbeError::NotFound {
            origin: self.describe(),
        })
    }

    fn describe(&self) -> String {
        if self.probes.is_empty() {
            return "an empty probe chain".to_string();
        }
        self.probes
            .iter()
            .map(|probe| probe.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn non_empty(value: String, origin: String) -> Result<String, ProbeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProbeError::Empty { origin });
    }
    Ok(trimmed.to_string())
}
