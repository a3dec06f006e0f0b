//! The process-wide current platform version.
//!
//! Installed once at startup, before any feature query, and read-only after
//! that. There is no fallback: a process that cannot establish its platform
//! version must not start.

use crate::gate::GateError;
use crate::probe::PlatformProbe;
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use vergate_version::Version;

static CURRENT: OnceLock<Version> = OnceLock::new();

/// Install the current platform version.
///
/// # Errors
///
/// Returns [`GateError::AlreadyInitialized`] if a version is already
/// installed. The installed version is left unchanged.
pub fn init(version: Version) -> Result<&'static Version, GateError> {
    let mut installed = false;
    let current = CURRENT.get_or_init(|| {
        installed = true;
        version
    });

    if installed {
        info!(version = %current.to_text_string(), "Platform version initialized");
        Ok(current)
    } else {
        warn!(current = %current, "Platform version already initialized");
        Err(GateError::AlreadyInitialized {
            current: current.clone(),
        })
    }
}

/// Probe for the platform version and install it.
///
/// # Errors
///
/// Returns [`GateError::Probe`] if the probe fails,
/// [`GateError::InvalidVersion`] if its answer does not parse, or
/// [`GateError::AlreadyInitialized`].
pub fn init_from_probe<P>(probe: &P) -> Result<&'static Version, GateError>
where
    P: PlatformProbe + ?Sized,
{
    debug!(source = %probe.describe(), "Probing platform version");
    let text = probe.probe()?;
    let version = Version::parse(&text)?;
    init(version)
}

/// Get the installed version.
///
/// # Errors
///
/// Returns [`GateError::Uninitialized`] if nothing was installed.
pub fn current() -> Result<&'static Version, GateError> {
    CURRENT.get().ok_or(GateError::Uninitialized)
}

/// Check if a version has been installed.
#[must_use]
pub fn is_initialized() -> bool {
    CURRENT.get().is_some()
}
