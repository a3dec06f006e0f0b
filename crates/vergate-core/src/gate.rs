//! Version queries against the current platform version.

use crate::ambient;
use crate::feature::Feature;
use crate::probe::ProbeError;
use metrics::counter;
use thiserror::Error;
use tracing::debug;
use vergate_version::{Version, VersionError};

/// Counter of `require` calls, labelled by feature and outcome.
pub const FEATURE_CHECKS_TOTAL: &str = "vergate_feature_checks_total";

/// A feature was requested on a platform version that predates it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Version {} does not support {}, this feature is available in {}",
    .current.to_text_string(),
    .feature.description(),
    .required
)]
pub struct UnsupportedFeature {
    /// The requested feature.
    pub feature: Feature,
    /// First release providing the feature.
    pub required: Version,
    /// The version the request was checked against.
    pub current: Version,
}

impl UnsupportedFeature {
    /// Human-readable description of the requested feature.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.feature.description()
    }
}

/// Gate errors.
#[derive(Debug, Error)]
pub enum GateError {
    /// No current version has been installed.
    #[error("Current platform version has not been initialized")]
    Uninitialized,

    /// A current version is already installed.
    #[error("Current platform version is already initialized to {current}")]
    AlreadyInitialized {
        /// The installed version.
        current: Version,
    },

    /// The platform probe failed.
    #[error("Platform probe failed: {0}")]
    Probe(#[from] ProbeError),

    /// The probe returned text that is not a version.
    #[error("Platform reported an invalid version: {0}")]
    InvalidVersion(#[from] VersionError),

    /// A feature check failed.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedFeature),
}

/// Answers feature and threshold queries for one platform version.
///
/// Use [`VersionGate::current`] for the process-wide version, or
/// [`VersionGate::new`] to check against an explicit one.
#[derive(Debug, Clone, Copy)]
pub struct VersionGate<'a> {
    current: &'a Version,
}

impl VersionGate<'static> {
    /// Create a gate over the process-wide current version.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Uninitialized`] if the current version was never
    /// set. This is a startup failure, not a feature being unsupported.
    pub fn current() -> Result<Self, GateError> {
        ambient::current().map(Self::new)
    }
}

impl<'a> VersionGate<'a> {
    /// Create a gate over an explicit version.
    #[must_use]
    pub fn new(current: &'a Version) -> Self {
        Self { current }
    }

    /// The version this gate checks against.
    #[must_use]
    pub fn version(&self) -> &'a Version {
        self.current
    }

    /// Check if `feature` is available.
    #[must_use]
    pub fn supports(&self, feature: Feature) -> bool {
        self.current.is_greater_or_equal(feature.required_version())
    }

    /// Fail with a displayable error if `feature` is not available.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFeature`] naming the feature, the release it
    /// needs and the current version.
    pub fn require(&self, feature: Feature) -> Result<(), UnsupportedFeature> {
        if self.supports(feature) {
            counter!(FEATURE_CHECKS_TOTAL, "feature" => feature.name(), "outcome" => "supported")
                .increment(1);
            return Ok(());
        }

        counter!(FEATURE_CHECKS_TOTAL, "feature" => feature.name(), "outcome" => "unsupported")
            .increment(1);
        debug!(
            feature = feature.name(),
            required = %feature.required_version(),
            current = %self.current,
            "Gate: rejected unsupported feature"
        );
        Err(UnsupportedFeature {
            feature,
            required: feature.required_version().clone(),
            current: self.current.clone(),
        })
    }

    /// Check if the current version is at or above `version`.
    #[must_use]
    pub fn is_at_least(&self, version: &Version) -> bool {
        self.current.is_greater_or_equal(version)
    }

    /// Check if the current version is below `version`.
    #[must_use]
    pub fn is_less_than(&self, version: &Version) -> bool {
        !self.is_at_least(version)
    }

    /// Pick `desired` if the current version is at least `version`, else
    /// `safe`.
    ///
    /// Useful for option values or flags that only newer releases accept.
    pub fn select<T>(&self, version: &Version, desired: T, safe: T) -> T {
        if self.is_at_least(version) {
            desired
        } else {
            safe
        }
    }
}
