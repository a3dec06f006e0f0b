//! Optional platform capabilities and the release each one first appeared in.
//!
//! The set of features is closed: adding one means adding a variant here, and
//! every lookup is an exhaustive `match`.

use crate::gate::{GateError, VersionGate};
use crate::releases;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use vergate_version::Version;

/// A capability of the platform API that only exists from some release on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Browser-based drill-through driven by URL definitions on the cube.
    UrlDrillThrough,
    /// Exporting a cube outline as XML.
    OutlineXmlExport,
}

/// A feature name did not match any known feature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown feature: {0}")]
pub struct UnknownFeature(pub String);

impl Feature {
    /// Every feature, oldest requirement first.
    pub const ALL: [Feature; 2] = [Feature::UrlDrillThrough, Feature::OutlineXmlExport];

    /// Stable kebab-case identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Feature::UrlDrillThrough => "url-drill-through",
            Feature::OutlineXmlExport => "outline-xml-export",
        }
    }

    /// Human-readable description, phrased to follow "does not support".
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Feature::UrlDrillThrough => "URL-based drill-through",
            Feature::OutlineXmlExport => "outline XML exports",
        }
    }

    /// The first release that provides this feature.
    #[must_use]
    pub fn required_version(self) -> &'static Version {
        match self {
            Feature::UrlDrillThrough => &*releases::V11_1_1_3,
            Feature::OutlineXmlExport => &*releases::V11_1_2,
        }
    }

    /// Check this feature against the process-wide current version.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Uninitialized`] if the current version was never
    /// set.
    pub fn is_available(self) -> Result<bool, GateError> {
        Ok(VersionGate::current()?.supports(self))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-").to_ascii_lowercase();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == wanted)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}
