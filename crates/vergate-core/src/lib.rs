//! # vergate-core
//!
//! Feature gating for client libraries that wrap a platform API whose surface
//! changes between releases.
//!
//! The host installs the platform version once at startup, usually from a
//! [`PlatformProbe`]. Every query afterwards compares that version against a
//! threshold: either a [`Feature`]'s required release or an explicit
//! [`Version`].
//!
//! ## Example
//!
//! ```rust
//! use vergate_core::{Feature, Version, VersionGate};
//!
//! let installed = Version::parse("11.1.1").unwrap();
//! let gate = VersionGate::new(&installed);
//!
//! assert!(!gate.supports(Feature::UrlDrillThrough));
//! assert!(gate.is_at_least(&Version::parse("11").unwrap()));
//!
//! let err = gate.require(Feature::OutlineXmlExport).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Version 11.1.1 does not support outline XML exports, this feature is available in 11.1.2"
//! );
//! ```

pub mod ambient;
pub mod feature;
pub mod gate;
pub mod probe;
pub mod releases;

pub use feature::{Feature, UnknownFeature};
pub use gate::{GateError, UnsupportedFeature, VersionGate};
pub use probe::{EnvProbe, FileProbe, PlatformProbe, ProbeChain, ProbeError, StaticProbe};
pub use vergate_version::{Version, VersionError};
