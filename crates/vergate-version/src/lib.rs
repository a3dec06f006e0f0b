//! # vergate-version
//!
//! Variable-length dotted version numbers for gating features on the
//! version of an external platform API.
//!
//! ## Ordering vs equality
//!
//! Ordering pads the shorter version with zeros, so `11` and `11.0.0`
//! compare equal. Equality is structural and does not pad, so the same two
//! values are not `==`.
//!
//! ## Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use vergate_version::Version;
//!
//! let installed = Version::parse("11.1.2.4.010").unwrap();
//! let threshold = Version::parse("11.1.2").unwrap();
//!
//! assert!(installed.is_greater_or_equal(&threshold));
//! assert_eq!(installed.to_string(), "11.1.2.4.10");
//! assert_eq!(installed.to_text_string(), "11.1.2.4.010");
//! assert_eq!(
//!     Version::parse("11").unwrap().compare(&Version::parse("11.0.0").unwrap()),
//!     Ordering::Equal
//! );
//! ```

pub mod version;

pub use version::{Version, VersionError};
