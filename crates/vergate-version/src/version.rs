//! Dotted version numbers of arbitrary length.
//!
//! A [`Version`] is parsed from text such as `11.1.2.4` or `11_1_2_4.010`
//! and compared component by component. Components missing from the shorter
//! of two versions count as zero, so `11` and `11.0.0` compare equal.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing a version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// A segment was empty or not a non-negative base-10 integer.
    #[error("Could not parse version text {input:?}: segment {segment:?} is not a non-negative integer")]
    InvalidFormat {
        /// The full text that was being parsed.
        input: String,
        /// The offending segment.
        segment: String,
    },
}

impl VersionError {
    fn invalid(input: &str, segment: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            segment: segment.to_string(),
        }
    }
}

/// A version made of any number of non-negative integer components.
///
/// Equality and hashing look only at the numeric components, exactly as
/// stored: `11` and `11.0` are different values even though
/// [`Version::compare`] orders them as equal. For that reason `Version`
/// implements neither `PartialOrd` nor `Ord`; sort with
/// `sort_by(Version::compare)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    components: Vec<u32>,
    /// Segments as they appeared in the parsed text, leading zeros intact.
    text_components: Vec<String>,
}

impl Version {
    /// Parse a version from text.
    ///
    /// Both `.` and `_` act as delimiters and may be mixed. Every segment
    /// must be a non-empty run of ASCII digits that fits in a `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::InvalidFormat`] naming the input and the first
    /// bad segment. Empty input and empty segments are rejected.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let mut components = Vec::new();
        let mut text_components = Vec::new();

        for segment in text.split(|c: char| c == '.' || c == '_') {
            components.push(parse_segment(text, segment)?);
            text_components.push(segment.to_string());
        }

        Ok(Self {
            components,
            text_components,
        })
    }

    /// Build a version from explicit components.
    ///
    /// The text form is the decimal rendering of each component, so
    /// [`to_text_string`](Self::to_text_string) has no leading zeros to
    /// preserve.
    #[must_use]
    pub fn from_components(components: impl IntoIterator<Item = u32>) -> Self {
        let components: Vec<u32> = components.into_iter().collect();
        let text_components = components.iter().map(u32::to_string).collect();
        Self {
            components,
            text_components,
        }
    }

    /// Get the component at `index`, or `0` past the last defined one.
    #[must_use]
    pub fn component(&self, index: usize) -> u32 {
        self.components.get(index).copied().unwrap_or(0)
    }

    /// First component. `11` for `11.1.2.4`.
    #[must_use]
    pub fn major(&self) -> u32 {
        self.component(0)
    }

    /// Second component. `1` for `11.1.2.4`.
    #[must_use]
    pub fn minor(&self) -> u32 {
        self.component(1)
    }

    /// Third component. `2` for `11.1.2.4`.
    #[must_use]
    pub fn revision(&self) -> u32 {
        self.component(2)
    }

    /// Fourth component. `4` for `11.1.2.4`.
    #[must_use]
    pub fn build(&self) -> u32 {
        self.component(3)
    }

    /// All defined components.
    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// The original text segments.
    #[must_use]
    pub fn text_components(&self) -> &[String] {
        &self.text_components
    }

    /// Number of defined components.
    #[must_use]
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Compare against another version, padding the shorter with zeros.
    #[must_use]
    pub fn compare(&self, other: &Version) -> Ordering {
        self.compare_components(&other.components)
    }

    /// Check if this version is at or above `other`.
    #[must_use]
    pub fn is_greater_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// Check if this version is at or above the version spelled by
    /// `components`, without building a [`Version`] for the threshold.
    #[must_use]
    pub fn is_greater_or_equal_components(&self, components: &[u32]) -> bool {
        self.compare_components(components) != Ordering::Less
    }

    /// Render the original text segments joined with `.`.
    ///
    /// Unlike [`Display`](fmt::Display) this keeps leading zeros, so
    /// `11.1.2.4.010` stays `11.1.2.4.010` rather than becoming
    /// `11.1.2.4.10`. Underscore delimiters are normalized to `.`.
    #[must_use]
    pub fn to_text_string(&self) -> String {
        self.text_components.join(".")
    }

    fn compare_components(&self, other: &[u32]) -> Ordering {
        let len = self.components.len().max(other.len());
        (0..len)
            .map(|index| {
                let theirs = other.get(index).copied().unwrap_or(0);
                self.component(index).cmp(&theirs)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

fn parse_segment(input: &str, segment: &str) -> Result<u32, VersionError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::invalid(input, segment));
    }
    // Only overflow can fail here.
    segment
        .parse()
        .map_err(|_| VersionError::invalid(input, segment))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Version {}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, component) in self.components.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_text_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(v("1.2.3").to_string(), "1.2.3");
        assert_eq!(v("1.2").to_string(), "1.2");
        assert_eq!(v("1").to_string(), "1");
        assert_eq!(v("11.1.2.4").components(), &[11, 1, 2, 4]);
    }

    #[test]
    fn test_parse_mixed_delimiters() {
        let version = v("11_1.2_4");
        assert_eq!(version.components(), &[11, 1, 2, 4]);
        assert_eq!(version.to_string(), "11.1.2.4");
    }

    #[test]
    fn test_parse_rejects_non_numeric_segment() {
        let err = Version::parse("11.x.2").unwrap_err();
        assert_eq!(
            err,
            VersionError::InvalidFormat {
                input: "11.x.2".to_string(),
                segment: "x".to_string(),
            }
        );
        assert!(err.to_string().contains("11.x.2"));
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("11..2").is_err());
        assert!(Version::parse("11._2").is_err());
        assert!(Version::parse(".11").is_err());
        assert!(Version::parse("11.").is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_overflow() {
        assert!(Version::parse("11.-1").is_err());
        assert!(Version::parse("+11").is_err());
        assert!(Version::parse(" 11").is_err());
        assert!(Version::parse("4294967296").is_err());
        assert_eq!(v("4294967295").major(), u32::MAX);
    }

    #[test]
    fn test_text_string_keeps_leading_zeros() {
        let version = v("11.1.2.4.010");
        assert_eq!(version.to_text_string(), "11.1.2.4.010");
        assert_eq!(version.to_string(), "11.1.2.4.10");
        assert_eq!(v("11_1_2_4_048").to_text_string(), "11.1.2.4.048");
    }

    #[test]
    fn test_from_components() {
        let version = Version::from_components([11, 1, 2, 4, 10]);
        assert_eq!(version.to_string(), "11.1.2.4.10");
        assert_eq!(version.to_text_string(), "11.1.2.4.10");
        assert_eq!(Version::from_components([7]).to_string(), "7");
        assert_eq!(Version::from_components(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_component_padding() {
        let version = v("11.1");
        assert_eq!(version.major(), 11);
        assert_eq!(version.minor(), 1);
        assert_eq!(version.revision(), 0);
        assert_eq!(version.build(), 0);
        assert_eq!(version.component(42), 0);
        assert_eq!(version.num_components(), 2);
    }

    #[test]
    fn test_compare_pads_with_zeros() {
        assert_eq!(v("11").compare(&v("11.0.0")), Ordering::Equal);
        assert_eq!(v("11.0.0").compare(&v("11")), Ordering::Equal);
        assert_eq!(v("11.1.2.4").compare(&v("12")), Ordering::Less);
        assert_eq!(v("12").compare(&v("11.1.2.4")), Ordering::Greater);
        assert_eq!(v("11.1.2.4.010").compare(&v("11.1.2.4.048")), Ordering::Less);
        assert_eq!(v("11.1.2.0.1").compare(&v("11.1.2")), Ordering::Greater);
    }

    #[test]
    fn test_is_greater_or_equal() {
        let current = v("11.1.1");
        assert!(current.is_greater_or_equal(&v("11")));
        assert!(current.is_greater_or_equal(&v("11.1.1.0")));
        assert!(!current.is_greater_or_equal(&v("11.1.1.3")));
        assert!(!current.is_greater_or_equal(&v("12")));

        assert!(current.is_greater_or_equal_components(&[11, 1]));
        assert!(current.is_greater_or_equal_components(&[]));
        assert!(!current.is_greater_or_equal_components(&[11, 1, 2]));
    }

    #[test]
    fn test_equality_is_structural() {
        // Padded ordering says equal, value equality does not.
        assert_eq!(v("11").compare(&v("11.0")), Ordering::Equal);
        assert_ne!(v("11"), v("11.0"));

        // Text is not part of identity.
        assert_eq!(v("11.010"), v("11.10"));
        assert_eq!(v("11_1"), Version::from_components([11, 1]));

        let set: HashSet<Version> = [v("11"), v("11.0"), v("11.00")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_sort_by_compare() {
        let mut versions = vec![v("12"), v("9"), v("11.1.2"), v("11"), v("11.1.1.3")];
        versions.sort_by(Version::compare);
        let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["9", "11", "11.1.1.3", "11.1.2", "12"]);
    }

    #[test]
    fn test_from_str() {
        let version: Version = "11.1.2".parse().unwrap();
        assert_eq!(version, Version::from_components([11, 1, 2]));
        assert!("eleven".parse::<Version>().is_err());
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&v("11.1.2.4.010")).unwrap();
        assert_eq!(json, "\"11.1.2.4.010\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_text_string(), "11.1.2.4.010");

        assert!(serde_json::from_str::<Version>("\"11.x\"").is_err());
    }
}
