//! Well-known releases of the wrapped platform API.

use std::sync::LazyLock;
use vergate_version::Version;

/// Release 9.
pub static V9: LazyLock<Version> = LazyLock::new(|| Version::from_components([9]));

/// Release 11.
pub static V11: LazyLock<Version> = LazyLock::new(|| Version::from_components([11]));

/// Release 11.1.1.3.
///
/// First release exposing URL-based drill-through definitions on a cube.
pub static V11_1_1_3: LazyLock<Version> =
    LazyLock::new(|| Version::from_components([11, 1, 1, 3]));

/// Release 11.1.2, equivalent to 11.1.2.0.
///
/// Outline XML export first shipped here.
pub static V11_1_2: LazyLock<Version> = LazyLock::new(|| Version::from_components([11, 1, 2]));

/// Release 12.
pub static V12: LazyLock<Version> = LazyLock::new(|| Version::from_components([12]));

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_releases_are_ordered() {
        let releases = [&*V9, &*V11, &*V11_1_1_3, &*V11_1_2, &*V12];
        for pair in releases.windows(2) {
            assert_eq!(pair[0].compare(pair[1]), Ordering::Less, "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_release_rendering() {
        assert_eq!(V11_1_1_3.to_string(), "11.1.1.3");
        assert_eq!(V11_1_2.to_text_string(), "11.1.2");
    }
}
