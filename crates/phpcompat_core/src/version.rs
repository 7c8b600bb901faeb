//! PHP versions and the `testVersion` constraint.
//!
//! A [`TestVersion`] describes which PHP versions the analysed code is expected to run on. Sniffs use
//! [`TestVersion::supports_above`] to decide whether a restriction introduced in some PHP version applies.
//!
//! ## Examples
//! ```rust
//! use phpcompat_core::{PhpVersion, TestVersion};
//!
//! let tv: TestVersion = "5.6-7.1".parse().unwrap();
//! assert!(tv.supports_above(PhpVersion::new(7, 1)));
//! assert!(!tv.supports_above(PhpVersion::new(7, 2)));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A `major.minor` PHP version.
///
/// Ordering is numeric (`7.10 > 7.9`), not lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhpVersion {
    pub major: u16,
    pub minor: u16,
}

impl PhpVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Errors produced while parsing versions and `testVersion` strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("empty PHP version")]
    Empty,
    #[error("invalid PHP version '{0}': expected `major.minor`")]
    Malformed(String),
    #[error("invalid testVersion '{input}': lower bound {min} is above upper bound {max}")]
    InvertedRange {
        input: String,
        min: PhpVersion,
        max: PhpVersion,
    },
}

impl FromStr for PhpVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let malformed = || VersionError::Malformed(s.to_string());
        let mut parts = s.split('.');
        let major = parse_component(parts.next()).ok_or_else(malformed)?;
        let minor = match parts.next() {
            Some(part) => parse_component(Some(part)).ok_or_else(malformed)?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(PhpVersion::new(major, minor))
    }
}

fn parse_component(part: Option<&str>) -> Option<u16> {
    let part = part?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// The range of PHP versions the analysed code must support.
///
/// Either bound may be open. An entirely unset constraint ([`TestVersion::any`]) covers every version, which
/// matches how PHPCompatibility behaves when no `testVersion` is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestVersion {
    min: Option<PhpVersion>,
    max: Option<PhpVersion>,
}

impl TestVersion {
    /// A constraint that covers every PHP version.
    pub const fn any() -> Self {
        Self { min: None, max: None }
    }

    /// A constraint covering exactly one version.
    pub const fn exactly(version: PhpVersion) -> Self {
        Self {
            min: Some(version),
            max: Some(version),
        }
    }

    /// A constraint from `min` up to and including `max`. Either bound may be open.
    pub fn range(min: Option<PhpVersion>, max: Option<PhpVersion>) -> Result<Self, VersionError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(VersionError::InvertedRange {
                    input: format!("{lo}-{hi}"),
                    min: lo,
                    max: hi,
                });
            }
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Option<PhpVersion> {
        self.min
    }

    pub fn max(&self) -> Option<PhpVersion> {
        self.max
    }

    /// Return `true` when the constraint includes `version` or anything newer.
    pub fn supports_above(&self, version: PhpVersion) -> bool {
        match self.max {
            None => true,
            Some(max) => max >= version,
        }
    }
}

impl FromStr for TestVersion {
    type Err = VersionError;

    /// Parse `"7.2"`, `"7.0-"`, `"-7.4"` or `"5.6-7.4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(VersionError::Empty);
        }

        let Some((lo, hi)) = input.split_once('-') else {
            return Ok(TestVersion::exactly(input.parse()?));
        };

        let min = if lo.trim().is_empty() { None } else { Some(lo.parse()?) };
        let max = if hi.trim().is_empty() { None } else { Some(hi.parse()?) };
        if min.is_none() && max.is_none() {
            return Err(VersionError::Malformed(input.to_string()));
        }

        TestVersion::range(min, max).map_err(|err| match err {
            VersionError::InvertedRange { min, max, .. } => VersionError::InvertedRange {
                input: input.to_string(),
                min,
                max,
            },
            other => other,
        })
    }
}

impl fmt::Display for TestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (None, None) => write!(f, "any"),
            (Some(lo), Some(hi)) if lo == hi => write!(f, "{lo}"),
            (Some(lo), Some(hi)) => write!(f, "{lo}-{hi}"),
            (Some(lo), None) => write!(f, "{lo}-"),
            (None, Some(hi)) => write!(f, "-{hi}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_major_minor() {
        assert_eq!("7.4".parse::<PhpVersion>(), Ok(PhpVersion::new(7, 4)));
        assert_eq!("8".parse::<PhpVersion>(), Ok(PhpVersion::new(8, 0)));
    }

    #[test]
    fn rejects_malformed_versions() {
        assert_eq!("".parse::<PhpVersion>(), Err(VersionError::Empty));
        assert!(matches!("7.x".parse::<PhpVersion>(), Err(VersionError::Malformed(_))));
        assert!(matches!("7.1.2".parse::<PhpVersion>(), Err(VersionError::Malformed(_))));
        assert!(matches!("7.".parse::<PhpVersion>(), Err(VersionError::Malformed(_))));
        assert!(matches!("-1".parse::<PhpVersion>(), Err(VersionError::Malformed(_))));
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(PhpVersion::new(7, 10) > PhpVersion::new(7, 9));
        assert!(PhpVersion::new(8, 0) > PhpVersion::new(7, 4));
    }

    #[test]
    fn single_version_constraint() {
        let tv: TestVersion = "7.1".parse().unwrap();
        assert!(tv.supports_above(PhpVersion::new(7, 0)));
        assert!(tv.supports_above(PhpVersion::new(7, 1)));
        assert!(!tv.supports_above(PhpVersion::new(7, 2)));
    }

    #[test]
    fn open_ended_constraints() {
        let up: TestVersion = "7.0-".parse().unwrap();
        assert_eq!(up.min(), Some(PhpVersion::new(7, 0)));
        assert_eq!(up.max(), None);
        assert!(up.supports_above(PhpVersion::new(9, 9)));

        let down: TestVersion = "-5.6".parse().unwrap();
        assert_eq!(down.min(), None);
        assert!(!down.supports_above(PhpVersion::new(7, 0)));
    }

    #[test]
    fn range_constraint() {
        let tv: TestVersion = "5.6-7.1".parse().unwrap();
        assert!(tv.supports_above(PhpVersion::new(7, 1)));
        assert!(!tv.supports_above(PhpVersion::new(7, 2)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = "7.4-5.6".parse::<TestVersion>().unwrap_err();
        assert_eq!(
            err,
            VersionError::InvertedRange {
                input: "7.4-5.6".to_string(),
                min: PhpVersion::new(7, 4),
                max: PhpVersion::new(5, 6),
            }
        );
    }

    #[test]
    fn bare_dash_is_rejected() {
        assert!(matches!("-".parse::<TestVersion>(), Err(VersionError::Malformed(_))));
    }

    #[test]
    fn unset_constraint_covers_everything() {
        assert!(TestVersion::any().supports_above(PhpVersion::new(99, 0)));
        assert_eq!(TestVersion::default(), TestVersion::any());
    }

    #[test]
    fn display_round_trips_the_input_forms() {
        for input in ["7.2", "7.0-", "-7.4", "5.6-7.4"] {
            let tv: TestVersion = input.parse().unwrap();
            assert_eq!(tv.to_string(), input);
        }
        assert_eq!(TestVersion::any().to_string(), "any");
    }
}
