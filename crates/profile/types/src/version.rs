use crate::{TypesError, TypesResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAJOR_LIMIT: u32 = 1 << 7;
const MINOR_LIMIT: u32 = 1 << 10;
const PATCH_LIMIT: u32 = 1 << 12;

/// API version as a major/minor/patch triplet.
///
/// Ordering is lexicographic over (major, minor, patch), which matches the
/// ordering of the packed 32-bit encoding. Serialized as `"major.minor.patch"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    /// Create a version; components must fit the packed encoding.
    pub fn new(major: u32, minor: u32, patch: u32) -> TypesResult<Self> {
        if major >= MAJOR_LIMIT || minor >= MINOR_LIMIT || patch >= PATCH_LIMIT {
            return Err(TypesError::MalformedVersion(format!(
                "{}.{}.{}",
                major, minor, patch
            )));
        }
        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    /// Parse `"major.minor.patch"`. Exactly three decimal components.
    pub fn parse(input: &str) -> TypesResult<Self> {
        let malformed = || TypesError::MalformedVersion(input.to_string());

        let mut parts = input.trim().split('.');
        let mut next = || -> TypesResult<u32> {
            let part = parts.next().ok_or_else(malformed)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u32>().map_err(|_| malformed())
        };

        let (major, minor, patch) = (next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(malformed());
        }
        Self::new(major, minor, patch).map_err(|_| malformed())
    }

    /// The 32-bit `major << 22 | minor << 12 | patch` encoding.
    pub fn packed(&self) -> u32 {
        (self.major << 22) | (self.minor << 12) | self.patch
    }

    pub fn from_packed(packed: u32) -> Self {
        Self {
            major: (packed >> 22) & 0x7f,
            minor: (packed >> 12) & 0x3ff,
            patch: packed & 0xfff,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ApiVersion {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ApiVersion> for String {
    fn from(version: ApiVersion) -> Self {
        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triplet() {
        let v = ApiVersion::parse("1.2.224").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 224));
        assert_eq!(v.to_string(), "1.2.224");
    }

    #[test]
    fn rejects_malformed() {
        for input in ["1.2", "1.2.3.4", "", "a.b.c", "1..3", "1.2.-3", "1.2.+3", "200.0.0"] {
            assert!(
                matches!(ApiVersion::parse(input), Err(TypesError::MalformedVersion(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn packed_encoding() {
        let v = ApiVersion::parse("1.3.224").unwrap();
        assert_eq!(v.packed(), (1 << 22) | (3 << 12) | 224);
        assert_eq!(ApiVersion::from_packed(v.packed()), v);
    }

    #[test]
    fn ordering_follows_components() {
        let a = ApiVersion::parse("1.2.224").unwrap();
        let b = ApiVersion::parse("1.3.0").unwrap();
        assert!(a < b);
        assert!(a.packed() < b.packed());
    }

    #[test]
    fn serializes_as_dotted_string() {
        let v = ApiVersion::parse("1.3.224").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"1.3.224\"");
        let back: ApiVersion = serde_json::from_str("\"1.2.0\"").unwrap();
        assert_eq!(back, ApiVersion::new(1, 2, 0).unwrap());
        assert!(serde_json::from_str::<ApiVersion>("\"1.2\"").is_err());
    }
}
