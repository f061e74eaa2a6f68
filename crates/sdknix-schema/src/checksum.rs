//! Checksum algorithm normalization.

/// Error produced when a checksum's algorithm tag is unrecognized.
///
/// Fatal by policy: emitting an unverifiable integrity record would be worse
/// than emitting nothing.
#[derive(thiserror::Error, Debug)]
#[error("unknown checksum algorithm: {0:?}")]
pub struct UnknownAlgorithm(pub String);

/// A recognized checksum algorithm, normalized from the repository's raw tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    /// SHA-1 (repository tags `sha1` / `sha-1`).
    Sha1,
    /// SHA-256 (repository tags `sha256` / `sha-256`).
    Sha256,
    /// SHA-512 (repository tags `sha512` / `sha-512`).
    Sha512,
}

impl ChecksumAlgorithm {
    /// Normalized key used in the rendered `{algorithm} = "{value}"` pair.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl std::str::FromStr for ChecksumAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_and_plain_tags_normalize() {
        for (raw, want) in [
            ("sha1", ChecksumAlgorithm::Sha1),
            ("sha-1", ChecksumAlgorithm::Sha1),
            ("sha256", ChecksumAlgorithm::Sha256),
            ("sha-256", ChecksumAlgorithm::Sha256),
            ("sha512", ChecksumAlgorithm::Sha512),
            ("sha-512", ChecksumAlgorithm::Sha512),
        ] {
            assert_eq!(raw.parse::<ChecksumAlgorithm>().expect(raw), want);
        }
    }

    #[test]
    fn unknown_algorithm_is_fatal() {
        let err = "md5".parse::<ChecksumAlgorithm>().unwrap_err();
        assert_eq!(err.0, "md5");
    }
}
