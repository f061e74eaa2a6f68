//! Platform classification for archives.
//!
//! Maps the repository's raw host OS/arch tags onto the closed set of
//! platform tags used as `sources` keys in the generated document. Unknown
//! tags are a fatal configuration error: an unrecognized platform must never
//! silently produce a wrong or missing build target.

use serde::Serialize;

/// Errors produced while classifying an archive's host platform.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    /// The host OS tag is not one of the recognized values.
    #[error("unknown host OS: {0:?}")]
    UnknownOs(String),

    /// The host architecture tag is not one of the recognized values.
    #[error("unknown host architecture: {0:?}")]
    UnknownArch(String),
}

/// Host operating system an archive targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    /// Linux hosts.
    Linux,
    /// macOS hosts (repository tag `macosx`).
    MacOsX,
    /// Windows hosts.
    Windows,
}

impl HostOs {
    /// Canonical OS component of the platform tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOsX => "darwin",
            Self::Windows => "windows",
        }
    }
}

impl std::str::FromStr for HostOs {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Self::Linux),
            "macosx" => Ok(Self::MacOsX),
            "windows" => Ok(Self::Windows),
            _ => Err(PlatformError::UnknownOs(s.to_string())),
        }
    }
}

impl std::fmt::Display for HostOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Host architecture an archive targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostArch {
    /// 32-bit x86 (repository tag `x86`).
    X86,
    /// 64-bit x86 (repository tag `x64`).
    X64,
    /// 64-bit ARM.
    Aarch64,
}

impl HostArch {
    /// Canonical architecture component of the platform tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "i686",
            Self::X64 => "x86_64",
            Self::Aarch64 => "aarch64",
        }
    }
}

impl std::str::FromStr for HostArch {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x86" => Ok(Self::X86),
            "x64" => Ok(Self::X64),
            "aarch64" => Ok(Self::Aarch64),
            _ => Err(PlatformError::UnknownArch(s.to_string())),
        }
    }
}

impl std::fmt::Display for HostArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical platform tag of an archive.
///
/// Always one of the closed set `{os}`, `{arch}-{os}`, `{arch}`, or `all`
/// (when neither component is declared).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformTag {
    os: Option<HostOs>,
    arch: Option<HostArch>,
}

impl PlatformTag {
    /// Classify an archive's raw host OS/arch tags.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if either tag is present but unrecognized.
    pub fn classify(host_os: Option<&str>, host_arch: Option<&str>) -> Result<Self, PlatformError> {
        let os = host_os.map(str::parse).transpose()?;
        let arch = host_arch.map(str::parse).transpose()?;
        Ok(Self { os, arch })
    }
}

impl std::fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.os, self.arch) {
            (Some(os), Some(arch)) => write!(f, "{arch}-{os}"),
            (Some(os), None) => write!(f, "{os}"),
            (None, Some(arch)) => write!(f, "{arch}"),
            (None, None) => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(os: Option<&str>, arch: Option<&str>) -> String {
        PlatformTag::classify(os, arch)
            .expect("known platform")
            .to_string()
    }

    #[test]
    fn os_and_arch_combine() {
        assert_eq!(tag(Some("linux"), Some("x64")), "x86_64-linux");
        assert_eq!(tag(Some("macosx"), Some("aarch64")), "aarch64-darwin");
        assert_eq!(tag(Some("windows"), Some("x86")), "i686-windows");
    }

    #[test]
    fn os_only() {
        assert_eq!(tag(Some("macosx"), None), "darwin");
    }

    #[test]
    fn arch_only() {
        assert_eq!(tag(None, Some("aarch64")), "aarch64");
    }

    #[test]
    fn neither_is_all() {
        assert_eq!(tag(None, None), "all");
    }

    #[test]
    fn unknown_os_is_fatal() {
        let err = PlatformTag::classify(Some("bogus"), None).unwrap_err();
        assert!(matches!(err, PlatformError::UnknownOs(ref s) if s == "bogus"));
    }

    #[test]
    fn unknown_arch_is_fatal() {
        let err = PlatformTag::classify(Some("linux"), Some("mips")).unwrap_err();
        assert!(matches!(err, PlatformError::UnknownArch(ref s) if s == "mips"));
    }
}
