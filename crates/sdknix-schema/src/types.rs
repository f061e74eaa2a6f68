use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full set of remote package descriptors to convert, keyed by the
/// repository's package key (normally the raw semicolon path).
///
/// Produced by an external repository-catalog collaborator; sdknix treats it
/// as a pre-populated input structure and never fetches anything itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Package descriptors by package key.
    pub packages: BTreeMap<String, RemotePackage>,
}

impl Catalog {
    /// Deserialize a catalog from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the input is not a valid catalog
    /// document (including unrecognized metadata type tags, which are
    /// rejected here rather than downstream).
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

/// One remote package descriptor as listed by the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePackage {
    /// Raw semicolon-delimited path (e.g. `build-tools;30.0.3`).
    pub path: String,

    /// Human-readable display name (e.g. `Android SDK Build-Tools 30.0.3`).
    pub display_name: String,

    /// Version string, carried opaquely (revisions are not compared).
    pub version: String,

    /// License terms the package is distributed under.
    pub license: License,

    /// Metadata type tag declared by the repository.
    #[serde(rename = "type")]
    pub package_type: PackageType,

    /// Downloadable payloads, one per supported host platform.
    pub archives: Vec<Archive>,
}

/// One platform-specific downloadable payload of a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    /// Host operating system the payload targets, if restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_os: Option<String>,

    /// Host architecture the payload targets, if restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_arch: Option<String>,

    /// The complete (non-patch) payload.
    pub complete: ArchiveFile,
}

/// A downloadable file: its download reference and integrity checksum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveFile {
    /// Download reference as declared by the repository; may be relative to
    /// the repository root and must be resolved before use.
    pub url: String,

    /// Integrity checksum of the file.
    pub checksum: Checksum,
}

/// An integrity checksum as declared by the repository.
///
/// The algorithm tag is carried raw here; it is normalized (and unknown
/// algorithms rejected) via [`crate::checksum::ChecksumAlgorithm`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checksum {
    /// Raw algorithm tag (e.g. `sha1`, `sha-256`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Hex digest value.
    pub value: String,
}

/// License terms: an identifier and a content hash.
///
/// Licenses are deduplicated by identifier across the whole catalog; the
/// hash identifies the accepted license text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License identifier (e.g. `android-sdk-license`).
    pub id: String,

    /// Content hash of the license text.
    pub hash: String,
}

/// Metadata type tag of a package descriptor.
///
/// A closed set: the repository's type-detail classes are finite, and an
/// unrecognized tag is rejected at catalog deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageType {
    /// Generic component (tools, build-tools, emulator, ...).
    Generic,
    /// Platform source bundle.
    Source,
    /// SDK platform.
    Platform,
    /// Vendor extra.
    Extra,
    /// Platform add-on.
    Addon,
    /// Maven repository artifact.
    Maven,
    /// System image.
    SysImg,
}

impl PackageType {
    /// Whether this type belongs to the "source-like" classification set,
    /// which always installs as plain unpacked sources.
    pub fn is_source_like(self) -> bool {
        matches!(
            self,
            Self::Source | Self::Platform | Self::Extra | Self::Addon | Self::Maven | Self::SysImg
        )
    }
}
