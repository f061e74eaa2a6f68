//! The derived output document model.
//!
//! Everything here is immutable: built once per generation pass by
//! [`crate::assemble`], consumed once by [`crate::render`].

use crate::builder::Builder;
use sdknix_schema::{ChecksumAlgorithm, License, PlatformTag};

/// A resolved download for one platform of a package.
#[derive(Debug, Clone)]
pub struct Source {
    /// Canonical platform tag, the key of this source in the `sources`
    /// record.
    pub platform: PlatformTag,

    /// Final resolved download URL.
    pub url: String,

    /// Normalized checksum algorithm.
    pub algorithm: ChecksumAlgorithm,

    /// Hex digest value.
    pub checksum: String,
}

/// A package record of the output document.
#[derive(Debug, Clone)]
pub struct Package {
    /// Raw repository path, carried verbatim as the `id` field.
    pub id: String,

    /// Derived hierarchy segments (sanitized, version suffixes merged).
    pub attrpath: Vec<String>,

    /// Sanitized short name derived from the whole raw path.
    pub pname: String,

    /// Version string, carried verbatim.
    pub version: String,

    /// Chosen builder category.
    pub builder: Builder,

    /// One source per archive, in catalog order.
    pub sources: Vec<Source>,

    /// Human-readable display name, carried verbatim.
    pub display_name: String,

    /// Filesystem-style install directory (raw path with the separator
    /// swapped for the platform directory separator).
    pub dir: String,

    /// License the package is distributed under.
    pub license: License,
}

impl Package {
    /// Hyphen-joined derived path: this package's record key in the
    /// top-level document.
    pub fn attr_key(&self) -> String {
        self.attrpath.join("-")
    }
}

/// The assembled output document: packages ordered by raw path, licenses
/// deduplicated by id and ordered by id.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Package records, raw-path ascending.
    pub packages: Vec<Package>,

    /// Unique licenses, id ascending.
    pub licenses: Vec<License>,
}
