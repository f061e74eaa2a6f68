//! Catalog assembly: raw catalog in, document model out.

use crate::attrpath;
use crate::builder::Builder;
use crate::error::GenError;
use crate::model::{Document, Package, Source};
use crate::sanitize::sanitize;
use sdknix_schema::{Archive, Catalog, License, PlatformTag, RemotePackage};

/// Resolves a repository download reference to its final URL.
///
/// External collaborator seam: the catalog's download references may be
/// relative to a repository root the core knows nothing about.
pub trait UrlResolver {
    /// Resolve `download_ref` for `package` to a fetchable URL.
    ///
    /// # Errors
    ///
    /// Any failure is fatal and propagated through the assembler unchanged;
    /// there are no retries.
    fn resolve(&self, download_ref: &str, package: &RemotePackage) -> anyhow::Result<String>;
}

/// Diagnostic sink for per-archive progress lines.
pub trait Reporter {
    /// Called once per resolved archive with the owning package's raw path
    /// and version. Informational only; must not fail.
    fn resolved(&self, id: &str, version: &str, url: &str);
}

/// No-op reporter for silent assembly (library callers, tests).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn resolved(&self, _: &str, _: &str, _: &str) {}
}

/// Assemble the output document from a raw catalog.
///
/// Packages are explicitly sorted by raw path and licenses deduplicated by
/// id (first seen wins) and sorted by id, so the result is deterministic
/// regardless of input iteration order.
///
/// # Errors
///
/// Returns [`GenError`] on the first unknown platform tag, unknown checksum
/// algorithm, or URL-resolution failure; no partial document is produced.
pub fn assemble(
    catalog: &Catalog,
    resolver: &dyn UrlResolver,
    reporter: &dyn Reporter,
) -> Result<Document, GenError> {
    let mut remotes: Vec<&RemotePackage> = catalog.packages.values().collect();
    remotes.sort_by(|a, b| a.path.cmp(&b.path));

    let mut packages = Vec::with_capacity(remotes.len());
    for remote in remotes {
        packages.push(convert(remote, resolver, reporter)?);
    }

    let mut licenses: Vec<License> = Vec::new();
    for package in &packages {
        if !licenses.iter().any(|l| l.id == package.license.id) {
            licenses.push(package.license.clone());
        }
    }
    licenses.sort_by(|a, b| a.id.cmp(&b.id));

    Ok(Document { packages, licenses })
}

fn convert(
    remote: &RemotePackage,
    resolver: &dyn UrlResolver,
    reporter: &dyn Reporter,
) -> Result<Package, GenError> {
    let mut sources = Vec::with_capacity(remote.archives.len());
    for archive in &remote.archives {
        sources.push(convert_archive(remote, archive, resolver, reporter)?);
    }

    let first_segment = remote.path.split(';').next().unwrap_or(&remote.path);
    let builder = Builder::select(remote.package_type, first_segment);
    tracing::debug!(package = %remote.path, builder = builder.fn_name(), "converted package");

    Ok(Package {
        id: remote.path.clone(),
        attrpath: attrpath::resolve(&remote.path),
        pname: sanitize(&remote.path),
        version: remote.version.clone(),
        builder,
        sources,
        display_name: remote.display_name.clone(),
        dir: remote.path.replace(';', std::path::MAIN_SEPARATOR_STR),
        license: remote.license.clone(),
    })
}

fn convert_archive(
    remote: &RemotePackage,
    archive: &Archive,
    resolver: &dyn UrlResolver,
    reporter: &dyn Reporter,
) -> Result<Source, GenError> {
    let platform = PlatformTag::classify(archive.host_os.as_deref(), archive.host_arch.as_deref())?;
    let algorithm = archive.complete.checksum.kind.parse()?;

    let url = resolver
        .resolve(&archive.complete.url, remote)
        .map_err(|source| GenError::Resolve {
            id: remote.path.clone(),
            source,
        })?;
    reporter.resolved(&remote.path, &remote.version, &url);

    Ok(Source {
        platform,
        url,
        algorithm,
        checksum: archive.complete.checksum.value.clone(),
    })
}
