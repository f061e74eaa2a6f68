//! Download reference resolution against a repository root.

use anyhow::bail;
use sdknix_core::UrlResolver;
use sdknix_schema::RemotePackage;

/// Resolves download references against an optional repository base URL.
///
/// Absolute references pass through unchanged; relative references are
/// joined onto the base. A relative reference with no base configured is a
/// fatal resolution error, surfaced through the assembler.
#[derive(Debug, Clone, Default)]
pub struct BaseUrlResolver {
    base: Option<String>,
}

impl BaseUrlResolver {
    /// Create a resolver for the given repository root, if any.
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base: base_url.map(|b| b.trim_end_matches('/').to_string()),
        }
    }
}

impl UrlResolver for BaseUrlResolver {
    fn resolve(&self, download_ref: &str, package: &RemotePackage) -> anyhow::Result<String> {
        if is_absolute(download_ref) {
            return Ok(download_ref.to_string());
        }
        match &self.base {
            Some(base) => Ok(format!("{base}/{}", download_ref.trim_start_matches('/'))),
            None => bail!(
                "relative download reference {download_ref:?} in package {:?} but no base URL configured",
                package.path
            ),
        }
    }
}

/// Passes every download reference through unchanged.
///
/// Used where the resolved URL is irrelevant (license listing).
#[derive(Debug, Clone, Copy)]
pub struct PassthroughResolver;

impl UrlResolver for PassthroughResolver {
    fn resolve(&self, download_ref: &str, _package: &RemotePackage) -> anyhow::Result<String> {
        Ok(download_ref.to_string())
    }
}

fn is_absolute(download_ref: &str) -> bool {
    download_ref.starts_with("http://") || download_ref.starts_with("https://")
}
