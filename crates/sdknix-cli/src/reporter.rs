//! Stderr diagnostics for the generation pass.

use sdknix_core::Reporter;

/// Writes one `{path}-{version}: {url}` line per resolved archive to
/// stderr, keeping stdout clean for the generated document.
#[derive(Debug, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn resolved(&self, id: &str, version: &str, url: &str) {
        eprintln!("{id}-{version}: {url}");
    }
}
