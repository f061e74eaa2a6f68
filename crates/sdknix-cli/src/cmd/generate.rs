//! Generate command

use crate::reporter::StderrReporter;
use crate::resolver::BaseUrlResolver;
use anyhow::Context;
use sdknix_core::{NullReporter, RenderOptions, assemble, render};
use std::io::Write;
use std::path::Path;

/// Generate the Nix document from a catalog and write it out.
///
/// The document is rendered in full before anything is written: a failed
/// generation produces no partial output.
pub fn generate(
    catalog_path: &Path,
    base_url: Option<String>,
    output: Option<&Path>,
    indent_width: usize,
    quiet: bool,
) -> anyhow::Result<()> {
    let catalog = super::load_catalog(catalog_path)?;
    tracing::debug!(packages = catalog.packages.len(), "catalog loaded");

    let resolver = BaseUrlResolver::new(base_url);
    let document = if quiet {
        assemble(&catalog, &resolver, &NullReporter)?
    } else {
        assemble(&catalog, &resolver, &StderrReporter)?
    };
    let text = render(&document, RenderOptions { indent_width });

    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .write_all(text.as_bytes())
            .context("writing to stdout")?,
    }
    Ok(())
}
