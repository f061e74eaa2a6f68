//! Licenses command

use crate::resolver::PassthroughResolver;
use sdknix_core::{NullReporter, assemble};
use std::path::Path;

/// Print the deduplicated, id-sorted licenses of a catalog, one
/// `{id}\t{hash}` line per license.
///
/// Goes through the same assembly pass as generation, so the listing
/// matches exactly what a generated document would embed.
pub fn licenses(catalog_path: &Path) -> anyhow::Result<()> {
    let catalog = super::load_catalog(catalog_path)?;
    let document = assemble(&catalog, &PassthroughResolver, &NullReporter)?;
    for license in &document.licenses {
        println!("{}\t{}", license.id, license.hash);
    }
    Ok(())
}
