//! Subcommand implementations.

pub mod completions;
pub mod generate;
pub mod licenses;

use anyhow::Context;
use sdknix_schema::Catalog;
use std::path::Path;

/// Load a catalog from a JSON file, or from stdin when `path` is `-`.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    if path.as_os_str() == "-" {
        return Catalog::from_json_reader(std::io::stdin().lock())
            .context("parsing catalog from stdin");
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening catalog {}", path.display()))?;
    Catalog::from_json_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing catalog {}", path.display()))
}
