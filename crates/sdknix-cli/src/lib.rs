//! sdknix - SDK catalog to Nix expression generator
#![allow(missing_docs)]
//!
//! Converts a pre-fetched SDK repository catalog (JSON) into a single
//! deterministic Nix expression of package records, one builder call per
//! package, suitable for an external build tool to consume.
//!
//! The catalog itself is produced elsewhere; this binary only transforms.

pub mod cmd;
pub mod reporter;
pub mod resolver;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sdknix")]
#[command(author, version, about = "Generate a Nix expression from an SDK package catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the Nix document from a catalog
    Generate {
        /// Catalog JSON file, or '-' for stdin
        #[arg(long)]
        catalog: PathBuf,
        /// Repository root URL for resolving relative download references
        #[arg(long, env = "SDKNIX_BASE_URL")]
        base_url: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent_width: usize,
        /// Suppress per-package diagnostic lines
        #[arg(short, long)]
        quiet: bool,
    },
    /// List the deduplicated licenses of a catalog
    Licenses {
        /// Catalog JSON file, or '-' for stdin
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
