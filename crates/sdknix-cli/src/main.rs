//! sdknix CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sdknix_cli::{Cli, Commands, cmd};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            catalog,
            base_url,
            output,
            indent_width,
            quiet,
        } => cmd::generate::generate(&catalog, base_url, output.as_deref(), indent_width, quiet),
        Commands::Licenses { catalog } => cmd::licenses::licenses(&catalog),
        Commands::Completions { shell } => {
            cmd::completions::completions(shell);
            Ok(())
        }
    }
}
