//! # mergeproject
//!
//! A command-line tool for inspecting and editing comparison project files.
//!
//! ## Usage
//!
//! ```bash
//! # Print the entries of a project
//! mergeproject show compare.WinMerge
//!
//! # Rewrite a project in canonical form
//! mergeproject normalize compare.WinMerge
//!
//! # Create a new two-way project
//! mergeproject create new.WinMerge --left C:\old --right C:\new --recurse
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
