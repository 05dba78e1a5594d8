use anyhow::{bail, Context, Result};
use log::info;
use mergeproject::project::{ProjectDocument, ProjectEntry};
use std::path::PathBuf;

use super::Config;

/// Values for the single entry of a new project
pub struct CreateArgs {
    pub left: String,
    pub middle: Option<String>,
    pub right: String,
    pub filter: Option<String>,
    pub recurse: bool,
    pub left_readonly: bool,
    pub right_readonly: bool,
}

/// Create a single-entry project file
pub fn run(output: PathBuf, args: CreateArgs, config: &Config) -> Result<()> {
    if args.left.is_empty() || args.right.is_empty() {
        bail!("Both --left and --right must be non-empty");
    }

    let mut entry = ProjectEntry::new();
    entry.set_left(args.left, Some(args.left_readonly));
    if let Some(middle) = args.middle {
        entry.set_middle(middle, None);
    }
    entry.set_right(args.right, Some(args.right_readonly));
    if let Some(filter) = args.filter {
        entry.filter.set(filter);
    }
    entry.subfolders.set(i32::from(args.recurse));

    let document = ProjectDocument::from(vec![entry]);
    document
        .save_file_with(&output, &config.writer_config()?)
        .with_context(|| format!("Failed to write project file: {}", output.display()))?;

    info!("Created {}", output.display());
    Ok(())
}
