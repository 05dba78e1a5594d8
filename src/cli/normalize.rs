use anyhow::{Context, Result};
use log::{info, warn};
use mergeproject::project::{is_project_file, ProjectDocument};
use std::path::PathBuf;

use super::Config;

/// Rewrite a project file in canonical form
pub fn run(input: PathBuf, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let output = output.unwrap_or_else(|| input.clone());
    if !is_project_file(&output) {
        warn!(
            "{} does not use the .{} extension",
            output.display(),
            mergeproject::project::PROJECT_FILE_EXTENSION
        );
    }

    let document = ProjectDocument::read_file(&input)
        .with_context(|| format!("Failed to read project file: {}", input.display()))?;

    document
        .save_file_with(&output, &config.writer_config()?)
        .with_context(|| format!("Failed to write project file: {}", output.display()))?;

    info!(
        "Normalized {} -> {} ({} entries)",
        input.display(),
        output.display(),
        document.len()
    );
    Ok(())
}
