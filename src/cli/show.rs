use anyhow::{Context, Result};
use mergeproject::project::{ProjectDocument, ProjectEntry, Setting, Side};
use std::fmt::Display;
use std::path::PathBuf;

fn option_line<T: Display>(name: &str, setting: &Setting<T>) -> String {
    match setting.explicit() {
        Some(value) => format!("  {}: {}", name, value),
        None => format!("  {}: {} (default)", name, setting.get()),
    }
}

fn print_entry(index: usize, entry: &ProjectEntry, default_recurse: bool) {
    let mut recurse = default_recurse;
    let paths = entry.paths_and_recurse(&mut recurse);

    println!(
        "Entry {} ({}-way)",
        index + 1,
        if paths.is_three_way() { 3 } else { 2 }
    );
    for (side, label) in [(Side::Left, "Left"), (Side::Middle, "Middle"), (Side::Right, "Right")] {
        let (path, read_only) = entry.path(side);
        if path.is_empty() {
            continue;
        }
        let marker = if read_only { " [read-only]" } else { "" };
        println!("  {}: {}{}", label, path, marker);
    }
    println!("  Recurse: {}", recurse);

    if let Some(filter) = entry.filter.explicit() {
        println!("  Filter: {}", filter);
    }
    if let Some(unpacker) = entry.unpacker.explicit() {
        println!("  Unpacker: {}", unpacker);
    }
    if entry.has_prediffer() {
        println!("  Prediffer: {}", entry.prediffer());
    }

    println!("{}", option_line("White spaces", &entry.ignore_white));
    println!("{}", option_line("Ignore blank lines", &entry.ignore_blank_lines));
    println!("{}", option_line("Ignore case", &entry.ignore_case));
    println!("{}", option_line("Ignore carriage returns", &entry.ignore_eol));
    println!("{}", option_line("Ignore numbers", &entry.ignore_numbers));
    println!("{}", option_line("Ignore codepage", &entry.ignore_codepage));
    println!("{}", option_line("Ignore comment lines", &entry.filter_comment_lines));
    println!("{}", option_line("Compare method", &entry.compare_method));

    let hidden = entry.hidden_items.get();
    if !hidden.is_empty() {
        println!("  Hidden items:");
        for item in hidden {
            println!("    {}", item);
        }
    }
}

/// Print the entries of a project file
pub fn run(file: PathBuf, json: bool, default_recurse: bool) -> Result<()> {
    let document = ProjectDocument::read_file(&file)
        .with_context(|| format!("Failed to read project file: {}", file.display()))?;

    if json {
        let out = serde_json::to_string_pretty(&document).context("Failed to serialize project")?;
        println!("{}", out);
        return Ok(());
    }

    println!("Project: {}", file.display());
    println!("Entries: {}", document.len());
    for (index, entry) in document.iter().enumerate() {
        println!();
        print_entry(index, entry, default_recurse);
    }

    Ok(())
}
