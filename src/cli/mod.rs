use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod create;
mod normalize;
mod show;

pub use config::Config;

/// mergeproject - inspect and edit comparison project files
#[derive(Parser)]
#[command(name = "mergeproject")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the entries of a project file
    Show {
        /// Project file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the parsed document as JSON
        #[arg(long)]
        json: bool,

        /// Default recursion used when an entry has no subfolders setting
        #[arg(long)]
        recurse: bool,
    },

    /// Read a project file and write it back in canonical form
    Normalize {
        /// Input project file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path (defaults to rewriting the input in place)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Create a single-entry project file
    Create {
        /// Output project file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Left path
        #[arg(long)]
        left: String,

        /// Middle path (three-way comparison)
        #[arg(long)]
        middle: Option<String>,

        /// Right path
        #[arg(long)]
        right: String,

        /// File filter expression
        #[arg(long)]
        filter: Option<String>,

        /// Recurse into subfolders
        #[arg(long)]
        recurse: bool,

        /// Open the left side read-only
        #[arg(long)]
        left_readonly: bool,

        /// Open the right side read-only
        #[arg(long)]
        right_readonly: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Show {
            file,
            json,
            recurse,
        } => show::run(file, json, recurse || config.show.recurse.unwrap_or(false)),
        Commands::Normalize { input, output } => normalize::run(input, output, &config),
        Commands::Create {
            output,
            left,
            middle,
            right,
            filter,
            recurse,
            left_readonly,
            right_readonly,
        } => create::run(
            output,
            create::CreateArgs {
                left,
                middle,
                right,
                filter,
                recurse,
                left_readonly,
                right_readonly,
            },
            &config,
        ),
    }
}
