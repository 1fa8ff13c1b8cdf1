//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// projscope - locate and inspect a JavaScript project's package.json
#[derive(Parser)]
#[command(name = "projscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the path of the nearest package.json
    Locate(LocateArgs),

    /// Summarize the nearest package.json
    Show(ShowArgs),

    /// Print one top-level field of the nearest package.json
    Field(FieldArgs),

    /// Print the absolute path of the project entry point
    Entry(EntryArgs),

    /// Print the platform output directory
    Dist(DistArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct LocateArgs {
    /// Directory to start searching from (defaults to current directory)
    pub dir: Option<PathBuf>,

    /// Print the path relative to the current directory
    #[arg(long)]
    pub relative: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Directory to start searching from (defaults to current directory)
    pub dir: Option<PathBuf>,

    /// Print the whole manifest as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FieldArgs {
    /// Top-level key to print (e.g. main, name, dependencies)
    pub key: String,

    /// Directory to start searching from (defaults to current directory)
    pub dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct EntryArgs {
    /// Directory to start searching from (defaults to current directory)
    pub dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct DistArgs {
    /// Directory to start searching from (defaults to current directory)
    pub dir: Option<PathBuf>,

    /// Target platform (android, ios); defaults to `project.platform` from config
    #[arg(short, long, env = "PROJSCOPE_PLATFORM")]
    pub platform: Option<String>,

    /// Print an absolute path instead of one relative to the project root
    #[arg(long)]
    pub absolute: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
