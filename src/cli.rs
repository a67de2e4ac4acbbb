use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};

use crate::constants::{DEFAULT_MAX_FILE_SIZE, DEFAULT_OUTPUT_FILE};

#[derive(Parser, Debug)]
#[command(name = "project-snapshot", version)]
#[command(
    about = "List a project's files, then concatenate a curated subset of them into one \
                   fenced text document."
)]
pub struct Cli {
    /// Raise log verbosity on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every file under the root as a quoted list, ready for curation.
    List(ListArgs),
    /// Write the listed files, in order, into one output document.
    Concat(ConcatArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to walk.
    #[arg(short = 'r', long = "root", default_value = ".")]
    pub root: PathBuf,

    /// Extra directory names to prune, on top of node_modules, .git and .next.
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("sources")
        .required(true)
        .multiple(true)
        .args(["list", "paths"])
))]
pub struct ConcatArgs {
    /// Curated list file; lines starting with `#` are skipped.
    #[arg(short = 'l', long = "list")]
    pub list: Option<PathBuf>,

    /// Extra relative paths, appended after the list file's entries.
    pub paths: Vec<String>,

    /// Directory every listed path is resolved against.
    #[arg(short = 'r', long = "root", default_value = ".")]
    pub root: PathBuf,

    /// Document to (over)write.
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Files larger than this many bytes get an error placeholder. 0 disables the cap.
    #[arg(short = 's', long = "max-size", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Extra directory names that `glob:` rules never match inside.
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,
}
