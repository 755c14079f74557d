/*!
 * Configuration handling for lsfs
 */

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;

use crate::listing::ListingOptions;
use crate::types::NodeKind;

/// Name of the structure document, looked up in the working directory
pub const STRUCTURE_FILE: &str = "structure.json";

/// Kinds accepted by `--filter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    /// Only list files
    File,
    /// Only list directories
    Dir,
}

impl From<Filter> for NodeKind {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::File => NodeKind::File,
            Filter::Dir => NodeKind::Directory,
        }
    }
}

/// Command-line arguments for lsfs
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "lsfs",
    version = env!("CARGO_PKG_VERSION"),
    about = "List directory contents of the tree described by structure.json",
    long_about = "Lists the contents of a simulated file system read from structure.json in the current directory, supporting a subset of ls behavior.",
    disable_help_flag = true
)]
pub struct Args {
    /// Path to list (defaults to the root)
    pub path: Option<String>,

    /// Do not ignore entries starting with .
    #[clap(short = 'A')]
    pub all: bool,

    /// Use a long listing format
    #[clap(short = 'l')]
    pub long: bool,

    /// Reverse order while sorting
    #[clap(short = 'r')]
    pub reverse: bool,

    /// Sort by modification time
    #[clap(short = 't')]
    pub time: bool,

    /// Show human-readable sizes in long format
    #[clap(short = 'h')]
    pub human_readable: bool,

    /// Only list entries of one kind
    #[clap(long, value_enum)]
    pub filter: Option<Filter>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Print help
    #[clap(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Structure document describing the tree
    pub structure_file: PathBuf,

    /// Path to list inside the tree
    pub path: String,

    /// Listing behavior
    pub listing: ListingOptions,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            structure_file: PathBuf::from(STRUCTURE_FILE),
            path: args.path.unwrap_or_default(),
            listing: ListingOptions {
                long: args.long,
                show_hidden: args.all,
                reverse: args.reverse,
                sort_by_time: args.time,
                human_readable: args.human_readable,
                filter: args.filter.map(NodeKind::from),
            },
        }
    }
}
