//! Command-line arguments.

use clap::{ArgAction, Parser, Subcommand};
use tabletfs_core::config::{DEFAULT_HOST, HOST_ENV};

/// Browse a tablet's documents over its web interface.
#[derive(Debug, Parser)]
#[command(name = "tabletfs", version, about)]
pub struct Cli {
    /// Device address (host or host:port, scheme optional)
    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the folder tree below PATH (root by default)
    Tree {
        /// Folder names separated by `/`
        path: Option<String>,
        /// Indent with spaces instead of box-drawing glyphs
        #[arg(long)]
        plain: bool,
    },
    /// List the contents of PATH (root by default)
    Ls {
        path: Option<String>,
        /// Show kind, version, modification date and page count
        #[arg(short, long)]
        long: bool,
    },
    /// Print the full metadata of one entry as JSON
    Info {
        /// Entry path, e.g. `Notes/Meeting`
        path: String,
    },
}

impl Cli {
    /// Default tracing directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
