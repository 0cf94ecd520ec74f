//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Path-addressed trees: build, copy and visit
#[derive(Parser, Debug)]
#[command(name = "maptree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/maptree/maptree.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a four-level chain under a fresh tree and visit the result
    Demo,

    /// Build a tree from assignments and print it
    Build {
        /// Assignments like `a.b=1`; `=1` sets the root, so a lone empty key cannot be addressed
        #[arg(value_name = "PATH=VALUE")]
        assignments: Vec<String>,

        /// Deep copy the subtree at SRC to DEST, applied after all assignments
        #[arg(long = "copy", value_name = "SRC:DEST")]
        copies: Vec<String>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print a commented config template
    Template,
    /// Print the global config file location
    Path,
}
