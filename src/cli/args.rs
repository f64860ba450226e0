//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::MAX_START_LEVEL;
use crate::domain::SortOrder;

/// Render nested-set trees as indented option lists
#[derive(Parser, Debug)]
#[command(name = "nestset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Local config file (overrides global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Selection of roots and excluded node shared by listing commands
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Tree file (default: `tree_file` setting)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Node being moved; impossible targets are left out
    #[arg(short, long)]
    pub exclude: Option<u64>,

    /// Start from these roots instead of all roots (repeatable)
    #[arg(short, long = "root")]
    pub roots: Vec<u64>,

    /// Sibling order
    #[arg(short, long, value_enum)]
    pub order: Option<SortOrder>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print `label<TAB>id` options
    Options {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Level of the roots (custom orders only)
        #[arg(long, value_parser = clap::value_parser!(u16).range(..=i64::from(MAX_START_LEVEL)))]
        start_level: Option<u16>,

        /// Indentation marker repeated per level
        #[arg(short, long)]
        marker: Option<String>,
    },

    /// Print the selection as a tree
    Tree {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List root nodes
    Roots {
        /// Tree file (default: `tree_file` setting)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
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
    /// Show effective settings
    Show,
    /// Show global config file location
    Path,
}
