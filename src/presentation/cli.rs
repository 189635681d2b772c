//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --root, --scratch-dir, --registry) are
//!   inherited by all subcommands
//! - Flags override environment variables and config files

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// images-readme - resolve and load per-image README descriptors
#[derive(Parser, Debug)]
#[command(name = "images-readme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory containing images/ (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory that receives starter templates for missing READMEs
    #[arg(long, global = true, value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// Registry prefix for synthetic image references
    #[arg(long, global = true, value_name = "REF")]
    pub registry: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a component's README descriptor
    Read {
        /// Component name, e.g. `zot` or `cert-manager.acmesolver`
        #[arg(required_unless_present = "request")]
        name: Option<String>,

        /// JSON request document `{"name": "..."}` (`-` reads stdin)
        #[arg(long, value_name = "PATH", conflicts_with = "name")]
        request: Option<PathBuf>,
    },

    /// Show where a component's descriptor is expected
    Resolve {
        /// Component name
        name: String,
    },

    /// Print a starter descriptor for a component
    Template {
        /// Component name
        name: String,
    },
}
