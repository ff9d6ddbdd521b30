//! CLI definitions for artifact-list-gen.
//!
//! This module defines the CLI structure using clap's derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Generate an artifact list from a hierarchical configuration tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the root configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Consider all artifact classifiers
    #[arg(short, long)]
    pub all_classifiers: bool,

    /// Write the resolved configuration to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}
