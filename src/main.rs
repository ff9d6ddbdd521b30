//! Artifact List Generator
//!
//! Resolves a tree of configuration documents connected by include
//! references into one merged, validated configuration and writes it out
//! as JSON for the downstream artifact gathering steps.

use anyhow::Result;
use artifact_list_gen::cli::Cli;
use artifact_list_gen::config::Configuration;
use artifact_list_gen::error::ConfigError;
use clap::Parser;
use std::fs::OpenOptions;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let config_path = cli.config.ok_or(ConfigError::NotSpecified)?;
    let config = Configuration::load(&config_path, cli.all_classifiers)?;

    let rendered = serde_json::to_string_pretty(&config)?;
    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            info!("Resolved configuration written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
