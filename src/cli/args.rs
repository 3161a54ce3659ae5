//! Command-line argument parsing
//!
//! Provides clap-based CLI with subcommands and config overrides.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// phonesage - Ask natural-language questions about a Samsung phone catalog
#[derive(Parser, Debug)]
#[command(name = "phonesage")]
#[command(version)]
#[command(about = "Natural-language phone advisor over a fixed Samsung catalog", long_about = None)]
pub struct Args {
    /// Question to answer in one-shot mode
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Catalog seed file (overrides config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Generator model tag (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Skip LLM strategies and answer from deterministic templates only
    #[arg(long)]
    pub offline: bool,

    /// Verbosity: -v (debug), -vv (trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive question loop
    Repl,

    /// Run the JSON HTTP API server
    Serve,

    /// List the catalog's phones
    Phones,

    /// Display current configuration
    Config,
}

impl Args {
    /// Check that exactly one of question / subcommand was given
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_none() && self.question.is_none() {
            return Err(
                "Question required. Use 'phonesage \"<QUESTION>\"' or run a subcommand."
                    .to_string(),
            );
        }

        if self.command.is_some() && self.question.is_some() {
            return Err("Cannot specify a question with a subcommand.".to_string());
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(catalog) = &self.catalog {
            config.catalog.path = catalog.clone();
        }
        if let Some(model) = &self.model {
            config.generator.model = model.clone();
        }
        if self.offline {
            config.generator.enabled = false;
        }
    }
}
