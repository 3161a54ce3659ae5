//! phonesage - main CLI entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use phonesage::advisor::PhoneAdvisor;
use phonesage::catalog::{InMemoryStore, PhoneStore};
use phonesage::cli::{Args, Commands};
use phonesage::config::Config;
use phonesage::{repl, server};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(message) = args.validate() {
        eprintln!("{}", message.red());
        std::process::exit(1);
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply_overrides(&mut config);

    match &args.command {
        None => {
            // validate() guarantees the question is present here
            let question = args.question.clone().unwrap_or_default();
            ask_once(&question, &config).await
        }
        Some(Commands::Repl) => {
            let advisor = PhoneAdvisor::from_config(&config)?;
            repl::run(&advisor).await
        }
        Some(Commands::Serve) => {
            init_tracing(args.verbose);
            server::run_server(&config).await
        }
        Some(Commands::Phones) => list_phones(&config),
        Some(Commands::Config) => show_config(&config),
    }
}

/// Answer one question and exit
async fn ask_once(question: &str, config: &Config) -> Result<()> {
    let advisor = PhoneAdvisor::from_config(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let answer = advisor.answer(question).await;
    spinner.finish_and_clear();

    println!("{}", answer);
    Ok(())
}

/// Print the catalog, one line per phone
fn list_phones(config: &Config) -> Result<()> {
    let store = InMemoryStore::load(&config.catalog.path)?;
    let records = store.list_all();

    if records.is_empty() {
        println!("{}", "Catalog is empty.".yellow());
        return Ok(());
    }

    println!("{} phones in catalog:\n", records.len());
    for record in records {
        let price = if record.price.is_empty() {
            "price unknown".to_string()
        } else {
            record.price.clone()
        };
        println!("  {}  {}", record.model_name.bold(), price.dimmed());
    }
    Ok(())
}

/// Show effective configuration and where it lives
fn show_config(config: &Config) -> Result<()> {
    if let Ok(path) = Config::config_path() {
        println!("{} {}\n", "Config file:".bold(), path.display());
    }
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_directive = match verbose {
        0 => "phonesage=info",
        1 => "phonesage=debug",
        _ => "phonesage=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();
}
