// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mailsuggest::{score, AddressBook, CurrentUser, SuggestConfig, Suggester};

mod cli;
use cli::display::{print_results, score_value};
use cli::{Cli, Commands};

/// Env var holding a tracing filter; overrides `-v`.
const LOG_ENV: &str = "MAILSUGGEST_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Score { item, query } => {
            println!("{}", score_value(score(&item, &query)).trim_start());
            Ok(())
        }
        Commands::Suggest {
            query,
            book,
            limit,
            config,
            user_name,
            user_email,
            json,
        } => {
            let config = load_config(config.as_deref(), limit)?;
            let book = load_book(book.as_deref())?;
            info!(entries = book.len(), max = config.max_results, "address book loaded");

            let user = user_email.map(|email| CurrentUser::new(user_name.unwrap_or_default(), email));
            let suggester = Suggester::new(config).with_provider(book);
            let results = suggester.suggest(&query, user.as_ref());

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&results).context("serialize results")?
                );
            } else {
                print_results(&query, &results);
            }
            Ok(())
        }
    }
}

/// Config file (if any), then `--limit` on top, then validation.
fn load_config(path: Option<&str>, limit: Option<usize>) -> Result<SuggestConfig> {
    let mut config = match path {
        Some(path) => SuggestConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path))?,
        None => SuggestConfig::default(),
    };
    if let Some(limit) = limit {
        config = config.with_max_results(limit);
    }
    config.validate().context("checking --limit")?;
    debug!(?config, "effective config");
    Ok(config)
}

fn load_book(path: Option<&str>) -> Result<AddressBook> {
    match path {
        Some(path) => AddressBook::from_json_file(path)
            .with_context(|| format!("loading address book {}", path)),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading address book from stdin")?;
            AddressBook::from_json_str("stdin", &raw).context("parsing address book from stdin")
        }
    }
}
