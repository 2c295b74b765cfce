use clap::Parser;
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::*;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; -v raises the default filter
    let default_filter = match cli.verbose {
        0 => "clipshelf_cli=info,clipshelf_core=info",
        1 => "clipshelf_cli=debug,clipshelf_core=debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let result = match &cli.command {
        Commands::Add {
            url,
            title,
            category,
            no_fetch,
        } => {
            add::run(
                &cli,
                url,
                title.as_deref(),
                category.as_deref(),
                *no_fetch,
            )
            .await
        }
        Commands::List { category, platform } => {
            list::run(&cli, category.as_deref(), *platform)
        }
        Commands::Remove { id } => remove::run(&cli, id),
        Commands::Inspect { url } => inspect::run(&cli, url).await,
        Commands::Category { action } => category::run(&cli, action.clone()),
        Commands::Log { limit } => log::run(&cli, *limit),
        Commands::Formats => formats::run(&cli),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
