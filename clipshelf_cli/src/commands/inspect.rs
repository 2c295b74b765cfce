use crate::cli::{Cli, OutputFormat};
use crate::commands::Result;
use crate::output::print_json;
use clipshelf_core::metadata::{MetadataOutcome, MetadataResolver};
use clipshelf_core::resolver::{self, Platform};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::json;

/// Run the inspect command - classify and resolve without persisting.
pub async fn run(cli: &Cli, url: &str) -> Result<()> {
    let url = url.trim();
    let detection = resolver::resolve(url);

    let outcome = match &detection {
        Some(_) => {
            let spinner = (cli.output == OutputFormat::Pretty).then(|| {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {msg}")
                        .expect("Invalid progress template"),
                );
                spinner.set_message("Fetching metadata...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(100));
                spinner
            });
            let outcome = MetadataResolver::new()?.resolve(url).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            outcome
        }
        None => MetadataOutcome::Unrecognized,
    };

    match cli.output {
        OutputFormat::Pretty => print_pretty(url, detection.as_ref(), &outcome),
        OutputFormat::Json => print_json(&json!({
            "url": url,
            "detection": detection,
            "metadata": outcome,
        }))?,
        OutputFormat::Text => {
            match &detection {
                Some(d) => println!("{}\t{}", d.platform, d.video_id),
                None => println!("unknown\t-"),
            }
        }
    }

    Ok(())
}

fn print_pretty(url: &str, detection: Option<&resolver::Detection>, outcome: &MetadataOutcome) {
    println!();
    let Some(detection) = detection else {
        println!(
            "{} Could not detect the platform for: {}",
            "Unknown:".yellow().bold(),
            url.yellow()
        );
        println!();
        println!(
            "Run {} to see supported URL shapes.",
            "clipshelf formats".cyan()
        );
        println!();
        return;
    };

    println!(
        "{} {}",
        "Detected:".bold().cyan(),
        detection.description.dimmed()
    );
    println!(
        "  {} {}",
        "platform:".dimmed(),
        detection.platform.to_string().cyan().bold()
    );
    println!("  {} {}", "video id:".dimmed(), detection.video_id.green());
    if detection.platform == Platform::Youtube {
        println!(
            "  {} {}",
            "watch:".dimmed(),
            resolver::watch_url(&detection.video_id)
        );
        println!(
            "  {} {}",
            "embed:".dimmed(),
            resolver::embed_url(&detection.video_id)
        );
    }
    println!();

    match outcome {
        MetadataOutcome::Resolved(meta) => {
            println!("{}", "Metadata".bold().cyan());
            println!("  {} {}", "title:".dimmed(), meta.title.bold());
            println!("  {} {}", "channel:".dimmed(), meta.channel_name);
            println!("  {} {}", "channel url:".dimmed(), meta.channel_url);
            println!("  {} {}", "thumbnail:".dimmed(), meta.thumbnail_url);
        }
        MetadataOutcome::ManualEntryRequired(meta) => {
            println!(
                "{} {} exposes no public metadata; the title is entered manually.",
                "Metadata:".bold().cyan(),
                detection.platform
            );
            println!("  {} {}", "thumbnail:".dimmed(), meta.thumbnail_url);
        }
        MetadataOutcome::FetchFailed => {
            println!(
                "{} metadata fetch failed (network or endpoint error).",
                "Metadata:".bold().cyan()
            );
        }
        MetadataOutcome::Unrecognized => {}
    }
    println!();
}
