use crate::cli::{Cli, OutputFormat};
use crate::commands::{load_library, open_store, require_category, CommandError, Result};
use crate::output::{print_json, short_id};
use clipshelf_core::metadata::{MetadataOutcome, MetadataResolver};
use clipshelf_core::store::LibraryStore;
use clipshelf_core::{resolver, NewVideo};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Run the add command - validate, resolve metadata, persist the entry.
pub async fn run(
    cli: &Cli,
    url: &str,
    title: Option<&str>,
    category: Option<&str>,
    no_fetch: bool,
) -> Result<()> {
    let url = url.trim();
    let detection = resolver::resolve(url)
        .ok_or_else(|| CommandError::UnrecognizedUrl(url.to_string()))?;

    let store = open_store(cli);
    let mut library = load_library(&store);

    let category_id = match category {
        Some(name) => Some(require_category(&library, name)?),
        None => None,
    };

    let metadata_resolver = MetadataResolver::new()?;

    let mut title_value = title.map(str::to_string);
    let mut channel_name = None;
    let mut channel_url = None;
    let mut thumbnail =
        metadata_resolver.derive_thumbnail(detection.platform, Some(&detection.video_id));

    if !no_fetch {
        let spinner = fetch_spinner(cli, url);
        let outcome = metadata_resolver.resolve(url).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            MetadataOutcome::Resolved(meta) => {
                if title_value.is_none() && !meta.title.is_empty() {
                    title_value = Some(meta.title);
                }
                if !meta.channel_name.is_empty() {
                    channel_name = Some(meta.channel_name);
                }
                if !meta.channel_url.is_empty() {
                    channel_url = Some(meta.channel_url);
                }
                thumbnail = meta.thumbnail_url;
            }
            MetadataOutcome::ManualEntryRequired(meta) => {
                thumbnail = meta.thumbnail_url;
                if title_value.is_none() && cli.output == OutputFormat::Pretty {
                    println!(
                        "{} {} titles can't be auto-fetched. Pass {} to set one.",
                        "Note:".yellow().bold(),
                        detection.platform,
                        "--title".cyan()
                    );
                }
            }
            MetadataOutcome::FetchFailed => {
                if cli.output == OutputFormat::Pretty {
                    println!(
                        "{} Metadata fetch failed; saving with a derived thumbnail.",
                        "Note:".yellow().bold()
                    );
                }
            }
            // The resolver gate above already rejected unrecognized input
            MetadataOutcome::Unrecognized => {
                return Err(CommandError::UnrecognizedUrl(url.to_string()));
            }
        }
    }

    let entry = library
        .add_video(NewVideo {
            url: url.to_string(),
            title: title_value,
            thumbnail_url: thumbnail,
            channel_name,
            channel_url,
            category_id,
        })
        .clone();
    store.save(&library)?;

    match cli.output {
        OutputFormat::Pretty => {
            println!();
            println!(
                "{} {} {}",
                "Saved".green().bold(),
                entry.title.bold(),
                format!("[{}]", short_id(entry.id)).dimmed()
            );
            println!(
                "  {} {}  {} {}",
                "platform:".dimmed(),
                entry.platform.to_string().cyan(),
                "thumbnail:".dimmed(),
                entry.thumbnail_url
            );
            if let Some(channel) = &entry.channel_name {
                println!("  {} {}", "channel:".dimmed(), channel);
            }
            if let Some(category) = entry.category_id.and_then(|id| library.category(id)) {
                println!("  {} {}", "category:".dimmed(), category.name);
            }
            println!();
        }
        OutputFormat::Json => print_json(&entry)?,
        OutputFormat::Text => println!("{}\t{}\t{}", entry.id, entry.platform, entry.title),
    }

    Ok(())
}

fn fetch_spinner(cli: &Cli, url: &str) -> Option<ProgressBar> {
    if cli.output != OutputFormat::Pretty {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress template"),
    );
    spinner.set_message(format!("Fetching metadata for {}...", url));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    Some(spinner)
}
