use crate::cli::{Cli, OutputFormat, PlatformFilter};
use crate::commands::{load_library, open_store, require_category, Result};
use crate::output::{base_table, format_timestamp, print_json, short_id, truncate_text};
use clipshelf_core::Platform;
use owo_colors::OwoColorize;

pub fn run(cli: &Cli, category: Option<&str>, platform: Option<PlatformFilter>) -> Result<()> {
    let store = open_store(cli);
    let library = load_library(&store);

    let category_id = match category {
        Some(name) => Some(require_category(&library, name)?),
        None => None,
    };
    let platform: Option<Platform> = platform.map(Into::into);

    let videos = library.videos_filtered(category_id, platform);

    match cli.output {
        OutputFormat::Pretty => {
            if videos.is_empty() {
                println!("{}", "No videos saved yet".yellow());
                println!(
                    "Use {} to save your first one.",
                    "clipshelf add <url>".cyan()
                );
                return Ok(());
            }

            println!("{}", "Saved Videos".bold().cyan());
            println!();

            let mut table = base_table(vec![
                "Id", "Title", "Platform", "Category", "Channel", "Added",
            ]);
            for video in &videos {
                let category_name = video
                    .category_id
                    .and_then(|id| library.category(id))
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                table.add_row(vec![
                    short_id(video.id),
                    truncate_text(&video.title, 48),
                    video.platform.to_string(),
                    category_name,
                    video.channel_name.clone().unwrap_or_default(),
                    format_timestamp(&video.created_at),
                ]);
            }
            println!("{}", table);
            println!();
            println!(
                "{} Use {} to drop an entry",
                "Tip:".green().bold(),
                "clipshelf rm <id>".cyan()
            );
        }
        OutputFormat::Json => print_json(&videos)?,
        OutputFormat::Text => {
            for video in &videos {
                println!(
                    "{}\t{}\t{}\t{}",
                    video.id, video.platform, video.title, video.url
                );
            }
        }
    }

    Ok(())
}
