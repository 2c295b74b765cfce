use crate::cli::{Cli, OutputFormat};
use crate::commands::{load_library, open_store, CommandError, Result};
use crate::output::{print_json, short_id};
use clipshelf_core::store::LibraryStore;
use owo_colors::OwoColorize;

pub fn run(cli: &Cli, id_prefix: &str) -> Result<()> {
    let store = open_store(cli);
    let mut library = load_library(&store);

    let prefix = id_prefix.trim().to_lowercase();
    let mut matches = library
        .videos
        .iter()
        .filter(|v| v.id.to_string().starts_with(&prefix))
        .map(|v| v.id);

    let id = matches
        .next()
        .ok_or_else(|| CommandError::VideoNotFound(id_prefix.to_string()))?;
    if matches.next().is_some() {
        return Err(CommandError::AmbiguousId(id_prefix.to_string()));
    }

    let entry = library
        .remove_video(id)
        .map_err(|_| CommandError::VideoNotFound(id_prefix.to_string()))?;
    store.save(&library)?;

    match cli.output {
        OutputFormat::Pretty => {
            println!(
                "{} {} {}",
                "Removed".green().bold(),
                entry.title.bold(),
                format!("[{}]", short_id(entry.id)).dimmed()
            );
        }
        OutputFormat::Json => print_json(&entry)?,
        OutputFormat::Text => println!("{}\t{}", entry.id, entry.title),
    }

    Ok(())
}
