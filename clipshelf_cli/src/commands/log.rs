use crate::cli::{Cli, OutputFormat};
use crate::commands::{load_library, open_store, Result};
use crate::output::{base_table, format_timestamp, print_json, truncate_text};
use owo_colors::OwoColorize;

pub fn run(cli: &Cli, limit: usize) -> Result<()> {
    let store = open_store(cli);
    let library = load_library(&store);
    let events = library.recent_activity(limit);

    match cli.output {
        OutputFormat::Pretty => {
            if events.is_empty() {
                println!("{}", "No activity recorded yet".yellow());
                return Ok(());
            }

            println!("{}", "Activity Log".bold().cyan());
            println!();

            let mut table = base_table(vec!["When", "Action", "Entity", "Detail"]);
            for event in &events {
                table.add_row(vec![
                    format_timestamp(&event.created_at),
                    event.action.as_str().to_string(),
                    event.entity_type.clone(),
                    truncate_text(event.detail.as_deref().unwrap_or(""), 48),
                ]);
            }
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&events)?,
        OutputFormat::Text => {
            for event in &events {
                println!(
                    "{}\t{}\t{}",
                    event.created_at.to_rfc3339(),
                    event.action.as_str(),
                    event.detail.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}
