use crate::cli::{CategoryAction, Cli, OutputFormat};
use crate::commands::{load_library, open_store, require_category, Result};
use crate::output::{base_table, print_json};
use clipshelf_core::store::LibraryStore;
use owo_colors::OwoColorize;

pub fn run(cli: &Cli, action: CategoryAction) -> Result<()> {
    let store = open_store(cli);
    let mut library = load_library(&store);

    match action {
        CategoryAction::List => {
            match cli.output {
                OutputFormat::Pretty => {
                    println!("{}", "Categories".bold().cyan());
                    println!();
                    let mut table = base_table(vec!["Name", "Color", "Videos"]);
                    for category in &library.categories {
                        let count = library
                            .videos
                            .iter()
                            .filter(|v| v.category_id == Some(category.id))
                            .count();
                        table.add_row(vec![
                            category.name.clone(),
                            category.color.clone(),
                            count.to_string(),
                        ]);
                    }
                    println!("{}", table);
                }
                OutputFormat::Json => print_json(&library.categories)?,
                OutputFormat::Text => {
                    for category in &library.categories {
                        println!("{}\t{}", category.name, category.color);
                    }
                }
            }
            // Listing mutates nothing; skip the save
            return Ok(());
        }
        CategoryAction::Add { name, color } => {
            let category = library.add_category(name, color).clone();
            store.save(&library)?;
            match cli.output {
                OutputFormat::Pretty => {
                    println!("{} category {}", "Added".green().bold(), category.name.bold());
                }
                OutputFormat::Json => print_json(&category)?,
                OutputFormat::Text => println!("{}\t{}", category.id, category.name),
            }
        }
        CategoryAction::Rename {
            name,
            new_name,
            color,
        } => {
            let id = require_category(&library, &name)?;
            library.update_category(id, new_name.clone(), color)?;
            store.save(&library)?;
            if cli.output == OutputFormat::Pretty {
                println!(
                    "{} {} {} {}",
                    "Renamed".green().bold(),
                    name.bold(),
                    "→".dimmed(),
                    new_name.bold()
                );
            }
        }
        CategoryAction::Remove { name } => {
            let id = require_category(&library, &name)?;
            let detached = library
                .videos
                .iter()
                .filter(|v| v.category_id == Some(id))
                .count();
            let category = library.remove_category(id)?;
            store.save(&library)?;
            if cli.output == OutputFormat::Pretty {
                println!(
                    "{} category {} ({} video(s) untagged)",
                    "Removed".green().bold(),
                    category.name.bold(),
                    detached
                );
            }
        }
    }

    Ok(())
}
