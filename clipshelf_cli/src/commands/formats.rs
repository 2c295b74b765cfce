use crate::cli::{Cli, OutputFormat};
use crate::commands::Result;
use crate::output::print_json;
use clipshelf_core::resolver::{self, PatternInfo, Platform};
use owo_colors::OwoColorize;

/// Show all supported URL shapes.
pub fn run(cli: &Cli) -> Result<()> {
    let patterns = resolver::patterns();

    match cli.output {
        OutputFormat::Pretty => {
            println!();
            println!("{}", "Supported URL Shapes".bold().cyan());
            println!("{}", "====================".cyan());
            println!();
            println!(
                "Use {} to save any of these, or {} to try one out:",
                "clipshelf add <url>".cyan(),
                "clipshelf inspect <url>".cyan()
            );
            println!();

            for platform in [Platform::Youtube, Platform::Facebook] {
                let group: Vec<&PatternInfo> = patterns
                    .iter()
                    .filter(|p| p.platform == platform)
                    .collect();
                if group.is_empty() {
                    continue;
                }
                println!("{}", platform.to_string().cyan().bold());
                for pattern in group {
                    println!(
                        "  {} {}",
                        pattern.example.yellow(),
                        format!("({})", pattern.description).dimmed()
                    );
                }
                println!();
            }

            println!("{}", "Note:".bold());
            println!("  Facebook titles can't be auto-fetched; pass --title when adding.");
            println!();
        }
        OutputFormat::Json => print_json(&patterns)?,
        OutputFormat::Text => {
            for pattern in &patterns {
                println!(
                    "{}\t{}\t{}",
                    pattern.platform, pattern.example, pattern.description
                );
            }
        }
    }

    Ok(())
}
