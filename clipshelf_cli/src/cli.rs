use clap::{Parser, Subcommand, ValueEnum};
use clipshelf_core::Platform;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipshelf")]
#[command(about = "Clipshelf - save and organize video links from YouTube and Facebook")]
#[command(version)]
#[command(after_help = "\x1b[1;36mQuick Start:\x1b[0m
  clipshelf add <url>                     Save a video (metadata auto-fetched)
  clipshelf add <url> --category Music    Save into a category
  clipshelf list                          Show the library
  clipshelf inspect <url>                 Classify a URL without saving
  clipshelf formats                       Show supported URL shapes

\x1b[1;36mCategories & History:\x1b[0m
  clipshelf category list                 Show categories
  clipshelf category add Cooking          Add a category
  clipshelf log                           Show recent activity

\x1b[1;36mMore Info:\x1b[0m
  clipshelf <command> --help              Get help for any command")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the library file (default: <data dir>/clipshelf/library.json)
    #[arg(long, global = true, env = "CLIPSHELF_LIBRARY")]
    pub library: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save a video URL to the library
    ///
    /// The URL must match a supported YouTube or Facebook shape. YouTube
    /// titles and channels are fetched automatically; Facebook requires
    /// --title.
    #[command(after_help = "\x1b[1;33mExamples:\x1b[0m
  clipshelf add https://youtu.be/dQw4w9WgXcQ
  clipshelf add https://fb.watch/abc123/ --title \"Cooking stream\"
  clipshelf add <url> --category Music --no-fetch")]
    Add {
        /// Video URL (YouTube or Facebook)
        url: String,
        /// Title override (required in practice for Facebook links)
        #[arg(long, short)]
        title: Option<String>,
        /// Category name to file the video under
        #[arg(long, short)]
        category: Option<String>,
        /// Skip the metadata fetch and derive the thumbnail locally
        #[arg(long)]
        no_fetch: bool,
    },

    /// List saved videos
    #[command(alias = "ls")]
    #[command(after_help = "\x1b[1;33mExamples:\x1b[0m
  clipshelf list
  clipshelf list --category Music
  clipshelf list --platform facebook --output json")]
    List {
        /// Only videos in this category
        #[arg(long, short)]
        category: Option<String>,
        /// Only videos from this platform
        #[arg(long, short, value_enum)]
        platform: Option<PlatformFilter>,
    },

    /// Remove a video by id prefix
    #[command(alias = "rm")]
    Remove {
        /// Video id (a unique prefix is enough)
        id: String,
    },

    /// Classify a URL and fetch its metadata without saving
    Inspect {
        /// URL to inspect
        url: String,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Show the activity log
    Log {
        /// Maximum number of events to show
        #[arg(long, short, default_value_t = 20)]
        limit: usize,
    },

    /// Show all supported URL shapes
    #[command(alias = "patterns")]
    Formats,
}

#[derive(Subcommand, Clone)]
pub enum CategoryAction {
    /// List categories
    List,
    /// Add a category
    Add {
        /// Category name
        name: String,
        /// HSL color triplet (e.g. "340 82% 52%")
        #[arg(long, default_value = "200 98% 39%")]
        color: String,
    },
    /// Rename a category
    Rename {
        /// Current name
        name: String,
        /// New name
        new_name: String,
        /// New HSL color triplet
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a category (its videos keep their entries, minus the tag)
    #[command(alias = "rm")]
    Remove {
        /// Category name
        name: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Pretty,
    /// JSON output
    Json,
    /// Plain text output
    Text,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlatformFilter {
    Youtube,
    Facebook,
}

impl From<PlatformFilter> for Platform {
    fn from(filter: PlatformFilter) -> Self {
        match filter {
            PlatformFilter::Youtube => Platform::Youtube,
            PlatformFilter::Facebook => Platform::Facebook,
        }
    }
}
