pub mod add;
pub mod category;
pub mod formats;
pub mod inspect;
pub mod list;
pub mod log;
pub mod remove;

use crate::cli::Cli;
use clipshelf_core::store::{load_or_init, FileStore, Library};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("'{0}' is not a supported video URL. Run 'clipshelf formats' to see supported shapes")]
    UnrecognizedUrl(String),

    #[error("No video matches id prefix '{0}'")]
    VideoNotFound(String),

    #[error("Id prefix '{0}' matches more than one video; use more characters")]
    AmbiguousId(String),

    #[error("Category '{0}' not found. Run 'clipshelf category list' to see categories")]
    CategoryNotFound(String),

    #[error("Core library error: {0}")]
    Core(#[from] clipshelf_core::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Open the library store selected by `--library` / `CLIPSHELF_LIBRARY`,
/// falling back to the default data-dir location.
pub fn open_store(cli: &Cli) -> FileStore {
    let store = match &cli.library {
        Some(path) => FileStore::new(path.clone()),
        None => FileStore::new_default(),
    };
    tracing::debug!(path = %store.path().display(), "using library file");
    store
}

/// Load the library, seeding default categories on first use.
pub fn load_library(store: &FileStore) -> Library {
    load_or_init(store)
}

/// Resolve a category name to its id, or fail with a helpful error.
pub fn require_category(library: &Library, name: &str) -> Result<Uuid> {
    library
        .category_by_name(name)
        .map(|c| c.id)
        .ok_or_else(|| CommandError::CategoryNotFound(name.to_string()))
}
