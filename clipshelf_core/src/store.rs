//! The bookmark library and its persistence.
//!
//! The library is a single JSON document (videos, categories, activity log).
//! [`LibraryStore`] abstracts where that document lives: [`MemoryStore`] for
//! tests, [`FileStore`] for the default on-disk location.

use crate::activity::{ActivityAction, ActivityEvent};
use crate::entry::{default_categories, Category, NewVideo, VideoEntry, UNTITLED};
use crate::error::Error;
use crate::resolver::{self, Platform};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub activity: Vec<ActivityEvent>,
}

impl Library {
    /// A fresh library seeded with the default categories.
    pub fn with_default_categories() -> Self {
        Library {
            categories: default_categories(),
            ..Library::default()
        }
    }

    /// True for a library with no videos, categories, or history - i.e. one
    /// that has never been used.
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.categories.is_empty() && self.activity.is_empty()
    }

    /// Save a video. Assigns id and timestamp, classifies the platform from
    /// the URL, falls back to [`UNTITLED`] when no title is given, and
    /// prepends so the newest entry lists first.
    pub fn add_video(&mut self, new: NewVideo) -> &VideoEntry {
        let title = match new.title {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => UNTITLED.to_string(),
        };
        let entry = VideoEntry {
            id: Uuid::new_v4(),
            platform: resolver::classify(&new.url),
            url: new.url.trim().to_string(),
            title,
            thumbnail_url: new.thumbnail_url,
            channel_name: new.channel_name.filter(|s| !s.is_empty()),
            channel_url: new.channel_url.filter(|s| !s.is_empty()),
            category_id: new.category_id,
            created_at: Utc::now(),
        };
        self.record(
            ActivityAction::VideoAdded,
            Some(entry.id),
            Some(entry.title.clone()),
        );
        self.videos.insert(0, entry);
        &self.videos[0]
    }

    pub fn remove_video(&mut self, id: Uuid) -> Result<VideoEntry, Error> {
        let position = self
            .videos
            .iter()
            .position(|v| v.id == id)
            .ok_or(Error::VideoNotFound)?;
        let entry = self.videos.remove(position);
        self.record(
            ActivityAction::VideoRemoved,
            Some(entry.id),
            Some(entry.title.clone()),
        );
        Ok(entry)
    }

    pub fn video(&self, id: Uuid) -> Option<&VideoEntry> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> &Category {
        let category = Category::new(name, color);
        self.record(
            ActivityAction::CategoryAdded,
            Some(category.id),
            Some(category.name.clone()),
        );
        self.categories.push(category);
        self.categories.last().expect("category just pushed")
    }

    pub fn update_category(
        &mut self,
        id: Uuid,
        name: impl Into<String>,
        color: Option<String>,
    ) -> Result<(), Error> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::CategoryNotFound)?;
        category.name = name.into();
        if let Some(color) = color {
            category.color = color;
        }
        let detail = category.name.clone();
        self.record(ActivityAction::CategoryUpdated, Some(id), Some(detail));
        Ok(())
    }

    /// Remove a category and detach it from every video that referenced it.
    pub fn remove_category(&mut self, id: Uuid) -> Result<Category, Error> {
        let position = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::CategoryNotFound)?;
        let category = self.categories.remove(position);
        for video in self.videos.iter_mut() {
            if video.category_id == Some(id) {
                video.category_id = None;
            }
        }
        self.record(
            ActivityAction::CategoryRemoved,
            Some(category.id),
            Some(category.name.clone()),
        );
        Ok(category)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Case-insensitive lookup by name.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Videos matching the given filters, in stored (newest-first) order.
    pub fn videos_filtered(
        &self,
        category_id: Option<Uuid>,
        platform: Option<Platform>,
    ) -> Vec<&VideoEntry> {
        self.videos
            .iter()
            .filter(|v| category_id.map_or(true, |id| v.category_id == Some(id)))
            .filter(|v| platform.map_or(true, |p| v.platform == p))
            .collect()
    }

    /// The most recent activity events, newest first.
    pub fn recent_activity(&self, limit: usize) -> Vec<&ActivityEvent> {
        self.activity.iter().rev().take(limit).collect()
    }

    fn record(&mut self, action: ActivityAction, entity_id: Option<Uuid>, detail: Option<String>) {
        self.activity
            .push(ActivityEvent::new(action, entity_id, detail));
    }
}

pub trait LibraryStore: Send + Sync {
    fn load(&self) -> Library;
    fn save(&self, library: &Library) -> Result<(), Error>;
}

/// A simple in-memory store, mainly for testing.
#[derive(Default)]
pub struct MemoryStore {
    library: std::sync::Mutex<Library>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LibraryStore for MemoryStore {
    fn load(&self) -> Library {
        self.library
            .lock()
            .map(|l| l.clone())
            .unwrap_or_default()
    }

    fn save(&self, library: &Library) -> Result<(), Error> {
        *self
            .library
            .lock()
            .map_err(|e| Error::Store(format!("lock poisoned: {}", e)))? = library.clone();
        Ok(())
    }
}

/// A file-backed JSON store at `<data_dir>/clipshelf/library.json` (Unix:
/// `~/.local/share/clipshelf/library.json`).
pub struct FileStore {
    path: std::path::PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        Self { path }
    }

    pub fn new_default() -> Self {
        let base = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        Self::new(base.join("clipshelf").join("library.json"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LibraryStore for FileStore {
    /// A missing or unreadable document loads as an empty library.
    fn load(&self) -> Library {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
            Err(_) => Library::default(),
        }
    }

    fn save(&self, library: &Library) -> Result<(), Error> {
        let s = serde_json::to_string_pretty(library)?;
        std::fs::write(&self.path, &s).map_err(|e| Error::Store(e.to_string()))?;
        Ok(())
    }
}

/// Load a library, seeding the default categories into one that has never
/// been used.
pub fn load_or_init(store: &dyn LibraryStore) -> Library {
    let library = store.load();
    if library.is_empty() {
        Library::with_default_categories()
    } else {
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_video(url: &str, title: &str, category_id: Option<Uuid>) -> NewVideo {
        NewVideo {
            url: url.to_string(),
            title: Some(title.to_string()),
            thumbnail_url: "placeholder.svg".to_string(),
            category_id,
            ..NewVideo::default()
        }
    }

    #[test]
    fn test_add_video_assigns_id_and_platform() {
        let mut library = Library::default();
        let entry = library.add_video(sample_video(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "A video",
            None,
        ));
        assert_eq!(entry.platform, Platform::Youtube);
        assert_eq!(entry.title, "A video");
        assert_eq!(library.activity.len(), 1);
        assert_eq!(library.activity[0].action, ActivityAction::VideoAdded);
    }

    #[test]
    fn test_add_video_newest_first_and_untitled_fallback() {
        let mut library = Library::default();
        library.add_video(sample_video("https://youtu.be/aaaaaaaaaaa", "First", None));
        let second = NewVideo {
            url: "https://youtu.be/bbbbbbbbbbb".to_string(),
            title: None,
            thumbnail_url: "placeholder.svg".to_string(),
            ..NewVideo::default()
        };
        library.add_video(second);
        assert_eq!(library.videos[0].title, UNTITLED);
        assert_eq!(library.videos[1].title, "First");
    }

    #[test]
    fn test_remove_video_records_activity() {
        let mut library = Library::default();
        let id = library
            .add_video(sample_video("https://youtu.be/aaaaaaaaaaa", "A", None))
            .id;
        library.remove_video(id).unwrap();
        assert!(library.videos.is_empty());
        let last = library.activity.last().unwrap();
        assert_eq!(last.action, ActivityAction::VideoRemoved);
        assert_eq!(last.entity_id, Some(id));

        assert!(matches!(
            library.remove_video(id),
            Err(Error::VideoNotFound)
        ));
    }

    #[test]
    fn test_remove_category_detaches_videos() {
        let mut library = Library::with_default_categories();
        let music = library.category_by_name("music").unwrap().id;
        let id = library
            .add_video(sample_video("https://youtu.be/aaaaaaaaaaa", "A", Some(music)))
            .id;

        library.remove_category(music).unwrap();
        assert!(library.category(music).is_none());
        assert_eq!(library.video(id).unwrap().category_id, None);
    }

    #[test]
    fn test_filtering() {
        let mut library = Library::with_default_categories();
        let music = library.category_by_name("Music").unwrap().id;
        library.add_video(sample_video("https://youtu.be/aaaaaaaaaaa", "A", Some(music)));
        library.add_video(sample_video(
            "https://www.facebook.com/page/videos/123",
            "B",
            None,
        ));

        assert_eq!(library.videos_filtered(None, None).len(), 2);
        assert_eq!(library.videos_filtered(Some(music), None).len(), 1);
        assert_eq!(
            library
                .videos_filtered(None, Some(Platform::Facebook))
                .len(),
            1
        );
        assert_eq!(
            library
                .videos_filtered(Some(music), Some(Platform::Facebook))
                .len(),
            0
        );
    }

    #[test]
    fn test_recent_activity_newest_first() {
        let mut library = Library::default();
        library.add_video(sample_video("https://youtu.be/aaaaaaaaaaa", "A", None));
        library.add_video(sample_video("https://youtu.be/bbbbbbbbbbb", "B", None));
        let recent = library.recent_activity(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].detail.as_deref(), Some("B"));
        assert_eq!(recent[1].detail.as_deref(), Some("A"));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let mut library = load_or_init(&store);
        assert_eq!(library.categories.len(), 3);
        library.add_video(sample_video("https://youtu.be/aaaaaaaaaaa", "A", None));
        store.save(&library).unwrap();

        let reloaded = load_or_init(&store);
        assert_eq!(reloaded.videos.len(), 1);
        assert_eq!(reloaded.videos[0].title, "A");
    }
}
