use clipshelf_core::store::{load_or_init, FileStore, Library, LibraryStore};
use clipshelf_core::NewVideo;

fn sample(url: &str, title: &str) -> NewVideo {
    NewVideo {
        url: url.to_string(),
        title: Some(title.to_string()),
        thumbnail_url: "placeholder.svg".to_string(),
        ..NewVideo::default()
    }
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("library.json"));

    let mut library = load_or_init(&store);
    assert_eq!(library.categories.len(), 3, "new library gets default categories");

    let music = library.category_by_name("Music").unwrap().id;
    let entry = library.add_video(NewVideo {
        category_id: Some(music),
        ..sample("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "A video")
    });
    let entry_id = entry.id;
    store.save(&library).unwrap();

    let reloaded = store.load();
    assert_eq!(reloaded.videos.len(), 1);
    let video = reloaded.video(entry_id).unwrap();
    assert_eq!(video.title, "A video");
    assert_eq!(video.category_id, Some(music));
    assert_eq!(video.url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(reloaded.activity.len(), library.activity.len());
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("does-not-exist.json"));
    let library = store.load();
    assert!(library.is_empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let store = FileStore::new(&path);
    let library = store.load();
    assert!(library.is_empty());

    // And the store recovers on the next save
    let mut library = load_or_init(&store);
    library.add_video(sample("https://youtu.be/aaaaaaaaaaa", "A"));
    store.save(&library).unwrap();
    assert_eq!(store.load().videos.len(), 1);
}

#[test]
fn test_seeding_only_touches_untouched_libraries() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("library.json"));

    let mut library = load_or_init(&store);
    for id in library
        .categories
        .iter()
        .map(|c| c.id)
        .collect::<Vec<_>>()
    {
        library.remove_category(id).unwrap();
    }
    store.save(&library).unwrap();

    // Deleted categories stay deleted: removal left activity behind, so the
    // library is no longer "untouched"
    let reloaded = load_or_init(&store);
    assert!(reloaded.categories.is_empty());
}
