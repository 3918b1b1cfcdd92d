//! Tests for the filesystem session store.

use tempfile::TempDir;
use vitrine_storage::{FileSystemStore, MemoryStore, SessionStore, Slot};

#[tokio::test]
async fn test_write_and_read() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    let document = r#"[{"id":"1714-0","day":"Lundi"}]"#;
    store.write(Slot::Posts, document).await.unwrap();

    let read_back = store.read(Slot::Posts).await.unwrap();
    assert_eq!(read_back.as_deref(), Some(document));
}

#[tokio::test]
async fn test_missing_slot_reads_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    assert!(store.read(Slot::Intelligence).await.unwrap().is_none());
}

#[tokio::test]
async fn test_overwrite_replaces_document() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.write(Slot::Posts, "[1]").await.unwrap();
    store.write(Slot::Posts, "[1,2]").await.unwrap();

    assert_eq!(store.read(Slot::Posts).await.unwrap().as_deref(), Some("[1,2]"));
}

#[tokio::test]
async fn test_slots_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.write(Slot::Posts, "posts-doc").await.unwrap();
    store.write(Slot::Intelligence, "veille-doc").await.unwrap();

    assert_eq!(
        store.read(Slot::Posts).await.unwrap().as_deref(),
        Some("posts-doc")
    );
    assert_eq!(
        store.read(Slot::Intelligence).await.unwrap().as_deref(),
        Some("veille-doc")
    );
}

#[tokio::test]
async fn test_clear_removes_document() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.write(Slot::Posts, "[]").await.unwrap();
    store.clear(Slot::Posts).await.unwrap();

    assert!(store.read(Slot::Posts).await.unwrap().is_none());

    // Clearing again is a no-op
    store.clear(Slot::Posts).await.unwrap();
}

#[tokio::test]
async fn test_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileSystemStore::new(temp_dir.path()).unwrap();
        store.write(Slot::Posts, "persisted").await.unwrap();
    }

    let reopened = FileSystemStore::new(temp_dir.path()).unwrap();
    assert_eq!(
        reopened.read(Slot::Posts).await.unwrap().as_deref(),
        Some("persisted")
    );
}

#[tokio::test]
async fn test_memory_store_round_trip() {
    let store = MemoryStore::new();

    store.write(Slot::Intelligence, "doc").await.unwrap();
    assert_eq!(
        store.read(Slot::Intelligence).await.unwrap().as_deref(),
        Some("doc")
    );

    store.clear(Slot::Intelligence).await.unwrap();
    assert!(store.read(Slot::Intelligence).await.unwrap().is_none());
}
