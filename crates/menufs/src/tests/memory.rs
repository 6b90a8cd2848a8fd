use crate::entry_type::EntryKind;
use crate::error::Error;
use crate::file::OpenFlags;
use crate::memory::{MemoryDirectory, MemoryFile};
use crate::node::Node;

#[tokio::test]
async fn test_file_metadata_defaults() {
    let file = MemoryFile::new_handle(b"hello");
    let md = file.metadata().await.unwrap();

    assert_eq!(md.kind, EntryKind::File);
    assert_eq!(md.mode, 0o644);
    assert_eq!(md.nlink, 1);
    assert_eq!(md.size, Some(5));
    assert_eq!(md.mode_bits(), 0o100644);
}

#[tokio::test]
async fn test_file_chmod_visible_in_next_snapshot() {
    let file = MemoryFile::new_handle(b"x");
    file.set_mode(0o600).await.unwrap();

    let md = file.metadata().await.unwrap();
    assert_eq!(md.mode, 0o600);
    assert_eq!(md.mode_bits(), 0o100600);
}

#[tokio::test]
async fn test_open_modes() {
    let file = MemoryFile::new_handle(b"content");

    file.open(OpenFlags::read_only()).await.unwrap();

    let denied = file.open(OpenFlags::write_only()).await;
    assert_eq!(denied, Err(Error::access_denied("")));

    let denied = file.open(OpenFlags::read_write()).await;
    assert_eq!(denied, Err(Error::access_denied("")));
}

#[tokio::test]
async fn test_read_slicing_composes() {
    let content = b"The quick brown fox jumps over the lazy dog";
    let file = MemoryFile::new_handle(content);

    let whole = file.read_at(content.len() as u64, 0).await.unwrap();
    assert_eq!(whole, content);

    let head = file.read_at(10, 0).await.unwrap();
    let tail = file
        .read_at((content.len() - 10) as u64, 10)
        .await
        .unwrap();
    let mut joined = head.clone();
    joined.extend_from_slice(&tail);
    assert_eq!(joined, content);
}

#[tokio::test]
async fn test_read_short_and_past_eof() {
    let file = MemoryFile::new_handle(b"abcdef");

    // Asking for more than remains returns exactly what remains
    assert_eq!(file.read_at(100, 4).await.unwrap(), b"ef");

    // Reads at or past the end are empty, not errors
    assert!(file.read_at(10, 6).await.unwrap().is_empty());
    assert!(file.read_at(10, 1000).await.unwrap().is_empty());

    // Zero-size read is empty
    assert!(file.read_at(0, 2).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_read_negative_offset_faults() {
    let file = MemoryFile::new_handle(b"abcdef");
    let result = file.read_at(4, -1).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[tokio::test]
async fn test_empty_file_reads_empty() {
    let file = MemoryFile::new_handle(b"");
    assert!(file.read_at(16, 0).await.unwrap().is_empty());

    let md = file.metadata().await.unwrap();
    assert_eq!(md.size, Some(0));
}

#[tokio::test]
async fn test_directory_metadata_counts_children() {
    let mut dir = MemoryDirectory::new();
    dir.insert(Node::file("a", MemoryFile::new_handle(b"a")))
        .unwrap();
    dir.insert(Node::file("b", MemoryFile::new_handle(b"b")))
        .unwrap();
    let handle = dir.into_handle();

    let md = handle.metadata().await.unwrap();
    assert_eq!(md.kind, EntryKind::Directory);
    assert_eq!(md.mode, 0o755);
    assert_eq!(md.nlink, 4); // . and .. plus two children
    assert_eq!(md.size, None);
    assert_eq!(md.mode_bits(), 0o040755);
}

#[tokio::test]
async fn test_directory_rejects_duplicate_insert() {
    let mut dir = MemoryDirectory::new();
    dir.insert(Node::file("dup", MemoryFile::new_handle(b"1")))
        .unwrap();
    let result = dir.insert(Node::file("dup", MemoryFile::new_handle(b"2")));
    assert_eq!(result, Err(Error::already_exists("dup")));
}

#[tokio::test]
async fn test_directory_lookup() {
    let mut dir = MemoryDirectory::new();
    dir.insert(Node::file("hello.txt", MemoryFile::new_handle(b"hi")))
        .unwrap();
    let handle = dir.into_handle();

    let node = handle.get("hello.txt").await.unwrap().unwrap();
    assert_eq!(node.kind(), EntryKind::File);
    assert_eq!(node.name(), "hello.txt");

    assert!(handle.get("missing").await.unwrap().is_none());
}
