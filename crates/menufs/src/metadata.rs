use crate::entry_type::EntryKind;
use crate::error::Result;
use async_trait::async_trait;
use std::time::{SystemTime, UNIX_EPOCH};

/// POSIX-style attribute snapshot for a node.
///
/// Nothing here is persisted. Every query synthesizes a fresh snapshot,
/// and all three timestamps are stamped "now" at snapshot time: the
/// backing menu data carries no meaningful timestamps of its own.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NodeMetadata {
    /// Entry kind (file or directory)
    pub kind: EntryKind,

    /// Permission bits only (type bits are derived from `kind`)
    pub mode: u32,

    /// Link count (directories report 2 + child count, files report 1)
    pub nlink: u32,

    /// File size in bytes (None for directories; the driver substitutes
    /// its platform default)
    pub size: Option<u64>,

    pub atime: i64,
    pub mtime: i64,
    pub ctime: i64,
}

impl NodeMetadata {
    /// Build a snapshot stamped with the current time.
    pub fn snapshot(kind: EntryKind, mode: u32, nlink: u32, size: Option<u64>) -> Self {
        let now = now_secs();
        NodeMetadata {
            kind,
            mode,
            nlink,
            size,
            atime: now,
            mtime: now,
            ctime: now,
        }
    }

    /// Full st_mode value: type bits OR permission bits.
    pub fn mode_bits(&self) -> u32 {
        self.kind.type_bits() | self.mode
    }
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Common metadata interface for all node variants.
#[async_trait]
pub trait Metadata: Send + Sync {
    /// Get a fresh metadata snapshot for this node.
    async fn metadata(&self) -> Result<NodeMetadata>;

    /// chmod-style permission update. Serialized by the owning handle's
    /// mutex, so concurrent snapshots never observe a torn value.
    async fn set_mode(&mut self, mode: u32) -> Result<()>;
}
