use crate::dir::{DOT_LINKS, Directory, Handle};
use crate::entry_type::EntryKind;
use crate::error::{Error, Result};
use crate::metadata::{Metadata, NodeMetadata};
use crate::node::Node;
use async_trait::async_trait;
use futures::stream::{self, Stream};
use std::collections::BTreeMap;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Mutex;

const DEFAULT_DIR_MODE: u32 = 0o755;

/// Represents a directory backed by a BTreeMap of named children.
///
/// Used for the synthetic root of the virtual tree and as a test
/// double. Children are fixed at construction; the read-only contract
/// means nothing inserts after the handle is shared.
pub struct MemoryDirectory {
    entries: BTreeMap<String, Node>,
    mode: u32,
}

#[async_trait]
impl Metadata for MemoryDirectory {
    async fn metadata(&self) -> Result<NodeMetadata> {
        Ok(NodeMetadata::snapshot(
            EntryKind::Directory,
            self.mode,
            DOT_LINKS + self.entries.len() as u32,
            None,
        ))
    }

    async fn set_mode(&mut self, mode: u32) -> Result<()> {
        self.mode = mode;
        Ok(())
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn get(&self, name: &str) -> Result<Option<Node>> {
        Ok(self.entries.get(name).cloned())
    }

    async fn entries(&self) -> Result<Pin<Box<dyn Stream<Item = Result<Node>> + Send>>> {
        let items: Vec<_> = self.entries.values().cloned().map(Ok).collect();
        Ok(Box::pin(stream::iter(items)))
    }
}

impl MemoryDirectory {
    pub fn new() -> Self {
        MemoryDirectory {
            entries: BTreeMap::new(),
            mode: DEFAULT_DIR_MODE,
        }
    }

    /// Add a child before the directory is turned into a shared handle.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        let name = node.name().to_string();
        if self.entries.insert(name.clone(), node).is_some() {
            return Err(Error::already_exists(&name));
        }
        Ok(())
    }

    pub fn into_handle(self) -> Handle {
        Handle::new(Arc::new(Mutex::new(Box::new(self))))
    }

    /// Create an empty MemoryDirectory handle
    pub fn new_handle() -> Handle {
        Self::new().into_handle()
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}
