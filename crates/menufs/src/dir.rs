use crate::error::Result;
use crate::metadata::NodeMetadata;
use crate::node::Node;
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::Stream;
use std::collections::BTreeMap;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Link count contribution of `.` and `..`; every directory reports
/// `2 + child count`.
pub const DOT_LINKS: u32 = 2;

/// Represents a directory containing named child entries.
///
/// Children are recomputed from the backing source on every call, never
/// cached across queries. The stream returned by `entries` is finite
/// and owns its data, so a caller may consume it after releasing the
/// directory handle.
#[async_trait]
pub trait Directory: crate::metadata::Metadata {
    /// Look up one child by name. When the backing source produces
    /// several children with the same name, the last one wins.
    async fn get(&self, name: &str) -> Result<Option<Node>>;

    /// Enumerate child nodes in the backing source's order.
    async fn entries(&self) -> Result<Pin<Box<dyn Stream<Item = Result<Node>> + Send>>>;
}

/// A handle for a refcounted directory.
#[derive(Clone)]
pub struct Handle(Arc<Mutex<Box<dyn Directory>>>);

impl Handle {
    pub fn new(d: Arc<Mutex<Box<dyn Directory>>>) -> Self {
        Self(d)
    }

    pub async fn get(&self, name: &str) -> Result<Option<Node>> {
        self.0.lock().await.get(name).await
    }

    pub async fn metadata(&self) -> Result<NodeMetadata> {
        self.0.lock().await.metadata().await
    }

    pub async fn set_mode(&self, mode: u32) -> Result<()> {
        self.0.lock().await.set_mode(mode).await
    }

    /// Materialize the name-to-child map for this directory.
    ///
    /// Duplicate names collapse silently, later entries overwriting
    /// earlier ones, matching plain-map construction.
    pub async fn children(&self) -> Result<BTreeMap<String, Node>> {
        let mut stream = {
            let guard = self.0.lock().await;
            guard.entries().await?
        };

        let mut children = BTreeMap::new();
        while let Some(node) = stream.next().await {
            let node = node?;
            children.insert(node.name().to_string(), node);
        }
        Ok(children)
    }

    /// Names for a directory listing: `.` and `..` first, then the
    /// children sorted by name. No child ever answers to `.` or `..`.
    pub async fn listing_names(&self) -> Result<Vec<String>> {
        let mut names = vec![".".to_string(), "..".to_string()];
        names.extend(self.children().await?.into_keys());
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::{MemoryDirectory, MemoryFile};
    use crate::node::Node;

    #[test]
    fn test_listing_names_prepends_dot_entries() {
        tokio_test::block_on(async {
            let mut dir = MemoryDirectory::new();
            dir.insert(Node::file("zeta", MemoryFile::new_handle(b"z")))
                .unwrap();
            dir.insert(Node::file("alpha", MemoryFile::new_handle(b"a")))
                .unwrap();
            let handle = dir.into_handle();

            let names = handle.listing_names().await.unwrap();
            assert_eq!(names, vec![".", "..", "alpha", "zeta"]);
        });
    }

    #[test]
    fn test_empty_directory_lists_only_dot_entries() {
        tokio_test::block_on(async {
            let handle = MemoryDirectory::new().into_handle();
            let names = handle.listing_names().await.unwrap();
            assert_eq!(names, vec![".", ".."]);
        });
    }
}
