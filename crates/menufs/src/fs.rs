use crate::dir;
use crate::error::{Error, Result};
use crate::file::OpenFlags;
use crate::memory::MemoryDirectory;
use crate::menu::{Menu, MenuDirectory};
use crate::metadata::NodeMetadata;
use crate::node::{Node, NodeType};
use crate::path;
use diagnostics::log_debug;
use std::sync::Arc;

/// Name of the single top-level directory bound to the parsed menu.
const APPLICATIONS: &str = "Applications";

/// The filesystem facade: the four operations the external driver
/// dispatches, served from one shared root directory.
///
/// Requests are stateless. `open` retains no descriptor, and every
/// `read` re-resolves its path from the root, so concurrent callers
/// share nothing but the immutable tree structure.
pub struct MenuFs {
    root: dir::Handle,
}

impl MenuFs {
    /// Build the virtual tree: a synthetic root containing exactly one
    /// child, an `Applications` directory bound to the top-level menu.
    pub fn new(menu: Arc<Menu>) -> Result<Self> {
        let mut root = MemoryDirectory::new();
        root.insert(Node::dir(APPLICATIONS, MenuDirectory::new_handle(menu)))?;
        Ok(MenuFs {
            root: root.into_handle(),
        })
    }

    /// The shared root directory handle.
    pub fn root(&self) -> dir::Handle {
        self.root.clone()
    }

    /// Walk `path` from the root through successive child lookups.
    ///
    /// A missing component, or an attempt to descend through a file,
    /// is NotFound carrying the full requested path.
    async fn resolve(&self, path: &str) -> Result<Node> {
        let mut node = Node::dir("/", self.root.clone());
        for component in path::split(path) {
            let dir = node.as_dir().map_err(|_| Error::not_found(path))?;
            node = dir
                .get(component)
                .await?
                .ok_or_else(|| Error::not_found(path))?;
        }
        Ok(node)
    }

    /// Metadata snapshot for the node at `path`.
    pub async fn attributes(&self, path: &str) -> Result<NodeMetadata> {
        log_debug!("attributes {path}", path: path.to_string());
        self.resolve(path).await?.metadata().await
    }

    /// Names in the directory at `path`: `.`, `..`, then the children.
    ///
    /// An unresolvable or non-directory path yields no entries rather
    /// than a fault; the driver turns an empty listing into nothing.
    pub async fn list(&self, path: &str) -> Result<Vec<String>> {
        log_debug!("list {path}", path: path.to_string());
        let node = match self.resolve(path).await {
            Ok(node) => node,
            Err(Error::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        match node.as_dir() {
            Ok(dir) => dir.listing_names().await,
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Check an open request against the node at `path`. Anything other
    /// than read-only access is denied; no handle state is created.
    pub async fn open(&self, path: &str, flags: OpenFlags) -> Result<()> {
        log_debug!("open {path} flags={flags}", path: path.to_string(), flags: flags.raw());
        let node = self.resolve(path).await?;
        match node.node_type() {
            NodeType::File(file) => file.open(flags).await.map_err(|e| e.with_path(path)),
            NodeType::Directory(_) => Err(Error::unsupported(format!(
                "open not supported on directory: {}",
                path
            ))),
        }
    }

    /// Read up to `size` bytes at `offset` from the file at `path`.
    pub async fn read(&self, path: &str, size: u64, offset: i64) -> Result<Vec<u8>> {
        log_debug!(
            "read {path} size={size} offset={offset}",
            path: path.to_string(),
            size: size,
            offset: offset
        );
        let node = self.resolve(path).await?;
        match node.node_type() {
            NodeType::File(file) => file
                .read_at(size, offset)
                .await
                .map_err(|e| e.with_path(path)),
            NodeType::Directory(_) => Err(Error::unsupported(format!(
                "read not supported on directory: {}",
                path
            ))),
        }
    }
}
