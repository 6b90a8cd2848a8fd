use crate::dir;
use crate::entry_type::EntryKind;
use crate::error::{Error, Result};
use crate::file;
use crate::metadata::NodeMetadata;

/// Type of node (file or directory), carrying the capability handle.
#[derive(Clone)]
pub enum NodeType {
    File(file::Handle),
    Directory(dir::Handle),
}

/// A named node in the virtual tree: the unit path resolution traffics
/// in. The name is immutable, non-empty, and contains no `/`; it
/// uniquely identifies the node among its siblings.
#[derive(Clone)]
pub struct Node {
    name: String,
    node_type: NodeType,
}

impl Node {
    pub fn file<S: Into<String>>(name: S, handle: file::Handle) -> Self {
        Node {
            name: name.into(),
            node_type: NodeType::File(handle),
        }
    }

    pub fn dir<S: Into<String>>(name: S, handle: dir::Handle) -> Self {
        Node {
            name: name.into(),
            node_type: NodeType::Directory(handle),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        match &self.node_type {
            NodeType::File(_) => EntryKind::File,
            NodeType::Directory(_) => EntryKind::Directory,
        }
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    /// Downcast to a file handle, or fault with NotAFile.
    pub fn as_file(&self) -> Result<file::Handle> {
        match &self.node_type {
            NodeType::File(f) => Ok(f.clone()),
            NodeType::Directory(_) => Err(Error::not_a_file(&self.name)),
        }
    }

    /// Downcast to a directory handle, or fault with NotADirectory.
    pub fn as_dir(&self) -> Result<dir::Handle> {
        match &self.node_type {
            NodeType::Directory(d) => Ok(d.clone()),
            NodeType::File(_) => Err(Error::not_a_directory(&self.name)),
        }
    }

    pub async fn metadata(&self) -> Result<NodeMetadata> {
        match &self.node_type {
            NodeType::File(f) => f.metadata().await,
            NodeType::Directory(d) => d.metadata().await,
        }
    }

    /// chmod-style permission update, dispatched to the handle.
    pub async fn set_mode(&self, mode: u32) -> Result<()> {
        match &self.node_type {
            NodeType::File(f) => f.set_mode(mode).await,
            NodeType::Directory(d) => d.set_mode(mode).await,
        }
    }
}

impl std::fmt::Debug for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeType::File(_) => write!(f, "(file)"),
            NodeType::Directory(_) => write!(f, "(directory)"),
        }
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({:?} {:?})", self.name, self.node_type)
    }
}
