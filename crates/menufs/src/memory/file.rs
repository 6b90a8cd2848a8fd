use crate::entry_type::EntryKind;
use crate::error::{Error, Result};
use crate::file::{File, Handle, OpenFlags};
use crate::metadata::{Metadata, NodeMetadata};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

const DEFAULT_FILE_MODE: u32 = 0o644;

/// Represents a regular file backed by an immutable in-memory buffer.
///
/// Content is set once at construction and never changes; reads slice
/// the buffer, and only read-only opens are permitted.
pub struct MemoryFile {
    content: Vec<u8>,
    mode: u32,
}

#[async_trait]
impl Metadata for MemoryFile {
    async fn metadata(&self) -> Result<NodeMetadata> {
        Ok(NodeMetadata::snapshot(
            EntryKind::File,
            self.mode,
            1,
            Some(self.content.len() as u64),
        ))
    }

    async fn set_mode(&mut self, mode: u32) -> Result<()> {
        self.mode = mode;
        Ok(())
    }
}

#[async_trait]
impl File for MemoryFile {
    async fn open(&self, flags: OpenFlags) -> Result<()> {
        // Read-only filesystem: any write intent is denied. The facade
        // fills in the request path.
        if !flags.is_read_only() {
            return Err(Error::access_denied(""));
        }
        Ok(())
    }

    async fn read_at(&self, size: u64, offset: i64) -> Result<Vec<u8>> {
        if offset < 0 {
            return Err(Error::invalid_argument(format!(
                "negative read offset {}",
                offset
            )));
        }

        let len = self.content.len();
        if offset as u64 >= len as u64 {
            // Read past end of file is an empty read, not an error.
            return Ok(Vec::new());
        }

        let start = offset as usize;
        let count = (size.min(len as u64) as usize).min(len - start);
        Ok(self.content[start..start + count].to_vec())
    }
}

impl MemoryFile {
    pub fn new<T: AsRef<[u8]>>(content: T) -> Self {
        MemoryFile {
            content: content.as_ref().to_vec(),
            mode: DEFAULT_FILE_MODE,
        }
    }

    pub fn with_mode<T: AsRef<[u8]>>(content: T, mode: u32) -> Self {
        MemoryFile {
            content: content.as_ref().to_vec(),
            mode,
        }
    }

    /// Create a new MemoryFile handle with the given content
    pub fn new_handle<T: AsRef<[u8]>>(content: T) -> Handle {
        Handle::new(Arc::new(Mutex::new(Box::new(Self::new(content)))))
    }

    /// Create a handle with explicit permission bits
    pub fn new_handle_with_mode<T: AsRef<[u8]>>(content: T, mode: u32) -> Handle {
        Handle::new(Arc::new(Mutex::new(Box::new(Self::with_mode(
            content, mode,
        )))))
    }
}
