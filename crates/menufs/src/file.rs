use crate::error::Result;
use crate::metadata::{Metadata, NodeMetadata};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

// POSIX access-mode values as the driver passes them.
pub const O_RDONLY: u32 = 0;
pub const O_WRONLY: u32 = 1;
pub const O_RDWR: u32 = 2;
pub const O_ACCMODE: u32 = 3;

/// Access-mode flags for an open request.
///
/// Only the access-mode bits matter to this filesystem; everything else
/// in the raw flag word is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFlags(u32);

impl OpenFlags {
    pub fn new(raw: u32) -> Self {
        OpenFlags(raw)
    }

    pub fn read_only() -> Self {
        OpenFlags(O_RDONLY)
    }

    pub fn write_only() -> Self {
        OpenFlags(O_WRONLY)
    }

    pub fn read_write() -> Self {
        OpenFlags(O_RDWR)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    pub fn access_mode(&self) -> u32 {
        self.0 & O_ACCMODE
    }

    pub fn is_read_only(&self) -> bool {
        self.access_mode() == O_RDONLY
    }
}

/// Represents a regular file with readable binary content.
#[async_trait]
pub trait File: Metadata {
    /// Validate the requested access mode. Succeeding has no observable
    /// effect: no descriptor state is retained, and every subsequent
    /// read stands on its own.
    async fn open(&self, flags: OpenFlags) -> Result<()>;

    /// Read up to `size` bytes starting at `offset`. A short read or an
    /// empty result past end-of-file is not an error.
    async fn read_at(&self, size: u64, offset: i64) -> Result<Vec<u8>>;
}

/// A handle for a refcounted file.
#[derive(Clone)]
pub struct Handle(Arc<Mutex<Box<dyn File>>>);

impl Handle {
    pub fn new(f: Arc<Mutex<Box<dyn File>>>) -> Self {
        Self(f)
    }

    pub async fn open(&self, flags: OpenFlags) -> Result<()> {
        self.0.lock().await.open(flags).await
    }

    pub async fn read_at(&self, size: u64, offset: i64) -> Result<Vec<u8>> {
        self.0.lock().await.read_at(size, offset).await
    }

    pub async fn metadata(&self) -> Result<NodeMetadata> {
        self.0.lock().await.metadata().await
    }

    pub async fn set_mode(&self, mode: u32) -> Result<()> {
        self.0.lock().await.set_mode(mode).await
    }
}
