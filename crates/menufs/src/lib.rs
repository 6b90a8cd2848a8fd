//! menufs core: a read-only virtual filesystem over a parsed
//! application-menu tree.
//!
//! The crate unifies two hierarchies behind one polymorphic contract:
//! an abstract entity tree (the [`File`] and [`Directory`] capability
//! traits plus the closed [`NodeType`] tag set) and the concrete menu
//! graph (the [`menu`] module), bridged by [`menu::MenuDirectory`].
//! Everything is computed on demand from the live menu tree; there is
//! no persistent index, no caching, and no per-request state.
//!
//! The external driver calls the four operations on [`MenuFs`] with
//! normalized absolute paths; faults translate to errnos via
//! [`Error::errno`].

pub mod dir;
pub mod entry_type;
pub mod error;
pub mod file;
pub mod fs;
pub mod memory;
pub mod menu;
pub mod metadata;
pub mod node;
pub mod path;

#[cfg(test)]
mod tests;

pub use dir::Directory;
pub use entry_type::EntryKind;
pub use error::{Error, Result};
pub use file::{File, OpenFlags};
pub use fs::MenuFs;
pub use memory::{MemoryDirectory, MemoryFile};
pub use menu::{DesktopEntry, Menu, MenuDirectory, MenuItem};
pub use metadata::{Metadata, NodeMetadata};
pub use node::{Node, NodeType};
