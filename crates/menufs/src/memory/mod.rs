//! In-memory node implementations: the fixed-content regular file and
//! the map-backed directory. These back the synthetic root and every
//! leaf the menu adapter produces, and serve as test doubles.

mod directory;
mod file;

pub use directory::MemoryDirectory;
pub use file::MemoryFile;
