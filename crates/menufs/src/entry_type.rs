/// Node type identifiers for directory entries and metadata.
///
/// This is the closed set of node variants the tree can contain. New
/// kinds (symlinks, for instance) are added here and in the capability
/// trait implementations, never by ad hoc probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file entry
    File,
    /// Directory entry
    Directory,
}

// POSIX file-type bits, OR'd with permission bits in st_mode.
const S_IFREG: u32 = 0o100000;
const S_IFDIR: u32 = 0o040000;

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }

    /// The stat type bits for this kind of node.
    pub fn type_bits(&self) -> u32 {
        match self {
            EntryKind::File => S_IFREG,
            EntryKind::Directory => S_IFDIR,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(EntryKind::File),
            "directory" => Ok(EntryKind::Directory),
            other => Err(format!("Unknown entry kind: {}", other)),
        }
    }
}
