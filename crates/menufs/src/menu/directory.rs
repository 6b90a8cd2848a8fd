use crate::dir::{DOT_LINKS, Directory, Handle};
use crate::entry_type::EntryKind;
use crate::error::Result;
use crate::memory::MemoryFile;
use crate::menu::{Menu, MenuItem};
use crate::metadata::{Metadata, NodeMetadata};
use crate::node::Node;
use async_trait::async_trait;
use diagnostics::log_warn;
use futures::stream::{self, Stream};
use std::collections::BTreeSet;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Mutex;

const MENU_DIR_MODE: u32 = 0o755;

/// Desktop entries are exposed with executable-looking permissions.
const MENU_ENTRY_MODE: u32 = 0o755;

/// A directory backed by one node of the parsed menu graph.
///
/// One Directory per menu, one file per desktop-entry leaf, named after
/// the basename of its backing file and carrying its verbatim bytes.
/// Children are recomputed from the menu on every query; nothing is
/// cached between calls. A leaf whose backing file cannot be read is
/// omitted from the directory and logged, never failing the listing.
pub struct MenuDirectory {
    menu: Arc<Menu>,
    mode: u32,
}

impl MenuDirectory {
    pub fn new(menu: Arc<Menu>) -> Self {
        MenuDirectory {
            menu,
            mode: MENU_DIR_MODE,
        }
    }

    pub fn new_handle(menu: Arc<Menu>) -> Handle {
        Handle::new(Arc::new(Mutex::new(Box::new(Self::new(menu)))))
    }

    /// The virtual name one menu item answers to.
    fn item_name(item: &MenuItem) -> Option<String> {
        match item {
            MenuItem::Submenu(sub) => Some(sub.name().to_string()),
            MenuItem::Entry(entry) => {
                let name = entry.file_name();
                if name.is_none() {
                    log_warn!(
                        "desktop entry {display} has no backing file name",
                        display: entry.name().to_string()
                    );
                }
                name
            }
        }
    }

    /// Build the virtual node for one menu item. Returns None when the
    /// item has no usable name or its backing file is unreadable.
    fn build_node(item: &MenuItem) -> Option<Node> {
        match item {
            MenuItem::Submenu(sub) => Some(Node::dir(
                sub.name(),
                MenuDirectory::new_handle(sub.clone()),
            )),
            MenuItem::Entry(entry) => {
                let name = Self::item_name(item)?;
                match std::fs::read(entry.path()) {
                    Ok(content) => Some(Node::file(
                        name,
                        MemoryFile::new_handle_with_mode(content, MENU_ENTRY_MODE),
                    )),
                    Err(e) => {
                        log_warn!(
                            "skipping unreadable desktop entry {path}: {error}",
                            path: entry.path().display().to_string(),
                            error: e.to_string()
                        );
                        None
                    }
                }
            }
        }
    }
}

#[async_trait]
impl Metadata for MenuDirectory {
    async fn metadata(&self) -> Result<NodeMetadata> {
        // Count distinct child names. A leaf whose backing file later
        // turns out to be unreadable still counts here; the link count
        // is advisory, not load-bearing.
        let names: BTreeSet<_> = self
            .menu
            .items()
            .iter()
            .filter_map(Self::item_name)
            .collect();

        Ok(NodeMetadata::snapshot(
            EntryKind::Directory,
            self.mode,
            DOT_LINKS + names.len() as u32,
            None,
        ))
    }

    async fn set_mode(&mut self, mode: u32) -> Result<()> {
        self.mode = mode;
        Ok(())
    }
}

#[async_trait]
impl Directory for MenuDirectory {
    async fn get(&self, name: &str) -> Result<Option<Node>> {
        // Scan back to front so that on duplicate names the last item
        // wins, matching map construction order in a full listing. An
        // item that fails to load falls through to earlier duplicates,
        // again as the listing map would.
        let node = self
            .menu
            .items()
            .iter()
            .rev()
            .filter(|item| Self::item_name(item).as_deref() == Some(name))
            .find_map(Self::build_node);

        Ok(node)
    }

    async fn entries(&self) -> Result<Pin<Box<dyn Stream<Item = Result<Node>> + Send>>> {
        let items: Vec<_> = self
            .menu
            .items()
            .iter()
            .filter_map(Self::build_node)
            .map(Ok)
            .collect();
        Ok(Box::pin(stream::iter(items)))
    }
}
