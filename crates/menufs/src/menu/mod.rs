//! The menu-collaborator interface and the adapter that exposes a
//! parsed menu graph as virtual directories and files.
//!
//! The desktop-menu parser itself lives outside this crate; what the
//! core requires from it is the object graph defined here: menus with
//! display names, containing submenus and desktop-entry leaves that
//! reference a backing file readable as raw bytes.

mod directory;

pub use directory::MenuDirectory;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A parsed menu node with a display name and ordered entries.
#[derive(Debug)]
pub struct Menu {
    name: String,
    items: Vec<MenuItem>,
}

/// One item in a menu: a nested submenu or a desktop-entry leaf.
#[derive(Debug)]
pub enum MenuItem {
    Submenu(Arc<Menu>),
    Entry(DesktopEntry),
}

/// A leaf menu entry: a display name plus the desktop file backing it.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    name: String,
    path: PathBuf,
}

impl Menu {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Menu {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn add_submenu(&mut self, menu: Menu) {
        self.items.push(MenuItem::Submenu(Arc::new(menu)));
    }

    pub fn add_entry(&mut self, entry: DesktopEntry) {
        self.items.push(MenuItem::Entry(entry));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl DesktopEntry {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, path: P) -> Self {
        DesktopEntry {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Human-readable display name from the menu definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the backing desktop file on the host filesystem.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The virtual file's name: the basename of the backing file.
    /// None when the backing path has no final component.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_backing_basename() {
        let entry = DesktopEntry::new("Calculator", "/usr/share/applications/calc.desktop");
        assert_eq!(entry.file_name().as_deref(), Some("calc.desktop"));
        assert_eq!(entry.name(), "Calculator");
    }

    #[test]
    fn test_menu_preserves_item_order() {
        let mut menu = Menu::new("Utilities");
        menu.add_entry(DesktopEntry::new("B", "/apps/b.desktop"));
        menu.add_submenu(Menu::new("Accessories"));
        menu.add_entry(DesktopEntry::new("A", "/apps/a.desktop"));

        assert_eq!(menu.items().len(), 3);
        assert!(matches!(menu.items()[1], MenuItem::Submenu(_)));
    }
}
