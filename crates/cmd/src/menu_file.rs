//! JSON menu descriptions.
//!
//! The real desktop-menu parser is an external collaborator; this
//! loader is the stand-in that lets the CLI build the same in-memory
//! menu graph from a declarative file:
//!
//! ```json
//! {
//!   "name": "Applications",
//!   "menus": [
//!     { "name": "Utilities",
//!       "entries": [ { "name": "Calculator", "file": "/usr/share/applications/calc.desktop" } ] }
//!   ],
//!   "entries": []
//! }
//! ```

use anyhow::{Context, Result};
use menufs::{DesktopEntry, Menu};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One menu node of the description file.
#[derive(Debug, Deserialize)]
pub struct MenuDescription {
    pub name: String,

    /// Nested submenus, in listing order
    #[serde(default)]
    pub menus: Vec<MenuDescription>,

    /// Desktop-entry leaves, in listing order
    #[serde(default)]
    pub entries: Vec<EntryDescription>,
}

/// One desktop-entry leaf: display name plus backing file.
#[derive(Debug, Deserialize)]
pub struct EntryDescription {
    pub name: String,
    pub file: PathBuf,
}

/// Load a menu description file and build the menu graph from it.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Arc<Menu>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read menu description '{}'", path.display()))?;
    let description: MenuDescription = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse menu description '{}'", path.display()))?;
    Ok(Arc::new(build(description)))
}

fn build(description: MenuDescription) -> Menu {
    let mut menu = Menu::new(description.name);
    for sub in description.menus {
        menu.add_submenu(build(sub));
    }
    for entry in description.entries {
        menu.add_entry(DesktopEntry::new(entry.name, entry.file));
    }
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use menufs::MenuItem;

    #[test]
    fn test_parse_nested_description() {
        let text = r#"{
            "name": "Applications",
            "menus": [
                {
                    "name": "Utilities",
                    "entries": [
                        { "name": "Calculator", "file": "/apps/calc.desktop" }
                    ]
                }
            ],
            "entries": [
                { "name": "Browser", "file": "/apps/browser.desktop" }
            ]
        }"#;

        let description: MenuDescription = serde_json::from_str(text).unwrap();
        let menu = build(description);

        assert_eq!(menu.name(), "Applications");
        assert_eq!(menu.items().len(), 2);
        match &menu.items()[0] {
            MenuItem::Submenu(sub) => assert_eq!(sub.name(), "Utilities"),
            other => panic!("expected submenu, got {:?}", other),
        }
        match &menu.items()[1] {
            MenuItem::Entry(entry) => {
                assert_eq!(entry.name(), "Browser");
                assert_eq!(entry.file_name().as_deref(), Some("browser.desktop"));
            }
            other => panic!("expected entry, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let description: MenuDescription =
            serde_json::from_str(r#"{ "name": "Applications" }"#).unwrap();
        let menu = build(description);
        assert!(menu.items().is_empty());
    }
}
