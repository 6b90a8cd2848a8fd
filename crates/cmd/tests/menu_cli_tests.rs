//! End-to-end tests: menu description file -> menu graph -> virtual
//! tree -> CLI command handlers.

use cmd::{commands, menu_file};
use menufs::{EntryKind, MenuFs, OpenFlags};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(tmp: &TempDir) -> PathBuf {
    let calc = tmp.path().join("calc.desktop");
    let term = tmp.path().join("term.desktop");
    std::fs::write(&calc, b"[Desktop Entry]\nName=Calculator\n").unwrap();
    std::fs::write(&term, b"[Desktop Entry]\nName=Terminal\n").unwrap();

    let description = serde_json::json!({
        "name": "Applications",
        "menus": [
            {
                "name": "Utilities",
                "entries": [
                    { "name": "Calculator", "file": calc },
                    { "name": "Terminal", "file": term }
                ]
            }
        ]
    });

    let path = tmp.path().join("menu.json");
    std::fs::write(&path, serde_json::to_vec(&description).unwrap()).unwrap();
    path
}

#[tokio::test]
async fn test_description_to_virtual_tree() {
    let tmp = TempDir::new().unwrap();
    let description = write_fixture(&tmp);

    let menu = menu_file::load(&description).unwrap();
    let fs = MenuFs::new(menu).unwrap();

    assert_eq!(fs.list("/").await.unwrap(), vec![".", "..", "Applications"]);
    assert_eq!(
        fs.list("/Applications").await.unwrap(),
        vec![".", "..", "Utilities"]
    );
    assert_eq!(
        fs.list("/Applications/Utilities").await.unwrap(),
        vec![".", "..", "calc.desktop", "term.desktop"]
    );

    let md = fs
        .attributes("/Applications/Utilities/calc.desktop")
        .await
        .unwrap();
    assert_eq!(md.kind, EntryKind::File);
    assert_eq!(md.mode, 0o755);

    fs.open(
        "/Applications/Utilities/calc.desktop",
        OpenFlags::read_only(),
    )
    .await
    .unwrap();

    let content = fs
        .read("/Applications/Utilities/calc.desktop", 1024, 0)
        .await
        .unwrap();
    assert_eq!(content, b"[Desktop Entry]\nName=Calculator\n");
}

#[tokio::test]
async fn test_command_handlers_run_clean() {
    let tmp = TempDir::new().unwrap();
    let description = write_fixture(&tmp);

    let menu = menu_file::load(&description).unwrap();
    let fs = MenuFs::new(menu).unwrap();

    commands::list_command(&fs, "/Applications/Utilities")
        .await
        .unwrap();
    commands::cat_command(&fs, "/Applications/Utilities/term.desktop")
        .await
        .unwrap();
    commands::stat_command(&fs, "/Applications", false)
        .await
        .unwrap();
    commands::stat_command(&fs, "/Applications/Utilities/calc.desktop", true)
        .await
        .unwrap();
    commands::tree_command(&fs).await.unwrap();
}

#[tokio::test]
async fn test_missing_description_file() {
    let tmp = TempDir::new().unwrap();
    let result = menu_file::load(tmp.path().join("absent.json"));
    assert!(result.is_err());
}

#[tokio::test]
async fn test_malformed_description_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    std::fs::write(&path, b"{ not json").unwrap();
    assert!(menu_file::load(&path).is_err());
}
