use anyhow::Result;
use menufs::MenuFs;
use std::io::{self, Write};

/// List the entries of a directory in the virtual tree.
pub async fn list_command(fs: &MenuFs, path: &str) -> Result<()> {
    let names = fs.list(path).await?;
    let mut out = io::stdout();
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
