use anyhow::Result;
use menufs::MenuFs;
use std::io::{self, Write};

/// Show the metadata snapshot for a path, optionally as JSON.
pub async fn stat_command(fs: &MenuFs, path: &str, json: bool) -> Result<()> {
    let md = fs.attributes(path).await?;
    let mut out = io::stdout();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&md)?)?;
        return Ok(());
    }

    writeln!(out, "  File: {}", path)?;
    writeln!(out, "  Kind: {}", md.kind)?;
    writeln!(out, "  Mode: {:06o}", md.mode_bits())?;
    writeln!(out, " Links: {}", md.nlink)?;
    match md.size {
        Some(size) => writeln!(out, "  Size: {}", size)?,
        None => writeln!(out, "  Size: -")?,
    }
    writeln!(out, "Modify: {}", md.mtime)?;
    Ok(())
}
