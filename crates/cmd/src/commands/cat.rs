use anyhow::Result;
use menufs::MenuFs;
use std::io::{self, Write};

/// Print the full content of a virtual file to stdout.
pub async fn cat_command(fs: &MenuFs, path: &str) -> Result<()> {
    let md = fs.attributes(path).await?;
    let size = md.size.unwrap_or(0);
    let content = fs.read(path, size, 0).await?;

    let mut out = io::stdout();
    out.write_all(&content)?;
    out.flush()?;
    Ok(())
}
