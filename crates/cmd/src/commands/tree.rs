use anyhow::Result;
use menufs::MenuFs;
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;

/// Print the whole virtual tree, directories first as listed.
pub async fn tree_command(fs: &MenuFs) -> Result<()> {
    let mut out = io::stdout();
    writeln!(out, "/")?;
    walk(fs, String::new(), "  ".to_string()).await
}

// Recursive async walk; boxed because async fns can't recurse directly.
fn walk<'a>(
    fs: &'a MenuFs,
    path: String,
    indent: String,
) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>> {
    Box::pin(async move {
        let names = fs.list(&format!("{}/", path)).await?;
        let mut out = io::stdout();

        for name in names {
            if name == "." || name == ".." {
                continue;
            }
            let child_path = format!("{}/{}", path, name);
            let md = fs.attributes(&child_path).await?;
            if md.kind.is_dir() {
                writeln!(out, "{}{}/", indent, name)?;
                walk(fs, child_path, format!("{}  ", indent)).await?;
            } else {
                writeln!(out, "{}{}", indent, name)?;
            }
        }
        Ok(())
    })
}
