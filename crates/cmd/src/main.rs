use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cmd::commands;
use cmd::menu_file;

/// Browse an application-menu description as a read-only virtual
/// filesystem tree.
#[derive(Parser)]
#[command(name = "menufs", version, about)]
struct Cli {
    /// Menu description file (JSON)
    #[arg(long, short)]
    menu: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries of a directory in the virtual tree
    List {
        /// Absolute path inside the virtual tree
        path: String,
    },
    /// Print the content of a virtual file
    Cat {
        /// Absolute path inside the virtual tree
        path: String,
    },
    /// Show the metadata snapshot for a path
    Stat {
        /// Absolute path inside the virtual tree
        path: String,
        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the whole virtual tree
    Tree,
}

#[tokio::main]
async fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let menu = menu_file::load(&cli.menu)?;
    let fs = menufs::MenuFs::new(menu)?;

    match cli.command {
        Commands::List { path } => commands::list_command(&fs, &path).await,
        Commands::Cat { path } => commands::cat_command(&fs, &path).await,
        Commands::Stat { path, json } => commands::stat_command(&fs, &path, json).await,
        Commands::Tree => commands::tree_command(&fs).await,
    }
}
