use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use canopy::{util::parse_keys, AvlTree};

#[derive(Parser, Debug)]
#[command(name = "canopy", about = "AVL tree demo: ordered insertion with automatic rebalancing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the maximum key of the tree built from a key file.
    Max {
        /// Key file (whitespace- or comma-separated integers).
        keys: PathBuf,
    },
    /// Print the keys in ascending order, one per line.
    Sorted {
        /// Key file (whitespace- or comma-separated integers).
        keys: PathBuf,
    },
    /// Print size, height, and extreme keys of the tree.
    Stats {
        /// Key file (whitespace- or comma-separated integers).
        keys: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Max { keys } => {
            let tree = load_tree(&keys)?;
            match tree.find_max() {
                Some(max) => println!("{max}"),
                None => println!("(empty tree: no maximum)"),
            }
        }
        Commands::Sorted { keys } => {
            let tree = load_tree(&keys)?;
            for key in tree.iter() {
                println!("{key}");
            }
        }
        Commands::Stats { keys } => {
            let tree = load_tree(&keys)?;
            println!("keys:   {}", tree.len());
            println!("height: {}", tree.height());
            if let Some(root) = tree.root() {
                println!("root:   {}", root.key());
            }
            if let (Some(min), Some(max)) = (tree.find_min(), tree.find_max()) {
                println!("min:    {min}");
                println!("max:    {max}");
            }
        }
    }

    Ok(())
}

fn load_tree(path: &Path) -> Result<AvlTree<i64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read key file {}", path.display()))?;
    let keys = parse_keys(&text)
        .with_context(|| format!("failed to parse keys from {}", path.display()))?;

    let mut tree = AvlTree::new();
    let mut duplicates = 0usize;
    for key in keys {
        if !tree.insert(key) {
            duplicates += 1;
        }
    }
    debug!(
        len = tree.len(),
        height = tree.height(),
        duplicates,
        "built tree"
    );
    Ok(tree)
}
