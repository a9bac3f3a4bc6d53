//! Skill tree command line tools.
//!
//! Provides the `skilltree` binary for working with the same data directory
//! the HTTP server serves: list stored trees, inspect one, export/import
//! tree documents, and delete trees.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use skilltree_core::codec;
use skilltree_storage::{FsStore, TreeStore};

/// Skill tree tools.
#[derive(Parser)]
#[command(name = "skilltree", about = "Skill tree tools")]
struct Cli {
    /// Directory holding saved trees.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List all stored trees.
    List,

    /// Show a summary of one tree.
    Show {
        /// Tree name.
        name: String,
    },

    /// Write a tree document to a JSON file.
    Export {
        /// Tree name.
        name: String,

        /// Output path (default: `{name}.json` in the current directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a JSON file and store it as a tree.
    Import {
        /// Path to the tree document.
        file: PathBuf,

        /// Name to store the tree under.
        name: String,
    },

    /// Delete a stored tree.
    Delete {
        /// Tree name.
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut store = match FsStore::new(&cli.data_dir) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error: failed to open data dir: {err}");
            process::exit(1);
        }
    };

    if let Err(message) = run(&mut store, cli.command) {
        eprintln!("error: {message}");
        process::exit(1);
    }
}

fn run(store: &mut FsStore, command: Commands) -> Result<(), String> {
    match command {
        Commands::List => {
            for name in store.list_trees().map_err(|e| e.to_string())? {
                println!("{name}");
            }
            Ok(())
        }

        Commands::Show { name } => {
            let doc = store
                .load_tree(&name)
                .map_err(|e| e.to_string())?
                .ok_or_else(|| format!("skill tree not found: '{name}'"))?;
            let tree = codec::deserialize(&doc).map_err(|e| e.to_string())?;

            let completed = tree.graph.nodes().filter(|n| n.completed).count();
            println!(
                "{name}: {} nodes ({completed} complete), {} edges, {} notes",
                tree.graph.node_count(),
                tree.graph.edge_count(),
                tree.notes.len()
            );
            for node in &doc.nodes {
                let mark = if node.completed { "x" } else { " " };
                let label = if node.is_root {
                    node.title.as_deref().unwrap_or("(root)")
                } else {
                    node.label.as_str()
                };
                println!("  [{mark}] {} {label}", node.id);
            }
            Ok(())
        }

        Commands::Export { name, output } => {
            let doc = store
                .load_tree(&name)
                .map_err(|e| e.to_string())?
                .ok_or_else(|| format!("skill tree not found: '{name}'"))?;
            let path = output.unwrap_or_else(|| PathBuf::from(format!("{name}.json")));
            let json = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
            std::fs::write(&path, json).map_err(|e| e.to_string())?;
            println!("exported '{name}' to {}", path.display());
            Ok(())
        }

        Commands::Import { file, name } => {
            let json = std::fs::read_to_string(&file).map_err(|e| e.to_string())?;
            let value: serde_json::Value =
                serde_json::from_str(&json).map_err(|e| e.to_string())?;
            let doc = codec::document_from_json(value).map_err(|e| e.to_string())?;
            // Full validation: reject documents whose edges dangle.
            codec::deserialize(&doc).map_err(|e| e.to_string())?;
            store.save_tree(&name, &doc).map_err(|e| e.to_string())?;
            println!("imported {} as '{name}'", file.display());
            Ok(())
        }

        Commands::Delete { name } => {
            store.delete_tree(&name).map_err(|e| e.to_string())?;
            println!("deleted '{name}'");
            Ok(())
        }
    }
}
