use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use vaultgraph::config::{get_config_path, load_config, save_config};
use vaultgraph::errors::ExportError;
use vaultgraph::exporter::GraphExporter;
use vaultgraph::host::StaticView;
use vaultgraph::scope::Scope;
use vaultgraph::store::VaultStore;
use vaultgraph::types::EdgeFormat;

/// Wiki-link graph exporter for markdown vaults.
#[derive(Parser)]
#[command(name = "vaultgraph", about = "Exports the wiki-link graph of a markdown vault")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the link graph to graph_data.json
    Export {
        /// Vault path (default: current directory)
        vault: Option<String>,
        /// Directory prefix overriding the configured scope for this run
        #[arg(short, long)]
        target_dir: Option<String>,
        /// Write edges with the legacy from/to keys
        #[arg(long)]
        legacy_edges: bool,
    },
    /// Show or change the persisted export settings
    Config {
        /// Vault path (default: current directory)
        vault: Option<String>,
        /// Set the directory prefix bounding exports ("" for the whole vault)
        #[arg(short, long)]
        target_dir: Option<String>,
        /// Set the edge key convention (source_target or from_to)
        #[arg(short, long)]
        edge_format: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> vaultgraph::errors::Result<()> {
    match cli.command {
        Commands::Export {
            vault,
            target_dir,
            legacy_edges,
        } => {
            let vault_root = resolve_path(vault);
            let config = load_config(&vault_root)?;
            let scope = Scope::new(target_dir.unwrap_or(config.target_directory));
            let edge_format = if legacy_edges {
                EdgeFormat::FromTo
            } else {
                config.edge_format
            };
            let store = VaultStore::new(&vault_root);
            let exporter = GraphExporter::new(store, StaticView::graph(), scope, edge_format);
            let summary = exporter.export()?;
            println!(
                "Exported {} nodes, {} edges to {} in {}ms",
                summary.nodes, summary.edges, summary.output_path, summary.duration_ms
            );
        }
        Commands::Config {
            vault,
            target_dir,
            edge_format,
        } => {
            let vault_root = resolve_path(vault);
            let mut config = load_config(&vault_root)?;
            let mut changed = false;
            if let Some(dir) = target_dir {
                config.target_directory = dir;
                changed = true;
            }
            if let Some(format) = edge_format {
                config.edge_format =
                    EdgeFormat::from_str(&format).ok_or_else(|| ExportError::Config {
                        message: format!(
                            "unknown edge format '{}' (expected source_target or from_to)",
                            format
                        ),
                    })?;
                changed = true;
            }
            if changed {
                save_config(&vault_root, &config)?;
                println!("Settings saved to {}", get_config_path(&vault_root).display());
            }
            let target = if config.target_directory.is_empty() {
                "<whole vault>"
            } else {
                config.target_directory.as_str()
            };
            println!("Target directory: {}", target);
            println!("Edge format: {}", config.edge_format.as_str());
        }
    }
    Ok(())
}

/// Installs the tracing subscriber; `RUST_LOG` overrides the verbose flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Resolves an optional vault argument to an absolute `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(vault: Option<String>) -> PathBuf {
    match vault {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
