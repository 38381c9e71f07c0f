//! CLI entry point for the `sgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use social_graph::cli::commands::{self, Highlight};
use social_graph::config::{load_config, resolve_seed_path, GraphConfig};
use social_graph::{GraphError, RandomGraphParams};

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "Social graph CLI — shortest paths and mutual-connection suggestions"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display statistics about a seed file
    Info {
        /// Path to the JSON seed file (defaults to $SGRAPH_SEED or config)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Look up a user by ID
    Find {
        /// User ID
        id: u64,
        /// Path to the JSON seed file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Check whether two users are related
    Edge {
        /// First user ID
        source: u64,
        /// Second user ID
        target: u64,
        /// Path to the JSON seed file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Find a shortest path between two users
    Path {
        /// Start user ID
        source: u64,
        /// End user ID
        target: u64,
        /// Path to the JSON seed file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Suggest new connections through mutual friends
    Suggest {
        /// User ID
        id: u64,
        /// Path to the JSON seed file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Export the graph as deduplicated JSON
    Export {
        /// Path to the JSON seed file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Generate a random graph in seed format
    Generate {
        /// Number of users
        #[arg(long)]
        nodes: Option<usize>,
        /// Number of relations (capped at the number of distinct pairs)
        #[arg(long)]
        edges: Option<usize>,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the render snapshot, optionally highlighting one query
    Render {
        /// Path to the JSON seed file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Highlight a user
        #[arg(long, conflicts_with_all = ["edge", "path", "suggest"])]
        node: Option<u64>,
        /// Highlight a relation: SOURCE TARGET
        #[arg(long, num_args = 2, conflicts_with_all = ["path", "suggest"])]
        edge: Option<Vec<u64>>,
        /// Highlight a shortest path: SOURCE TARGET
        #[arg(long, num_args = 2, conflicts_with = "suggest")]
        path: Option<Vec<u64>>,
        /// Highlight suggestions for a user
        #[arg(long)]
        suggest: Option<u64>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logging(verbose: bool, config: &GraphConfig) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn seed_file(explicit: Option<PathBuf>, config: &GraphConfig) -> PathBuf {
    let explicit = explicit.map(|p| p.display().to_string());
    match resolve_seed_path(explicit.as_deref(), config) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("No seed file given: pass --file, set SGRAPH_SEED, or set seed_path in the config");
            process::exit(3);
        }
    }
}

fn pair(values: Vec<u64>) -> (u64, u64) {
    match values.as_slice() {
        [a, b] => (*a, *b),
        _ => {
            eprintln!("Expected exactly two user IDs");
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        None => GraphConfig::default(),
    };
    init_logging(cli.verbose, &config);

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&seed_file(file, &config), json),
        Commands::Find { id, file } => commands::cmd_find(&seed_file(file, &config), id, json),
        Commands::Edge {
            source,
            target,
            file,
        } => commands::cmd_edge(&seed_file(file, &config), source, target, json),
        Commands::Path {
            source,
            target,
            file,
        } => commands::cmd_path(&seed_file(file, &config), source, target, json),
        Commands::Suggest { id, file } => {
            commands::cmd_suggest(&seed_file(file, &config), id, json)
        }
        Commands::Export { file, pretty } => {
            commands::cmd_export(&seed_file(file, &config), pretty)
        }
        Commands::Generate {
            nodes,
            edges,
            seed,
            pretty,
        } => {
            let params = RandomGraphParams::new(
                nodes.unwrap_or(config.random_nodes),
                edges.unwrap_or(config.random_edges),
            );
            commands::cmd_generate(params, seed, pretty)
        }
        Commands::Render {
            file,
            node,
            edge,
            path,
            suggest,
            pretty,
        } => {
            let highlight = if let Some(id) = node {
                Highlight::Node(id)
            } else if let Some(ids) = edge {
                let (a, b) = pair(ids);
                Highlight::Edge(a, b)
            } else if let Some(ids) = path {
                let (a, b) = pair(ids);
                Highlight::Path(a, b)
            } else if let Some(id) = suggest {
                Highlight::Suggestions(id)
            } else {
                Highlight::None
            };
            commands::cmd_render(&seed_file(file, &config), highlight, pretty)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::Config(_) => 2,
            e if e.is_not_found() => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
