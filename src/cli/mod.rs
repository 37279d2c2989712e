//! CLI argument parsing for ruta
//!
//! Uses clap for argument parsing.
//! Supports global flags: --network, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ruta_core::error::RutaError;
use ruta_core::format::OutputFormat;

fn parse_format(value: &str) -> std::result::Result<OutputFormat, String> {
    value
        .parse::<OutputFormat>()
        .map_err(|err: RutaError| err.to_string())
}

/// Ruta - road network analysis CLI
#[derive(Parser, Debug)]
#[command(name = "ruta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Network description file (JSON); defaults to the built-in demo city
    #[arg(long, global = true)]
    pub network: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the active network
    Show,

    /// Find one path between two vertices (depth-first, first found)
    Path {
        /// Start vertex
        from: usize,

        /// Target vertex
        to: usize,
    },

    /// Visit every vertex reachable from the start, depth-first
    Traverse {
        /// Start vertex
        #[arg(default_value_t = 0)]
        start: usize,
    },

    /// Shortest distances from the start vertex to every vertex
    Distances {
        /// Start vertex
        #[arg(default_value_t = 0)]
        start: usize,
    },

    /// Minimum spanning tree of the network
    Mst,
}
