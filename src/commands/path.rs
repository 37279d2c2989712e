//! `ruta path` - find one path between two vertices
//!
//! Depth-first, first path found by adjacency order; not necessarily the
//! lightest route. No path is a valid result, not an error.

use ruta_core::error::Result;
use ruta_core::format::OutputFormat;
use ruta_core::graph::{find_one_path, Graph};

use crate::cli::Cli;

pub fn execute(cli: &Cli, graph: &Graph, from: usize, to: usize) -> Result<()> {
    let result = find_one_path(graph, from, to)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            if result.found {
                let rendered: Vec<String> = result.path.iter().map(ToString::to_string).collect();
                println!("Path from {} to {}: {}", from, to, rendered.join(" -> "));
            } else if !cli.quiet {
                println!("No path found from {} to {}", from, to);
            }
        }
    }
    Ok(())
}
