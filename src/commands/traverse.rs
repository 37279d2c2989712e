//! `ruta traverse` - depth-first traversal from a start vertex

use ruta_core::error::Result;
use ruta_core::format::OutputFormat;
use ruta_core::graph::{traverse_all, Graph};

use crate::cli::Cli;

pub fn execute(cli: &Cli, graph: &Graph, start: usize) -> Result<()> {
    let result = traverse_all(graph, start)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            let rendered: Vec<String> = result.order.iter().map(ToString::to_string).collect();
            println!("Traversal from {}: {}", start, rendered.join(" -> "));
            println!("Total weight: {} km", result.total_weight);
            if !cli.quiet && result.order.len() < graph.vertex_count() {
                println!(
                    "Visited {} of {} vertices (rest unreachable)",
                    result.order.len(),
                    graph.vertex_count()
                );
            }
        }
    }
    Ok(())
}
