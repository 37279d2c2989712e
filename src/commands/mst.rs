//! `ruta mst` - minimum spanning tree of the network

use ruta_core::error::Result;
use ruta_core::format::OutputFormat;
use ruta_core::graph::{minimum_spanning_tree, Graph};

use crate::cli::Cli;

pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let result = minimum_spanning_tree(graph);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            println!("Minimum spanning tree:");
            for edge in &result.edges {
                println!("  {} - {}: {} km", edge.source, edge.destination, edge.weight);
            }
            println!("Total weight: {} km", result.total_weight);
            if !cli.quiet && !result.is_spanning(graph.vertex_count()) {
                println!(
                    "Network is disconnected: spanning forest across {} components",
                    result.component_count(graph.vertex_count())
                );
            }
        }
    }
    Ok(())
}
