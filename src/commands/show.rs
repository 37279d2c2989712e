//! `ruta show` - print the active network

use ruta_core::error::Result;
use ruta_core::format::OutputFormat;
use ruta_core::graph::Graph;
use ruta_core::network::NetworkSpec;

use crate::cli::Cli;

pub fn execute(cli: &Cli, network: &NetworkSpec, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(network)?);
        }
        OutputFormat::Human => {
            println!(
                "Network: {} vertices, {} edges",
                graph.vertex_count(),
                graph.edge_count()
            );
            for &(source, destination, weight) in &network.edges {
                println!("  {} - {}: {} km", source, destination, weight);
            }
        }
    }
    Ok(())
}
