//! `ruta distances` - shortest distances from a start vertex

use ruta_core::error::Result;
use ruta_core::format::OutputFormat;
use ruta_core::graph::{shortest_paths, Graph};

use crate::cli::Cli;

pub fn execute(cli: &Cli, graph: &Graph, start: usize) -> Result<()> {
    let table = shortest_paths(graph, start)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        OutputFormat::Human => {
            println!("Shortest distances from {}:", start);
            for (vertex, distance) in table.distances.iter().enumerate() {
                match distance {
                    Some(distance) => println!("  to {}: {} km", vertex, distance),
                    None => println!("  to {}: unreachable", vertex),
                }
            }
        }
    }
    Ok(())
}
