//! Command implementations for the ruta CLI

pub mod distances;
pub mod mst;
pub mod network;
pub mod path;
pub mod show;
pub mod traverse;

use std::time::Instant;

use ruta_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let network = network::load(cli.network.as_deref())?;
    let graph = network.to_graph()?;

    debug!(
        elapsed = ?start.elapsed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "load_network"
    );

    match &cli.command {
        Commands::Show => show::execute(cli, &network, &graph),
        Commands::Path { from, to } => path::execute(cli, &graph, *from, *to),
        Commands::Traverse { start } => traverse::execute(cli, &graph, *start),
        Commands::Distances { start } => distances::execute(cli, &graph, *start),
        Commands::Mst => mst::execute(cli, &graph),
    }
}
