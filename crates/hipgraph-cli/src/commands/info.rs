//! The `info` command: graph statistics and backend identity.

use std::path::Path;

use anyhow::Result;
use hipgraph::ResourceHandle;
use serde::Serialize;

use crate::OutputFormat;
use crate::output;

/// Graph and backend facts for one edge-list file.
#[derive(Serialize)]
struct InfoOutput {
    backend: &'static str,
    rank: i32,
    comm_size: i32,
    num_vertices: usize,
    num_edges: usize,
    weighted: bool,
    vertex_dtype: String,
}

/// Run the `info` command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let handle = ResourceHandle::new()?;
    let edges = super::load_edge_list(path)?;
    let graph = super::build_graph(&handle, &edges)?;

    let info = InfoOutput {
        backend: ResourceHandle::backend_name(),
        rank: handle.rank(),
        comm_size: handle.comm_size(),
        num_vertices: graph.num_vertices(),
        num_edges: graph.num_edges(),
        weighted: edges.weights.is_some(),
        vertex_dtype: graph.vertex_dtype().to_string(),
    };

    if quiet {
        return Ok(());
    }
    match format {
        OutputFormat::Json => output::print_json(&info)?,
        OutputFormat::Table => {
            let mut table = output::create_table();
            table.set_header(vec!["field", "value"]);
            table.add_row(vec!["backend".to_string(), info.backend.to_string()]);
            table.add_row(vec!["rank".to_string(), info.rank.to_string()]);
            table.add_row(vec!["comm_size".to_string(), info.comm_size.to_string()]);
            table.add_row(vec![
                "num_vertices".to_string(),
                info.num_vertices.to_string(),
            ]);
            table.add_row(vec!["num_edges".to_string(), info.num_edges.to_string()]);
            table.add_row(vec!["weighted".to_string(), info.weighted.to_string()]);
            table.add_row(vec!["vertex_dtype".to_string(), info.vertex_dtype.clone()]);
            println!("{table}");
        }
    }
    Ok(())
}
