//! The `run` command: execute one algorithm and print its rows.

use std::path::Path;

use anyhow::Result;
use hipgraph::algorithms::{degrees, pagerank, triangle_count, weakly_connected_components};
use hipgraph::{PagerankParams, ResourceHandle};
use serde::Serialize;

use crate::output::{self, Column};
use crate::{Algorithm, OutputFormat};

/// One output row: a vertex id and the algorithm's value columns.
#[derive(Serialize)]
struct Row {
    vertex: i64,
    #[serde(flatten)]
    values: serde_json::Map<String, serde_json::Value>,
}

fn to_rows<V: Clone + Into<serde_json::Value>>(
    vertices: &[i64],
    columns: &[(&str, Vec<V>)],
) -> Vec<Row> {
    vertices
        .iter()
        .enumerate()
        .map(|(i, &vertex)| {
            let values = columns
                .iter()
                .map(|(name, data)| ((*name).to_string(), data[i].clone().into()))
                .collect();
            Row { vertex, values }
        })
        .collect()
}

/// Run the `run` command.
pub fn run(path: &Path, algorithm: Algorithm, format: OutputFormat, quiet: bool) -> Result<()> {
    let handle = ResourceHandle::new()?;
    let edges = super::load_edge_list(path)?;
    let graph = super::build_graph(&handle, &edges)?;

    let (columns, rows) = match algorithm {
        Algorithm::Degrees => {
            let result = degrees(&handle, &graph, None, false)?;
            let vertices = result.vertices().to_vec::<i64>(&handle)?;
            let ins = result
                .in_degrees()
                .expect("combined degrees always carry in-degrees")
                .to_vec::<i64>(&handle)?;
            let outs = result
                .out_degrees()
                .expect("combined degrees always carry out-degrees")
                .to_vec::<i64>(&handle)?;
            (
                vec![Column::int("in_degree"), Column::int("out_degree")],
                to_rows(&vertices, &[("in_degree", ins), ("out_degree", outs)]),
            )
        }
        Algorithm::Pagerank => {
            let result = pagerank(&handle, &graph, &PagerankParams::default())?;
            let vertices = result.vertices().to_vec::<i64>(&handle)?;
            let values = result.values().to_vec::<f64>(&handle)?;
            if !quiet && !result.converged() {
                eprintln!(
                    "warning: PageRank did not converge in {} iterations",
                    result.num_iterations()
                );
            }
            (
                vec![Column::float("pagerank")],
                to_rows(&vertices, &[("pagerank", values)]),
            )
        }
        Algorithm::Components => {
            let result = weakly_connected_components(&handle, &graph, false)?;
            let vertices = result.vertices().to_vec::<i64>(&handle)?;
            let labels = result.labels().to_vec::<i64>(&handle)?;
            (
                vec![Column::int("component")],
                to_rows(&vertices, &[("component", labels)]),
            )
        }
        Algorithm::Triangles => {
            let result = triangle_count(&handle, &graph, None, false)?;
            let vertices = result.vertices().to_vec::<i64>(&handle)?;
            let counts = result.counts().to_vec::<i64>(&handle)?;
            (
                vec![Column::int("triangles")],
                to_rows(&vertices, &[("triangles", counts)]),
            )
        }
    };

    if quiet {
        return Ok(());
    }
    match format {
        OutputFormat::Json => output::print_json(&rows)?,
        OutputFormat::Table => output::print_table(&columns, &rows),
    }
    Ok(())
}
