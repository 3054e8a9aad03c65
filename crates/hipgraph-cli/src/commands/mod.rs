//! CLI commands.

pub mod info;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result, bail};
use hipgraph::{DeviceArray, Graph, GraphFlags, GraphProperties, ResourceHandle};

/// A parsed edge-list file.
pub struct EdgeList {
    pub src: Vec<i64>,
    pub dst: Vec<i64>,
    pub weights: Option<Vec<f64>>,
}

/// Parses `src dst [weight]` lines; `#` starts a comment. Either every edge
/// carries a weight or none does.
pub fn load_edge_list(path: &Path) -> Result<EdgeList> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading edge list {}", path.display()))?;

    let mut src = Vec::new();
    let mut dst = Vec::new();
    let mut weights: Option<Vec<f64>> = None;

    for (lineno, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(s), Some(d)) = (fields.next(), fields.next()) else {
            bail!("line {}: expected `src dst [weight]`", lineno + 1);
        };
        src.push(s.parse::<i64>().with_context(|| format!("line {}", lineno + 1))?);
        dst.push(d.parse::<i64>().with_context(|| format!("line {}", lineno + 1))?);

        match fields.next() {
            Some(w) => {
                let w = w.parse::<f64>().with_context(|| format!("line {}", lineno + 1))?;
                weights.get_or_insert_with(Vec::new).push(w);
            }
            None if weights.is_some() => {
                bail!("line {}: weighted file is missing a weight", lineno + 1)
            }
            None => {}
        }
        if let Some(w) = &weights
            && w.len() != src.len()
        {
            bail!("line {}: weight appeared mid-file", lineno + 1);
        }
    }

    Ok(EdgeList { src, dst, weights })
}

/// Builds a graph from a parsed edge list, renumbering vertex ids.
pub fn build_graph(handle: &ResourceHandle, edges: &EdgeList) -> Result<Graph> {
    let src = DeviceArray::from_slice(handle, &edges.src)?;
    let dst = DeviceArray::from_slice(handle, &edges.dst)?;
    let weights = edges
        .weights
        .as_ref()
        .map(|w| DeviceArray::from_slice(handle, w))
        .transpose()?;

    let graph = Graph::from_edge_list(
        handle,
        GraphProperties::default(),
        GraphFlags {
            renumber: true,
            ..GraphFlags::default()
        },
        &src.view(),
        &dst.view(),
        weights.as_ref().map(DeviceArray::view).as_ref(),
        None,
        None,
    )?;
    Ok(graph)
}
