//! Uniform neighbor sampling.
//!
//! Expands a set of start vertices hop by hop, keeping at most `fan_out[h]`
//! uniformly chosen out-edges per frontier vertex at hop `h`. A negative
//! fan-out keeps every edge. Sampled edges carry their weight and edge id
//! when the graph has them, plus the hop index they were drawn at.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{EngineError, EngineResult};
use crate::graph::CsrGraph;

/// Result of a neighbor-sampling run: one row per sampled edge.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingOutput {
    /// Edge sources, original ids.
    pub sources: Vec<i64>,
    /// Edge destinations, original ids.
    pub destinations: Vec<i64>,
    /// Edge weights, when the graph is weighted.
    pub weights: Option<Vec<f64>>,
    /// Edge ids, when the graph carries them.
    pub edge_ids: Option<Vec<i64>>,
    /// Hop index each edge was sampled at, starting from 0.
    pub hops: Vec<i32>,
}

/// Uniformly samples neighbors of `starts`, hop by hop.
///
/// `starts` are original ids. `with_replacement` draws each of the
/// `fan_out[h]` edges independently; without replacement a vertex with fewer
/// out-edges than the fan-out contributes all of them. The RNG is seeded so
/// runs are reproducible.
pub fn uniform_neighbor_sample(
    graph: &CsrGraph,
    starts: &[i64],
    fan_out: &[i32],
    with_replacement: bool,
    seed: u64,
) -> EngineResult<SamplingOutput> {
    if starts.is_empty() {
        return Err(EngineError::InvalidValue(
            "sampling requires at least one start vertex".into(),
        ));
    }
    if fan_out.is_empty() {
        return Err(EngineError::InvalidValue(
            "fan-out must name at least one hop".into(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut frontier: Vec<usize> = starts
        .iter()
        .map(|&id| graph.internal_id(id))
        .collect::<EngineResult<_>>()?;

    let mut out = SamplingOutput {
        sources: Vec::new(),
        destinations: Vec::new(),
        weights: graph.is_weighted().then(Vec::new),
        edge_ids: graph.has_edge_ids().then(Vec::new),
        hops: Vec::new(),
    };

    for (hop, &k) in fan_out.iter().enumerate() {
        let mut next_frontier = Vec::new();
        for &v in &frontier {
            let slots: Vec<usize> = graph.edge_range(v).collect();
            if slots.is_empty() {
                continue;
            }
            let picked: Vec<usize> = if k < 0 {
                slots
            } else if with_replacement {
                (0..k as usize)
                    .map(|_| slots[rng.gen_range(0..slots.len())])
                    .collect()
            } else {
                let mut shuffled = slots;
                shuffled.shuffle(&mut rng);
                shuffled.truncate(k as usize);
                shuffled
            };

            for slot in picked {
                let t = graph.target_at(slot) as usize;
                out.sources.push(graph.external_id(v));
                out.destinations.push(graph.external_id(t));
                if let Some(weights) = out.weights.as_mut() {
                    weights.push(graph.weight(slot));
                }
                if let (Some(ids), Some(id)) = (out.edge_ids.as_mut(), graph.edge_id(slot)) {
                    ids.push(id);
                }
                out.hops.push(hop as i32);
                next_frontier.push(t);
            }
        }
        next_frontier.sort_unstable();
        next_frontier.dedup();
        frontier = next_frontier;
        if frontier.is_empty() {
            break;
        }
    }

    Ok(out)
}
