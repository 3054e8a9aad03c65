//! CSR graph storage.
//!
//! [`CsrGraph`] is the engine's internal graph representation, built from
//! caller-supplied edge lists or CSR arrays. Construction renumbers external
//! vertex ids into a dense internal range (keeping the map so results report
//! original ids), optionally drops self-loops and parallel edges, and can
//! validate input consistency when the expensive check is requested.
//!
//! Layout, after the CSR builder runs:
//!   offsets : [usize; N+1]  - offsets[v]..offsets[v+1] = edges leaving v
//!   targets : [u32; E]      - internal destination indices
//!   weights : [f64; E]      - optional, parallel to targets
//!
//! The adjacency is always stored by source; `store_transposed` is recorded
//! and honored semantically (algorithms that need the other orientation
//! materialize it on demand).

use hipgraph_common::types::{DataTypeId, GraphFlags, GraphProperties};
use tracing::debug;

use crate::buffer::TypedBuffer;
use crate::error::{EngineError, EngineResult};

/// Caller-supplied edge-list arrays for graph construction.
pub struct EdgeListInput<'a> {
    /// Edge source vertex ids.
    pub src: &'a TypedBuffer,
    /// Edge destination vertex ids. Same length and dtype as `src`.
    pub dst: &'a TypedBuffer,
    /// Optional edge weights, parallel to `src`.
    pub weights: Option<&'a TypedBuffer>,
    /// Optional edge ids, parallel to `src`.
    pub edge_ids: Option<&'a TypedBuffer>,
    /// Optional edge type tags, parallel to `src`.
    pub edge_types: Option<&'a TypedBuffer>,
}

/// Caller-supplied CSR arrays for graph construction.
pub struct CsrInput<'a> {
    /// Row offsets, length `num_vertices + 1`.
    pub offsets: &'a TypedBuffer,
    /// Column indices, length `num_edges`.
    pub indices: &'a TypedBuffer,
    /// Optional edge weights, parallel to `indices`.
    pub weights: Option<&'a TypedBuffer>,
    /// Optional edge ids, parallel to `indices`.
    pub edge_ids: Option<&'a TypedBuffer>,
    /// Optional edge type tags, parallel to `indices`.
    pub edge_types: Option<&'a TypedBuffer>,
}

/// The engine's graph object: renumbered CSR plus edge payloads.
#[derive(Debug)]
pub struct CsrGraph {
    properties: GraphProperties,
    num_vertices: usize,
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Option<Vec<f64>>,
    edge_ids: Option<Vec<i64>>,
    edge_types: Option<Vec<i32>>,
    /// internal index -> original id; `None` when ids were already dense.
    renumber_map: Option<Vec<i64>>,
    vertex_dtype: DataTypeId,
    weight_dtype: DataTypeId,
    store_transposed: bool,
}

impl CsrGraph {
    /// Builds a graph from parallel edge arrays.
    pub fn from_edge_list(
        properties: GraphProperties,
        input: &EdgeListInput<'_>,
        flags: GraphFlags,
    ) -> EngineResult<Self> {
        let vertex_dtype = input.src.dtype();
        if !vertex_dtype.is_vertex_type() {
            return Err(EngineError::UnsupportedType(format!(
                "{vertex_dtype} is not a vertex id type"
            )));
        }
        if input.dst.dtype() != vertex_dtype {
            return Err(EngineError::InvalidValue(format!(
                "source dtype {} does not match destination dtype {}",
                vertex_dtype,
                input.dst.dtype()
            )));
        }
        if input.src.len() != input.dst.len() {
            return Err(EngineError::InvalidValue(format!(
                "source length {} does not match destination length {}",
                input.src.len(),
                input.dst.len()
            )));
        }

        let n_edges = input.src.len();
        let src = input.src.to_i64_vec()?;
        let dst = input.dst.to_i64_vec()?;
        let weights = check_payload(input.weights, n_edges, "weights")?
            .map(TypedBuffer::to_f64_vec)
            .transpose()?;
        let weight_dtype = input
            .weights
            .map_or(DataTypeId::Float64, TypedBuffer::dtype);
        if !weight_dtype.is_weight_type() {
            return Err(EngineError::UnsupportedType(format!(
                "{weight_dtype} is not a weight type"
            )));
        }
        let edge_ids = check_payload(input.edge_ids, n_edges, "edge ids")?
            .map(TypedBuffer::to_i64_vec)
            .transpose()?;
        let edge_types = check_payload(input.edge_types, n_edges, "edge types")?
            .map(|buf| buf.as_slice::<i32>().map(<[i32]>::to_vec))
            .transpose()
            .map_err(|_| {
                EngineError::UnsupportedType("edge types must be an int32 array".into())
            })?;

        for &v in src.iter().chain(dst.iter()) {
            if v < 0 {
                return Err(EngineError::IndexOutOfBounds(format!(
                    "negative vertex id {v}"
                )));
            }
        }

        // Edge filtering works on kept-index lists so the optional payload
        // arrays stay parallel without being copied per pass.
        let mut kept: Vec<usize> = (0..n_edges).collect();
        if flags.drop_self_loops {
            kept.retain(|&e| src[e] != dst[e]);
        }
        if flags.drop_multi_edges {
            kept.sort_by_key(|&e| (src[e], dst[e]));
            kept.dedup_by_key(|e| (src[*e], dst[*e]));
        }

        let (num_vertices, renumber_map) = if flags.renumber {
            let mut ids: Vec<i64> = kept
                .iter()
                .flat_map(|&e| [src[e], dst[e]])
                .collect();
            ids.sort_unstable();
            ids.dedup();
            (ids.len(), Some(ids))
        } else {
            let max_id = kept
                .iter()
                .map(|&e| src[e].max(dst[e]))
                .max()
                .unwrap_or(-1);
            ((max_id + 1) as usize, None)
        };

        if num_vertices > u32::MAX as usize {
            return Err(EngineError::UnsupportedType(format!(
                "{num_vertices} vertices exceed the 32-bit internal index width"
            )));
        }

        // Count -> prefix sum -> scatter.
        let mut counts = vec![0usize; num_vertices];
        for &e in &kept {
            let s = resolve_internal(renumber_map.as_deref(), src[e])?;
            counts[s] += 1;
        }
        let mut offsets = Vec::with_capacity(num_vertices + 1);
        let mut total = 0usize;
        for &c in &counts {
            offsets.push(total);
            total += c;
        }
        offsets.push(total);

        let mut cursor = offsets[..num_vertices].to_vec();
        let mut targets = vec![0u32; total];
        let mut out_weights = weights.as_ref().map(|_| vec![0.0f64; total]);
        let mut out_ids = edge_ids.as_ref().map(|_| vec![0i64; total]);
        let mut out_types = edge_types.as_ref().map(|_| vec![0i32; total]);
        for &e in &kept {
            let s = resolve_internal(renumber_map.as_deref(), src[e])?;
            let d = resolve_internal(renumber_map.as_deref(), dst[e])?;
            let slot = cursor[s];
            cursor[s] += 1;
            targets[slot] = d as u32;
            if let (Some(out), Some(w)) = (out_weights.as_mut(), weights.as_ref()) {
                out[slot] = w[e];
            }
            if let (Some(out), Some(ids)) = (out_ids.as_mut(), edge_ids.as_ref()) {
                out[slot] = ids[e];
            }
            if let (Some(out), Some(tys)) = (out_types.as_mut(), edge_types.as_ref()) {
                out[slot] = tys[e];
            }
        }

        let graph = Self {
            properties,
            num_vertices,
            offsets,
            targets,
            weights: out_weights,
            edge_ids: out_ids,
            edge_types: out_types,
            renumber_map,
            vertex_dtype,
            weight_dtype,
            store_transposed: flags.store_transposed,
        };
        if flags.do_expensive_check {
            graph.expensive_check()?;
        }
        debug!(
            vertices = graph.num_vertices,
            edges = graph.num_edges(),
            renumbered = graph.renumber_map.is_some(),
            "built graph from edge list"
        );
        Ok(graph)
    }

    /// Builds a graph from CSR arrays.
    ///
    /// CSR input is dense by construction, so the `renumber` flag is
    /// accepted and ignored.
    pub fn from_csr(
        properties: GraphProperties,
        input: &CsrInput<'_>,
        flags: GraphFlags,
    ) -> EngineResult<Self> {
        let vertex_dtype = input.indices.dtype();
        if !vertex_dtype.is_vertex_type() {
            return Err(EngineError::UnsupportedType(format!(
                "{vertex_dtype} is not a vertex id type"
            )));
        }
        let raw_offsets = input.offsets.to_i64_vec()?;
        if raw_offsets.is_empty() {
            return Err(EngineError::InvalidValue(
                "offsets array must hold at least one element".into(),
            ));
        }
        let num_vertices = raw_offsets.len() - 1;
        if num_vertices > u32::MAX as usize {
            return Err(EngineError::UnsupportedType(format!(
                "{num_vertices} vertices exceed the 32-bit internal index width"
            )));
        }

        let n_edges = input.indices.len();
        let last = *raw_offsets.last().expect("checked non-empty");
        if last != n_edges as i64 {
            return Err(EngineError::InvalidValue(format!(
                "final offset {last} does not match index count {n_edges}"
            )));
        }

        let mut offsets = Vec::with_capacity(raw_offsets.len());
        for &o in &raw_offsets {
            let o = usize::try_from(o).map_err(|_| {
                EngineError::InvalidValue(format!("negative offset {o}"))
            })?;
            offsets.push(o);
        }
        if flags.do_expensive_check {
            for w in offsets.windows(2) {
                if w[1] < w[0] {
                    return Err(EngineError::InvalidValue(
                        "offsets must be non-decreasing".into(),
                    ));
                }
            }
        }

        let raw_indices = input.indices.to_i64_vec()?;
        let mut targets = Vec::with_capacity(n_edges);
        for &t in &raw_indices {
            if t < 0 || t as usize >= num_vertices {
                return Err(EngineError::IndexOutOfBounds(format!(
                    "column index {t} outside 0..{num_vertices}"
                )));
            }
            targets.push(t as u32);
        }

        let weights = check_payload(input.weights, n_edges, "weights")?
            .map(TypedBuffer::to_f64_vec)
            .transpose()?;
        let weight_dtype = input
            .weights
            .map_or(DataTypeId::Float64, TypedBuffer::dtype);
        let edge_ids = check_payload(input.edge_ids, n_edges, "edge ids")?
            .map(TypedBuffer::to_i64_vec)
            .transpose()?;
        let edge_types = check_payload(input.edge_types, n_edges, "edge types")?
            .map(|buf| buf.as_slice::<i32>().map(<[i32]>::to_vec))
            .transpose()
            .map_err(|_| {
                EngineError::UnsupportedType("edge types must be an int32 array".into())
            })?;

        Ok(Self {
            properties,
            num_vertices,
            offsets,
            targets,
            weights,
            edge_ids,
            edge_types,
            renumber_map: None,
            vertex_dtype,
            weight_dtype,
            store_transposed: flags.store_transposed,
        })
    }

    /// Declared structural properties.
    #[must_use]
    pub fn properties(&self) -> GraphProperties {
        self.properties
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of stored edges (after any dropping).
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.targets.len()
    }

    /// Vertex id dtype of the original input arrays.
    #[must_use]
    pub fn vertex_dtype(&self) -> DataTypeId {
        self.vertex_dtype
    }

    /// Weight dtype; `Float64` when the graph is unweighted.
    #[must_use]
    pub fn weight_dtype(&self) -> DataTypeId {
        self.weight_dtype
    }

    /// `true` when edge weights were supplied.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    /// `true` when edge ids were supplied.
    #[must_use]
    pub fn has_edge_ids(&self) -> bool {
        self.edge_ids.is_some()
    }

    /// `true` when edge type tags were supplied.
    #[must_use]
    pub fn has_edge_types(&self) -> bool {
        self.edge_types.is_some()
    }

    /// Whether the caller requested transposed storage.
    #[must_use]
    pub fn store_transposed(&self) -> bool {
        self.store_transposed
    }

    /// Out-neighbors of an internal vertex index.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> &[u32] {
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Edge-slot range of an internal vertex index. Slots index the parallel
    /// payload arrays.
    #[must_use]
    pub fn edge_range(&self, v: usize) -> std::ops::Range<usize> {
        self.offsets[v]..self.offsets[v + 1]
    }

    /// Destination (internal index) of an edge slot.
    #[must_use]
    pub fn target_at(&self, slot: usize) -> u32 {
        self.targets[slot]
    }

    /// Weight of an edge slot; 1.0 when the graph is unweighted.
    #[must_use]
    pub fn weight(&self, slot: usize) -> f64 {
        self.weights.as_ref().map_or(1.0, |w| w[slot])
    }

    /// Edge id of an edge slot, if edge ids were supplied.
    #[must_use]
    pub fn edge_id(&self, slot: usize) -> Option<i64> {
        self.edge_ids.as_ref().map(|ids| ids[slot])
    }

    /// Edge type of an edge slot, if edge types were supplied.
    #[must_use]
    pub fn edge_type(&self, slot: usize) -> Option<i32> {
        self.edge_types.as_ref().map(|tys| tys[slot])
    }

    /// Out-degree of an internal vertex index.
    #[must_use]
    pub fn out_degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    /// In-degrees of every vertex, by scanning the stored targets.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.num_vertices];
        for &t in &self.targets {
            counts[t as usize] += 1;
        }
        counts
    }

    /// Original id of an internal vertex index.
    #[must_use]
    pub fn external_id(&self, v: usize) -> i64 {
        match &self.renumber_map {
            Some(map) => map[v],
            None => v as i64,
        }
    }

    /// Internal index of an original vertex id, or an error when the id is
    /// not in the graph.
    pub fn internal_id(&self, external: i64) -> EngineResult<usize> {
        let found = match &self.renumber_map {
            Some(map) => map.binary_search(&external).ok(),
            None => usize::try_from(external)
                .ok()
                .filter(|&v| v < self.num_vertices),
        };
        found.ok_or_else(|| {
            EngineError::IndexOutOfBounds(format!("vertex id {external} not in graph"))
        })
    }

    /// Original ids of all vertices, in internal order.
    #[must_use]
    pub fn external_ids(&self) -> Vec<i64> {
        (0..self.num_vertices).map(|v| self.external_id(v)).collect()
    }

    /// Materializes the reverse (by-destination) adjacency, carrying edge
    /// slots so payloads remain addressable.
    #[must_use]
    pub fn reverse_adjacency(&self) -> (Vec<usize>, Vec<u32>, Vec<usize>) {
        let mut counts = vec![0usize; self.num_vertices];
        for &t in &self.targets {
            counts[t as usize] += 1;
        }
        let mut offsets = Vec::with_capacity(self.num_vertices + 1);
        let mut total = 0usize;
        for &c in &counts {
            offsets.push(total);
            total += c;
        }
        offsets.push(total);

        let mut cursor = offsets[..self.num_vertices].to_vec();
        let mut sources = vec![0u32; total];
        let mut slots = vec![0usize; total];
        for s in 0..self.num_vertices {
            for slot in self.edge_range(s) {
                let d = self.targets[slot] as usize;
                let pos = cursor[d];
                cursor[d] += 1;
                sources[pos] = s as u32;
                slots[pos] = slot;
            }
        }
        (offsets, sources, slots)
    }

    /// Converts internal vertex indices into a buffer of original ids in the
    /// graph's vertex dtype.
    pub fn vertices_to_buffer(&self, internal: &[usize]) -> EngineResult<TypedBuffer> {
        let external: Vec<i64> = internal.iter().map(|&v| self.external_id(v)).collect();
        TypedBuffer::from_i64_values(&external, self.vertex_dtype)
    }

    /// Converts original vertex ids into a buffer in the graph's vertex
    /// dtype.
    pub fn ids_to_buffer(&self, external: &[i64]) -> EngineResult<TypedBuffer> {
        TypedBuffer::from_i64_values(external, self.vertex_dtype)
    }

    /// Converts values into a buffer in the graph's weight dtype.
    pub fn values_to_buffer(&self, values: &[f64]) -> EngineResult<TypedBuffer> {
        TypedBuffer::from_f64_values(values, self.weight_dtype)
    }

    /// The opt-in validation pass: bounds and declared-property consistency.
    fn expensive_check(&self) -> EngineResult<()> {
        for &t in &self.targets {
            if (t as usize) >= self.num_vertices {
                return Err(EngineError::IndexOutOfBounds(format!(
                    "edge target {t} outside 0..{}",
                    self.num_vertices
                )));
            }
        }
        if !self.properties.is_multigraph {
            let mut seen: Vec<(u32, u32)> = Vec::with_capacity(self.num_edges());
            for s in 0..self.num_vertices {
                for &d in self.neighbors(s) {
                    seen.push((s as u32, d));
                }
            }
            seen.sort_unstable();
            let before = seen.len();
            seen.dedup();
            if seen.len() != before {
                return Err(EngineError::InvalidValue(
                    "graph declared non-multigraph but parallel edges exist".into(),
                ));
            }
        }
        Ok(())
    }
}

/// External-to-internal id resolution: binary search against the renumber
/// map, or identity when the input was already dense. Ids were validated
/// non-negative before this runs.
fn resolve_internal(map: Option<&[i64]>, id: i64) -> EngineResult<usize> {
    match map {
        Some(map) => map
            .binary_search(&id)
            .map_err(|_| EngineError::Internal(format!("renumber map lost vertex id {id}"))),
        None => Ok(id as usize),
    }
}

fn check_payload<'a>(
    payload: Option<&'a TypedBuffer>,
    n_edges: usize,
    what: &str,
) -> EngineResult<Option<&'a TypedBuffer>> {
    if let Some(buf) = payload
        && buf.len() != n_edges
    {
        return Err(EngineError::InvalidValue(format!(
            "{what} length {} does not match edge count {n_edges}",
            buf.len()
        )));
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_buffers(src: &[i32], dst: &[i32]) -> (TypedBuffer, TypedBuffer) {
        (
            TypedBuffer::from_vec(src.to_vec()),
            TypedBuffer::from_vec(dst.to_vec()),
        )
    }

    fn build(src: &[i32], dst: &[i32], flags: GraphFlags) -> EngineResult<CsrGraph> {
        let (src, dst) = edge_buffers(src, dst);
        CsrGraph::from_edge_list(
            GraphProperties::default(),
            &EdgeListInput {
                src: &src,
                dst: &dst,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            flags,
        )
    }

    #[test]
    fn builds_dense_graph_without_renumbering() {
        let g = build(&[0, 1, 1, 2], &[1, 0, 2, 0], GraphFlags::default()).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.neighbors(1), &[0, 2]);
        assert_eq!(g.external_id(2), 2);
    }

    #[test]
    fn renumbers_sparse_ids() {
        let flags = GraphFlags {
            renumber: true,
            ..GraphFlags::default()
        };
        let g = build(&[10, 30, 30], &[30, 10, 20], flags).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.external_ids(), vec![10, 20, 30]);
        assert_eq!(g.internal_id(30).unwrap(), 2);
        assert!(g.internal_id(25).is_err());
    }

    #[test]
    fn drops_self_loops_and_multi_edges() {
        let flags = GraphFlags {
            drop_self_loops: true,
            drop_multi_edges: true,
            ..GraphFlags::default()
        };
        let g = build(&[0, 0, 0, 1], &[0, 1, 1, 0], flags).unwrap();
        // Self-loop (0,0) dropped; duplicate (0,1) collapsed.
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.neighbors(1), &[0]);
    }

    #[test]
    fn rejects_mismatched_inputs() {
        let (src, _) = edge_buffers(&[0, 1], &[1, 0]);
        let dst = TypedBuffer::from_vec(vec![1i64, 0]);
        let err = CsrGraph::from_edge_list(
            GraphProperties::default(),
            &EdgeListInput {
                src: &src,
                dst: &dst,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidValue(_)));
    }

    #[test]
    fn rejects_float_vertex_ids() {
        let src = TypedBuffer::from_vec(vec![0.0f32]);
        let dst = TypedBuffer::from_vec(vec![1.0f32]);
        let err = CsrGraph::from_edge_list(
            GraphProperties::default(),
            &EdgeListInput {
                src: &src,
                dst: &dst,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedType(_)));
    }

    #[test]
    fn rejects_negative_vertex_ids() {
        let err = build(&[0, -1], &[1, 0], GraphFlags::default()).unwrap_err();
        assert!(matches!(err, EngineError::IndexOutOfBounds(_)));
    }

    #[test]
    fn carries_weights_through_scatter() {
        let (src, dst) = edge_buffers(&[1, 0, 1], &[0, 1, 2]);
        let weights = TypedBuffer::from_vec(vec![5.0f32, 1.0, 7.0]);
        let g = CsrGraph::from_edge_list(
            GraphProperties::default(),
            &EdgeListInput {
                src: &src,
                dst: &dst,
                weights: Some(&weights),
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap();
        assert_eq!(g.weight_dtype(), DataTypeId::Float32);
        let range = g.edge_range(1);
        let row: Vec<(u32, f64)> = range
            .map(|slot| (g.targets[slot], g.weight(slot)))
            .collect();
        assert_eq!(row, vec![(0, 5.0), (2, 7.0)]);
    }

    #[test]
    fn csr_construction_round_trips() {
        let offsets = TypedBuffer::from_vec(vec![0usize, 2, 3, 3]);
        let indices = TypedBuffer::from_vec(vec![1i32, 2, 0]);
        let g = CsrGraph::from_csr(
            GraphProperties::default(),
            &CsrInput {
                offsets: &offsets,
                indices: &indices,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.neighbors(0), &[1, 2]);
        assert_eq!(g.neighbors(1), &[0]);
        assert_eq!(g.neighbors(2), &[] as &[u32]);
    }

    #[test]
    fn csr_rejects_inconsistent_offsets() {
        let offsets = TypedBuffer::from_vec(vec![0usize, 2, 5]);
        let indices = TypedBuffer::from_vec(vec![1i32, 0]);
        let err = CsrGraph::from_csr(
            GraphProperties::default(),
            &CsrInput {
                offsets: &offsets,
                indices: &indices,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidValue(_)));
    }

    #[test]
    fn csr_rejects_out_of_range_indices() {
        let offsets = TypedBuffer::from_vec(vec![0usize, 1]);
        let indices = TypedBuffer::from_vec(vec![4i32]);
        let err = CsrGraph::from_csr(
            GraphProperties::default(),
            &CsrInput {
                offsets: &offsets,
                indices: &indices,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::IndexOutOfBounds(_)));
    }

    #[test]
    fn expensive_check_flags_undeclared_multigraph() {
        let flags = GraphFlags {
            do_expensive_check: true,
            ..GraphFlags::default()
        };
        let err = build(&[0, 0], &[1, 1], flags).unwrap_err();
        assert!(matches!(err, EngineError::InvalidValue(_)));
    }

    #[test]
    fn reverse_adjacency_mirrors_edges() {
        let g = build(&[0, 1, 2], &[2, 2, 0], GraphFlags::default()).unwrap();
        let (offsets, sources, _slots) = g.reverse_adjacency();
        // In-neighbors of vertex 2 are 0 and 1.
        let row: &[u32] = &sources[offsets[2]..offsets[3]];
        let mut row = row.to_vec();
        row.sort_unstable();
        assert_eq!(row, vec![0, 1]);
    }
}
