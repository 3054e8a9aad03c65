//! The host (CPU) backend.
//!
//! Adapts the `hipgraph-core` engine to the [`GraphBackend`] interface:
//! translates protocol enums to engine enums, forwards, and re-shapes engine
//! outputs into backend buffers in the dtypes the protocol promises
//! (vertex columns in the graph's vertex dtype, value columns in its weight
//! dtype, counts in int64, hops in int32).

use hipgraph_common::types::{DataTypeId, GraphFlags, GraphProperties};
use hipgraph_common::utils::error::Status;

use hipgraph_core::algorithms::{self, DegreeColumns as EngineDegreeColumns};
use hipgraph_core::graph::{CsrInput, EdgeListInput};
use hipgraph_core::{CsrGraph, EngineError, TypedBuffer};

use crate::types::{
    BetweennessParams, BfsParams, CentralityOutput, ClusteringOutput, CsrRefs, DegreeColumns,
    DegreeKind, DegreesOutput, EdgeListRefs, InducedSubgraphOutput, LabelingOutput, PagerankParams,
    PathsOutput, SamplingOutput, SamplingParams, SimilarityCoefficient, SimilarityOutput,
    SsspParams,
};
use crate::{BackendFailure, GraphBackend};

/// Compute context of the host backend: a device ordinal and the trivial
/// single-process group.
pub struct HostContext {
    device: usize,
}

impl HostContext {
    /// The device ordinal this context was created for.
    #[must_use]
    pub fn device(&self) -> usize {
        self.device
    }
}

impl BackendFailure for EngineError {
    fn status(&self) -> Status {
        match self {
            EngineError::OutOfMemory(_) => Status::AllocError,
            EngineError::InvalidValue(_) | EngineError::IndexOutOfBounds(_) => Status::InvalidInput,
            EngineError::UnsupportedType(_) => Status::UnsupportedTypeCombination,
            EngineError::NotSupported(_) => Status::NotImplemented,
            EngineError::Internal(_) => Status::UnknownError,
        }
    }
}

/// The in-tree reference backend.
pub struct HostBackend;

impl HostBackend {
    /// Reads a vertex-id buffer, insisting its dtype matches the graph's.
    fn vertex_ids(graph: &CsrGraph, buf: &TypedBuffer, what: &str) -> Result<Vec<i64>, EngineError> {
        if buf.dtype() != graph.vertex_dtype() {
            return Err(EngineError::InvalidValue(format!(
                "{what} dtype {} does not match graph vertex dtype {}",
                buf.dtype(),
                graph.vertex_dtype()
            )));
        }
        buf.to_i64_vec()
    }
}

impl GraphBackend for HostBackend {
    type Context = HostContext;
    type Buffer = TypedBuffer;
    type Graph = CsrGraph;
    type Error = EngineError;

    fn name() -> &'static str {
        "host"
    }

    fn create_context(device: Option<usize>) -> Result<HostContext, EngineError> {
        Ok(HostContext {
            device: device.unwrap_or(0),
        })
    }

    fn rank(_ctx: &HostContext) -> i32 {
        0
    }

    fn comm_size(_ctx: &HostContext) -> i32 {
        1
    }

    fn alloc(_ctx: &HostContext, dtype: DataTypeId, len: usize) -> Result<TypedBuffer, EngineError> {
        Ok(TypedBuffer::alloc(dtype, len))
    }

    fn buffer_dtype(buf: &TypedBuffer) -> DataTypeId {
        buf.dtype()
    }

    fn buffer_len(buf: &TypedBuffer) -> usize {
        buf.len()
    }

    fn copy_from_bytes(
        _ctx: &HostContext,
        buf: &mut TypedBuffer,
        src: &[u8],
    ) -> Result<(), EngineError> {
        buf.copy_from_bytes(src)
    }

    fn copy_to_bytes(
        _ctx: &HostContext,
        buf: &TypedBuffer,
        dst: &mut [u8],
    ) -> Result<(), EngineError> {
        buf.copy_to_bytes(dst)
    }

    fn copy_buffer(
        _ctx: &HostContext,
        dst: &mut TypedBuffer,
        src: &TypedBuffer,
    ) -> Result<(), EngineError> {
        dst.copy_from(src)
    }

    fn buffer_ptr(buf: &TypedBuffer) -> *const u8 {
        buf.as_byte_ptr()
    }

    fn buffer_ptr_mut(buf: &mut TypedBuffer) -> *mut u8 {
        buf.as_byte_ptr_mut()
    }

    fn graph_from_edge_list(
        _ctx: &HostContext,
        properties: GraphProperties,
        input: EdgeListRefs<'_, Self>,
        flags: GraphFlags,
    ) -> Result<CsrGraph, EngineError> {
        CsrGraph::from_edge_list(
            properties,
            &EdgeListInput {
                src: input.src,
                dst: input.dst,
                weights: input.weights,
                edge_ids: input.edge_ids,
                edge_types: input.edge_types,
            },
            flags,
        )
    }

    fn graph_from_csr(
        _ctx: &HostContext,
        properties: GraphProperties,
        input: CsrRefs<'_, Self>,
        flags: GraphFlags,
    ) -> Result<CsrGraph, EngineError> {
        CsrGraph::from_csr(
            properties,
            &CsrInput {
                offsets: input.offsets,
                indices: input.indices,
                weights: input.weights,
                edge_ids: input.edge_ids,
                edge_types: input.edge_types,
            },
            flags,
        )
    }

    fn graph_num_vertices(graph: &CsrGraph) -> usize {
        graph.num_vertices()
    }

    fn graph_num_edges(graph: &CsrGraph) -> usize {
        graph.num_edges()
    }

    fn graph_vertex_dtype(graph: &CsrGraph) -> DataTypeId {
        graph.vertex_dtype()
    }

    fn graph_weight_dtype(graph: &CsrGraph) -> DataTypeId {
        graph.weight_dtype()
    }

    fn degrees(
        _ctx: &HostContext,
        graph: &CsrGraph,
        subset: Option<&TypedBuffer>,
        kind: DegreeKind,
        do_expensive_check: bool,
    ) -> Result<DegreesOutput<Self>, EngineError> {
        let subset_ids = subset
            .map(|buf| Self::vertex_ids(graph, buf, "vertex subset"))
            .transpose()?;
        if do_expensive_check
            && let Some(ids) = subset_ids.as_deref()
        {
            let mut sorted = ids.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            if sorted.len() != ids.len() {
                return Err(EngineError::InvalidValue(
                    "vertex subset contains duplicate ids".into(),
                ));
            }
        }
        let engine_kind = match kind {
            DegreeKind::In => algorithms::DegreeKind::In,
            DegreeKind::Out => algorithms::DegreeKind::Out,
            DegreeKind::Combined => algorithms::DegreeKind::Combined,
        };
        let out = algorithms::degrees(graph, subset_ids.as_deref(), engine_kind)?;

        let vertices = graph.ids_to_buffer(&out.vertices)?;
        let columns = match out.columns {
            EngineDegreeColumns::InOnly(d) => DegreeColumns::InOnly(TypedBuffer::from_vec(d)),
            EngineDegreeColumns::OutOnly(d) => DegreeColumns::OutOnly(TypedBuffer::from_vec(d)),
            EngineDegreeColumns::Separate {
                in_degrees,
                out_degrees,
            } => DegreeColumns::Separate {
                in_degrees: TypedBuffer::from_vec(in_degrees),
                out_degrees: TypedBuffer::from_vec(out_degrees),
            },
            EngineDegreeColumns::Shared(d) => DegreeColumns::Shared(TypedBuffer::from_vec(d)),
        };
        Ok(DegreesOutput { vertices, columns })
    }

    fn bfs(
        _ctx: &HostContext,
        graph: &CsrGraph,
        sources: &TypedBuffer,
        params: &BfsParams,
    ) -> Result<PathsOutput<Self>, EngineError> {
        let sources = Self::vertex_ids(graph, sources, "BFS sources")?;
        let out = algorithms::bfs(
            graph,
            &sources,
            params.depth_limit,
            params.compute_predecessors,
        )?;
        let distances = match &out.distances {
            algorithms::Distances::Hops(hops) => {
                TypedBuffer::from_i64_values(hops, graph.vertex_dtype())?
            }
            algorithms::Distances::Weighted(_) => {
                return Err(EngineError::Internal(
                    "BFS produced weighted distances".into(),
                ));
            }
        };
        Ok(PathsOutput {
            vertices: graph.ids_to_buffer(&out.vertices)?,
            distances,
            predecessors: out
                .predecessors
                .as_deref()
                .map(|p| graph.ids_to_buffer(p))
                .transpose()?,
        })
    }

    fn sssp(
        _ctx: &HostContext,
        graph: &CsrGraph,
        source: i64,
        params: &SsspParams,
    ) -> Result<PathsOutput<Self>, EngineError> {
        let out = algorithms::sssp(graph, source, params.cutoff, params.compute_predecessors)?;
        let distances = match &out.distances {
            algorithms::Distances::Weighted(d) => graph.values_to_buffer(d)?,
            algorithms::Distances::Hops(_) => {
                return Err(EngineError::Internal("SSSP produced hop distances".into()));
            }
        };
        Ok(PathsOutput {
            vertices: graph.ids_to_buffer(&out.vertices)?,
            distances,
            predecessors: out
                .predecessors
                .as_deref()
                .map(|p| graph.ids_to_buffer(p))
                .transpose()?,
        })
    }

    fn pagerank(
        _ctx: &HostContext,
        graph: &CsrGraph,
        params: &PagerankParams,
    ) -> Result<CentralityOutput<Self>, EngineError> {
        if params.do_expensive_check {
            for v in 0..graph.num_vertices() {
                for slot in graph.edge_range(v) {
                    let w = graph.weight(slot);
                    if !w.is_finite() || w < 0.0 {
                        return Err(EngineError::InvalidValue(format!(
                            "edge weight {w} is not a finite non-negative value"
                        )));
                    }
                }
            }
        }
        let out = algorithms::pagerank(graph, params.alpha, params.epsilon, params.max_iterations)?;
        Ok(CentralityOutput {
            vertices: graph.ids_to_buffer(&out.vertices)?,
            values: graph.values_to_buffer(&out.values)?,
            iterations: out.iterations,
            converged: out.converged,
        })
    }

    fn betweenness_centrality(
        _ctx: &HostContext,
        graph: &CsrGraph,
        params: &BetweennessParams,
    ) -> Result<CentralityOutput<Self>, EngineError> {
        let out = algorithms::betweenness_centrality(graph, params.normalized)?;
        Ok(CentralityOutput {
            vertices: graph.ids_to_buffer(&out.vertices)?,
            values: graph.values_to_buffer(&out.values)?,
            iterations: out.iterations,
            converged: out.converged,
        })
    }

    fn weakly_connected_components(
        _ctx: &HostContext,
        graph: &CsrGraph,
        _do_expensive_check: bool,
    ) -> Result<LabelingOutput<Self>, EngineError> {
        let out = algorithms::weakly_connected_components(graph)?;
        Ok(LabelingOutput {
            vertices: graph.ids_to_buffer(&out.vertices)?,
            labels: graph.ids_to_buffer(&out.labels)?,
        })
    }

    fn triangle_count(
        _ctx: &HostContext,
        graph: &CsrGraph,
        subset: Option<&TypedBuffer>,
        _do_expensive_check: bool,
    ) -> Result<ClusteringOutput<Self>, EngineError> {
        let subset_ids = subset
            .map(|buf| Self::vertex_ids(graph, buf, "vertex subset"))
            .transpose()?;
        let out = algorithms::triangle_count(graph, subset_ids.as_deref())?;
        Ok(ClusteringOutput {
            vertices: graph.ids_to_buffer(&out.vertices)?,
            counts: TypedBuffer::from_vec(out.counts),
        })
    }

    fn similarity(
        _ctx: &HostContext,
        graph: &CsrGraph,
        first: &TypedBuffer,
        second: &TypedBuffer,
        coefficient: SimilarityCoefficient,
        _do_expensive_check: bool,
    ) -> Result<SimilarityOutput<Self>, EngineError> {
        let first = Self::vertex_ids(graph, first, "first pair column")?;
        let second = Self::vertex_ids(graph, second, "second pair column")?;
        let engine_coefficient = match coefficient {
            SimilarityCoefficient::Jaccard => algorithms::SimilarityCoefficient::Jaccard,
            SimilarityCoefficient::Sorensen => algorithms::SimilarityCoefficient::Sorensen,
            SimilarityCoefficient::Overlap => algorithms::SimilarityCoefficient::Overlap,
        };
        let out = algorithms::similarity(graph, &first, &second, engine_coefficient)?;
        Ok(SimilarityOutput {
            first: graph.ids_to_buffer(&out.first)?,
            second: graph.ids_to_buffer(&out.second)?,
            coefficients: graph.values_to_buffer(&out.coefficients)?,
        })
    }

    fn uniform_neighbor_sample(
        _ctx: &HostContext,
        graph: &CsrGraph,
        starts: &TypedBuffer,
        fan_out: &[i32],
        params: &SamplingParams,
    ) -> Result<SamplingOutput<Self>, EngineError> {
        let starts = Self::vertex_ids(graph, starts, "sampling starts")?;
        let out = algorithms::uniform_neighbor_sample(
            graph,
            &starts,
            fan_out,
            params.with_replacement,
            params.random_seed,
        )?;
        Ok(SamplingOutput {
            sources: graph.ids_to_buffer(&out.sources)?,
            destinations: graph.ids_to_buffer(&out.destinations)?,
            weights: out
                .weights
                .as_deref()
                .map(|w| graph.values_to_buffer(w))
                .transpose()?,
            edge_ids: out.edge_ids.map(TypedBuffer::from_vec),
            hops: TypedBuffer::from_vec(out.hops),
        })
    }

    fn induced_subgraph(
        _ctx: &HostContext,
        graph: &CsrGraph,
        subgraph_offsets: &[usize],
        vertices: &TypedBuffer,
        _do_expensive_check: bool,
    ) -> Result<InducedSubgraphOutput<Self>, EngineError> {
        let vertices = Self::vertex_ids(graph, vertices, "subgraph vertices")?;
        let out = algorithms::induced_subgraph(graph, subgraph_offsets, &vertices)?;
        Ok(InducedSubgraphOutput {
            sources: graph.ids_to_buffer(&out.sources)?,
            destinations: graph.ids_to_buffer(&out.destinations)?,
            weights: out
                .weights
                .as_deref()
                .map(|w| graph.values_to_buffer(w))
                .transpose()?,
            subgraph_offsets: TypedBuffer::from_vec(out.subgraph_offsets),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_status_translation_is_total_and_never_success() {
        let failures = [
            EngineError::OutOfMemory("m".into()),
            EngineError::InvalidValue("m".into()),
            EngineError::IndexOutOfBounds("m".into()),
            EngineError::UnsupportedType("m".into()),
            EngineError::NotSupported("m".into()),
            EngineError::Internal("m".into()),
        ];
        for failure in &failures {
            assert_ne!(failure.status(), Status::Success);
        }
        assert_eq!(
            EngineError::OutOfMemory("m".into()).status(),
            Status::AllocError
        );
        assert_eq!(
            EngineError::Internal("m".into()).status(),
            Status::UnknownError
        );
        assert_eq!(
            EngineError::NotSupported("m".into()).status(),
            Status::NotImplemented
        );
    }

    #[test]
    fn context_reports_trivial_group() {
        let ctx = HostBackend::create_context(None).unwrap();
        assert_eq!(HostBackend::rank(&ctx), 0);
        assert_eq!(HostBackend::comm_size(&ctx), 1);
        assert_eq!(ctx.device(), 0);

        let ctx = HostBackend::create_context(Some(3)).unwrap();
        assert_eq!(ctx.device(), 3);
    }

    #[test]
    fn subset_dtype_must_match_graph() {
        let ctx = HostBackend::create_context(None).unwrap();
        let src = TypedBuffer::from_vec(vec![0i32, 1]);
        let dst = TypedBuffer::from_vec(vec![1i32, 0]);
        let graph = HostBackend::graph_from_edge_list(
            &ctx,
            GraphProperties::default(),
            EdgeListRefs {
                src: &src,
                dst: &dst,
                weights: None,
                edge_ids: None,
                edge_types: None,
            },
            GraphFlags::default(),
        )
        .unwrap();

        let subset = TypedBuffer::from_vec(vec![0i64]);
        let err = HostBackend::degrees(&ctx, &graph, Some(&subset), DegreeKind::Combined, false)
            .unwrap_err();
        assert_eq!(err.status(), Status::InvalidInput);
    }
}
