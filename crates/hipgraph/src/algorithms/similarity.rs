//! Similarity coefficients over vertex pairs.

use hipgraph_backends::SimilarityCoefficient;
use hipgraph_common::utils::error::Result;

use crate::array::ArrayView;
use crate::graph::Graph;
use crate::resource::ResourceHandle;
use crate::{Backend, BackendBuffer, GraphBackend, translate};

/// Owning result of a similarity computation.
pub struct SimilarityResult {
    first: BackendBuffer,
    second: BackendBuffer,
    coefficients: BackendBuffer,
}

impl SimilarityResult {
    /// First vertex of each pair.
    #[must_use]
    pub fn first(&self) -> ArrayView<'_> {
        ArrayView::of(&self.first)
    }

    /// Second vertex of each pair.
    #[must_use]
    pub fn second(&self) -> ArrayView<'_> {
        ArrayView::of(&self.second)
    }

    /// Coefficient per pair, in the graph's weight dtype.
    #[must_use]
    pub fn coefficients(&self) -> ArrayView<'_> {
        ArrayView::of(&self.coefficients)
    }
}

fn run(
    handle: &ResourceHandle,
    graph: &Graph,
    first: &ArrayView<'_>,
    second: &ArrayView<'_>,
    coefficient: SimilarityCoefficient,
    do_expensive_check: bool,
) -> Result<SimilarityResult> {
    let out = Backend::similarity(
        handle.ctx(),
        graph.inner(),
        first.buffer(),
        second.buffer(),
        coefficient,
        do_expensive_check,
    )
    .map_err(translate::backend_error)?;
    Ok(SimilarityResult {
        first: out.first,
        second: out.second,
        coefficients: out.coefficients,
    })
}

/// Jaccard coefficient for each vertex pair.
pub fn jaccard(
    handle: &ResourceHandle,
    graph: &Graph,
    first: &ArrayView<'_>,
    second: &ArrayView<'_>,
    do_expensive_check: bool,
) -> Result<SimilarityResult> {
    run(
        handle,
        graph,
        first,
        second,
        SimilarityCoefficient::Jaccard,
        do_expensive_check,
    )
}

/// Sorensen coefficient for each vertex pair.
pub fn sorensen(
    handle: &ResourceHandle,
    graph: &Graph,
    first: &ArrayView<'_>,
    second: &ArrayView<'_>,
    do_expensive_check: bool,
) -> Result<SimilarityResult> {
    run(
        handle,
        graph,
        first,
        second,
        SimilarityCoefficient::Sorensen,
        do_expensive_check,
    )
}

/// Overlap coefficient for each vertex pair.
pub fn overlap(
    handle: &ResourceHandle,
    graph: &Graph,
    first: &ArrayView<'_>,
    second: &ArrayView<'_>,
    do_expensive_check: bool,
) -> Result<SimilarityResult> {
    run(
        handle,
        graph,
        first,
        second,
        SimilarityCoefficient::Overlap,
        do_expensive_check,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceArray, GraphFlags, GraphProperties};

    #[test]
    fn jaccard_on_shared_neighborhood() {
        let h = ResourceHandle::new().unwrap();
        // 0 and 2 both neighbor exactly {1}.
        let src = DeviceArray::from_slice(&h, &[0i32, 2]).unwrap();
        let dst = DeviceArray::from_slice(&h, &[1i32, 1]).unwrap();
        let graph = Graph::from_edge_list(
            &h,
            GraphProperties::default(),
            GraphFlags::default(),
            &src.view(),
            &dst.view(),
            None,
            None,
            None,
        )
        .unwrap();
        let first = DeviceArray::from_slice(&h, &[0i32]).unwrap();
        let second = DeviceArray::from_slice(&h, &[2i32]).unwrap();
        let result = jaccard(&h, &graph, &first.view(), &second.view(), false).unwrap();
        assert_eq!(
            result.coefficients().to_vec::<f64>(&h).unwrap(),
            vec![1.0]
        );
        assert_eq!(result.first().to_vec::<i32>(&h).unwrap(), vec![0]);
        assert_eq!(result.second().to_vec::<i32>(&h).unwrap(), vec![2]);
    }
}
