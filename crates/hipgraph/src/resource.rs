//! Resource handles.
//!
//! A [`ResourceHandle`] is the prerequisite for every other protocol object:
//! arrays, graphs, and algorithm calls all borrow one. It wraps the active
//! backend's compute context. Contexts are per-device process-wide: two
//! handles created for the same device share one backend context, which is
//! how the "construct a default context internally" contract behaves without
//! duplicating device state.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use hipgraph_common::utils::error::Result;
use hipgraph_common::utils::hash::FxHashMap;

use crate::{Backend, BackendContext, GraphBackend, translate};

/// The device ordinal used when the caller supplies none.
const DEFAULT_DEVICE: usize = 0;

static CONTEXTS: OnceLock<RwLock<FxHashMap<usize, Arc<BackendContext>>>> = OnceLock::new();

fn context_for(device: Option<usize>) -> Result<Arc<BackendContext>> {
    let key = device.unwrap_or(DEFAULT_DEVICE);
    let registry = CONTEXTS.get_or_init(|| RwLock::new(FxHashMap::default()));

    if let Some(ctx) = registry.read().get(&key) {
        return Ok(Arc::clone(ctx));
    }

    let ctx = Arc::new(Backend::create_context(device).map_err(translate::backend_error)?);
    debug!(backend = Backend::name(), device = key, "created compute context");
    // Another thread may have raced us here; first writer wins.
    Ok(Arc::clone(
        registry.write().entry(key).or_insert(ctx),
    ))
}

/// An owning handle to compute resources.
///
/// Not clonable: the caller holds exactly one owning value, and every other
/// call borrows it immutably. Dropping the handle releases it; the
/// underlying per-device context stays cached for the process lifetime.
pub struct ResourceHandle {
    ctx: Arc<BackendContext>,
    device: usize,
}

impl ResourceHandle {
    /// Creates a handle on the process-default device.
    pub fn new() -> Result<Self> {
        Self::with_device(None)
    }

    /// Creates a handle on a specific device ordinal, or the process
    /// default when `None`.
    pub fn with_device(device: Option<usize>) -> Result<Self> {
        Ok(Self {
            ctx: context_for(device)?,
            device: device.unwrap_or(DEFAULT_DEVICE),
        })
    }

    /// Rank of this process within its compute group. Single-process
    /// configurations always observe 0.
    #[must_use]
    pub fn rank(&self) -> i32 {
        Backend::rank(&self.ctx)
    }

    /// Size of the compute group. Single-process configurations always
    /// observe 1.
    #[must_use]
    pub fn comm_size(&self) -> i32 {
        Backend::comm_size(&self.ctx)
    }

    /// The device ordinal this handle was created for.
    #[must_use]
    pub fn device(&self) -> usize {
        self.device
    }

    /// Name of the backend compiled into this build.
    #[must_use]
    pub fn backend_name() -> &'static str {
        Backend::name()
    }

    pub(crate) fn ctx(&self) -> &BackendContext {
        &self.ctx
    }
}

impl std::fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("backend", &Backend::name())
            .field("device", &self.device)
            .field("rank", &self.rank())
            .field("comm_size", &self.comm_size())
            .finish()
    }
}
