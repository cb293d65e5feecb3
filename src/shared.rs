//! Process-scoped state shared between formatters.

use std::sync::{Arc, OnceLock};

use crate::buffer_pool::BufferPool;
use crate::color_assigner::ColorAssigner;
use crate::stack_trace::StackTracePolicy;

/// Caches that outlive any single formatter.
///
/// Formatters built from the same `SharedCaches` agree on tag colors, reuse
/// the same buffers and see each other's stack-trace overrides. Use
/// [`SharedCaches::global`] for the process-wide instance, or construct one
/// directly to keep state isolated (tests, embedded hosts).
#[derive(Debug, Default)]
pub struct SharedCaches {
    pub colors: ColorAssigner,
    pub buffers: BufferPool,
    pub stack_traces: StackTracePolicy,
}

impl SharedCaches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide caches, created on first use and kept until exit.
    pub fn global() -> Arc<SharedCaches> {
        static GLOBAL: OnceLock<Arc<SharedCaches>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(SharedCaches::new())))
    }
}
