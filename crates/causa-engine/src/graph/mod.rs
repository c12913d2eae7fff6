//! Link storage: the petgraph-backed arena, its thread-safe handle, and
//! integrity checks.

pub mod consistency;
pub mod link_store;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use causa_core::errors::{CausaError, CausaResult};

pub use link_store::{ConceptNode, LinkEdge, LinkGraph, LinkStore};

/// Thread-safe handle to the link store.
///
/// Queries take the read lock, mutations the write lock. Interventions only
/// read, so concurrent what-if queries never observe each other.
#[derive(Debug, Clone, Default)]
pub struct GraphManager {
    store: Arc<RwLock<LinkStore>>,
}

impl GraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> CausaResult<RwLockReadGuard<'_, LinkStore>> {
        self.store
            .read()
            .map_err(|e| CausaError::ConcurrencyError(e.to_string()))
    }

    pub fn write(&self) -> CausaResult<RwLockWriteGuard<'_, LinkStore>> {
        self.store
            .write()
            .map_err(|e| CausaError::ConcurrencyError(e.to_string()))
    }

    pub fn node_count(&self) -> CausaResult<usize> {
        Ok(self.read()?.node_count())
    }

    pub fn link_count(&self) -> CausaResult<usize> {
        Ok(self.read()?.link_count())
    }
}
