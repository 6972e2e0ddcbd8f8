use dashmap::DashMap;
use rand::{rngs::StdRng, SeedableRng};

use crate::world::types::AntId;

/// Per-ant memory, created on first use and kept until forgotten.
///
/// Backed by a sharded map: a decision holds its shard's lock for the whole
/// call, so two decisions for the same ant are serialised while ants living
/// in other shards proceed in parallel.
#[derive(Debug)]
pub struct MemoryStore<M> {
    memories: DashMap<AntId, M>,
}

impl<M> MemoryStore<M> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            memories: DashMap::new(),
        }
    }

    /// Runs `f` against the ant's memory, creating it with `init` if this
    /// is the first time the ant has been seen.
    pub fn with<R>(
        &self,
        ant_id: AntId,
        init: impl FnOnce() -> M,
        f: impl FnOnce(&mut M) -> R,
    ) -> R {
        let mut memory = self.memories.entry(ant_id).or_insert_with(init);
        f(memory.value_mut())
    }

    /// Drops an ant's memory. Returns whether there was anything to drop.
    pub fn forget(&self, ant_id: AntId) -> bool {
        self.memories.remove(&ant_id).is_some()
    }

    #[must_use]
    pub fn contains(&self, ant_id: AntId) -> bool {
        self.memories.contains_key(&ant_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.memories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }
}

impl<M: Clone> MemoryStore<M> {
    /// Copy of an ant's memory, for inspection.
    #[must_use]
    pub fn snapshot(&self, ant_id: AntId) -> Option<M> {
        self.memories.get(&ant_id).map(|memory| memory.value().clone())
    }
}

impl<M> Default for MemoryStore<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Each ant gets its own stream so draws don't depend on the order in
/// which the scheduler visits ants.
#[must_use]
pub fn ant_rng(seed: Option<u64>, ant_id: AntId) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(
            seed ^ ant_id.wrapping_mul(0x9E37_79B9_7F4A_7C15),
        ),
        None => StdRng::from_os_rng(),
    }
}
