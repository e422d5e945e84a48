//! Round-robin shard assignment
//!
//! Partitions a drained transaction list into a fixed number of shards.
//! The assignment is static round-robin by submission position, which
//! guarantees even load distribution regardless of transaction content
//! but gives no semantic locality.

use crate::transaction::Transaction;

#[derive(Debug, Clone, Copy)]
pub struct ShardAssigner {
    shard_count: u32,
}

impl ShardAssigner {
    pub fn new(shard_count: u32) -> Self {
        debug_assert!(shard_count > 0, "shard_count must be nonzero");
        Self { shard_count }
    }

    pub fn shard_count(&self) -> u32 {
        self.shard_count
    }

    /// Assign transaction at position `i` (submission order) to shard
    /// `i mod shard_count`. Relative order within each shard is preserved.
    pub fn assign(&self, transactions: Vec<Transaction>) -> Vec<Vec<Transaction>> {
        let mut shards: Vec<Vec<Transaction>> = vec![Vec::new(); self.shard_count as usize];
        for (i, tx) in transactions.into_iter().enumerate() {
            shards[i % self.shard_count as usize].push(tx);
        }
        shards
    }
}
