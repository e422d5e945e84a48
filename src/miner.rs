//! Proof-of-work mining
//!
//! The search is an unbounded linear scan over nonces: increment, rehash,
//! test. For the supported difficulty range the expected search size is
//! `16^difficulty` attempts, so wall-clock time is bounded by capping the
//! configured difficulty, never by a retry-with-failure policy; the search
//! always terminates with a sealed block. A cancellable variant exists for
//! embedders that need to bound the search externally.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::block::Block;
use crate::error::{ChainError, Result};

/// True when `hash` has at least `difficulty` leading hex-zero characters.
pub fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
    let needed = difficulty as usize;
    hash.len() >= needed && hash.bytes().take(needed).all(|b| b == b'0')
}

/// Brute-force the nonce until the block's hash meets `difficulty`.
///
/// Starts from the block's current nonce. Tight, blocking CPU loop with no
/// suspension point; callers must not expect it to yield.
pub fn search_nonce(block: &mut Block, difficulty: u32) {
    while !meets_difficulty(&block.hash, difficulty) {
        block.nonce += 1;
        block.recompute_hash();
    }
}

/// Seal a candidate block at the given difficulty.
pub fn mine_block(mut block: Block, difficulty: u32) -> Block {
    search_nonce(&mut block, difficulty);
    block
}

/// Cloneable cancellation handle for [`mine_block_cancellable`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Like [`mine_block`], but checks the token between attempts and bails
/// out with [`ChainError::MiningCancelled`] once it trips.
pub fn mine_block_cancellable(
    mut block: Block,
    difficulty: u32,
    cancel: &CancelToken,
) -> Result<Block> {
    while !meets_difficulty(&block.hash, difficulty) {
        if cancel.is_cancelled() {
            return Err(ChainError::MiningCancelled);
        }
        block.nonce += 1;
        block.recompute_hash();
    }
    Ok(block)
}
