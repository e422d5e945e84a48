//! Full-chain integrity verification

use crate::block::Block;
use crate::miner::meets_difficulty;

/// Scan blocks from index 1 to the end, recomputing each block's hash from
/// its stored fields and checking linkage to its predecessor. Returns
/// false on the first mismatch. Read-only and idempotent; historical
/// proof-of-work is not re-verified here.
pub fn verify_chain(chain: &[Block]) -> bool {
    for i in 1..chain.len() {
        let current = &chain[i];
        let previous = &chain[i - 1];
        if current.hash != current.compute_hash() || current.previous_hash != previous.hash {
            return false;
        }
    }
    true
}

/// Like [`verify_chain`], but additionally requires every non-genesis
/// block's hash to meet `min_difficulty`. Since difficulty never drops
/// below the configured minimum, this is a sound (if conservative)
/// retroactive proof-of-work check.
pub fn verify_chain_strict(chain: &[Block], min_difficulty: u32) -> bool {
    verify_chain(chain)
        && chain
            .iter()
            .skip(1)
            .all(|block| meets_difficulty(&block.hash, min_difficulty))
}
