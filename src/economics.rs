//! Economics module: diminishing-issuance reward schedule
//!
//! The per-block reward halves every `halving_interval` blocks, mirroring
//! a Bitcoin-style issuance curve. Total minted reward is capped by the
//! ledger's configured supply; the cap itself is enforced by the supply
//! state, not here.

/// Reward for the block at `chain_len` (the next block's height).
///
/// `base_reward / 2^(chain_len / halving_interval)`, collapsing to zero
/// after 64 halvings where the shift would overflow.
pub fn block_reward(chain_len: u64, base_reward: f64, halving_interval: u64) -> f64 {
    let halving_count = chain_len / halving_interval;
    if halving_count >= 64 {
        0.0
    } else {
        base_reward / (1u64 << halving_count) as f64
    }
}
