//! Supply and difficulty bookkeeping for the ledger

/// Difficulty is bumped when the chain length reaches a multiple of this.
pub const DIFFICULTY_ADJUSTMENT_INTERVAL: u64 = 5;

/// Running total of minted reward against the configured cap.
#[derive(Debug, Clone)]
pub struct SupplyState {
    total: f64,
    current: f64,
}

impl SupplyState {
    pub fn new(total: f64, genesis: f64) -> Self {
        Self {
            total,
            current: genesis,
        }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn remaining(&self) -> f64 {
        self.total - self.current
    }

    /// Mint `reward` if the cap allows it. Returns false without touching
    /// the running total when minting would exceed the cap; the caller
    /// then seals its block without a reward transaction.
    pub fn try_mint(&mut self, reward: f64) -> bool {
        if self.current + reward > self.total {
            return false;
        }
        self.current += reward;
        true
    }
}

/// Clamped, monotone difficulty adjustment.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyPolicy {
    pub min: u32,
    pub max: u32,
}

impl DifficultyPolicy {
    /// Bump by one when `chain_len` hits the adjustment interval, clamped
    /// to `[min, max]`. Difficulty never decreases automatically.
    pub fn adjust(&self, current: u32, chain_len: u64) -> u32 {
        let bumped = if chain_len % DIFFICULTY_ADJUSTMENT_INTERVAL == 0 {
            current + 1
        } else {
            current
        };
        bumped.clamp(self.min, self.max)
    }
}
