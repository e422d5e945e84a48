use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::block::{now_timestamp, Block, GENESIS_PREVIOUS_HASH};
use crate::blockchain::core::state::{DifficultyPolicy, SupplyState};
use crate::blockchain::core::validation::{verify_chain, verify_chain_strict};
use crate::config::ChainConfig;
use crate::crypto;
use crate::economics::block_reward;
use crate::mempool::TransactionPool;
use crate::miner::mine_block;
use crate::shard::ShardAssigner;
use crate::transaction::Transaction;

/// Recipient stamped on engine-minted reward transactions.
pub const REWARD_RECIPIENT: &str = "Miner";

/// Result of a mining pass over the pending pool.
#[derive(Debug, Clone, PartialEq)]
pub enum MineOutcome {
    /// The pending pool was empty; nothing changed.
    NothingPending,
    Mined(MiningReport),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiningReport {
    pub blocks_appended: usize,
    pub elapsed: Duration,
}

impl MiningReport {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl std::fmt::Display for MiningReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mined {} blocks in {:.2}s",
            self.blocks_appended,
            self.elapsed_seconds()
        )
    }
}

/// Outcome of the checked submission path.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(String),
}

impl SubmitOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Handle for embedding the ledger behind a single mutual-exclusion
/// boundary. The engine is single-threaded and non-reentrant: `mine` must
/// run to completion before any other mutating call is observed, so
/// concurrent callers serialize on this one lock.
pub type SharedLedger = Arc<Mutex<Ledger>>;

/// The sharded proof-of-work ledger.
///
/// Owns the chain, the pending pool, the shard assigner, and the supply
/// and difficulty state. One instance per session; `reset` swaps in a
/// fresh genesis-only ledger, there is no partial rollback.
pub struct Ledger {
    pub chain: Vec<Block>,
    pub mempool: TransactionPool,
    assigner: ShardAssigner,
    difficulty: u32,
    policy: DifficultyPolicy,
    supply: SupplyState,
    config: ChainConfig,
}

impl Ledger {
    pub fn new(config: ChainConfig) -> Self {
        let genesis = Block::new(
            0,
            GENESIS_PREVIOUS_HASH.to_string(),
            now_timestamp(),
            vec![Transaction::Genesis {
                note: config.genesis_note.clone(),
            }],
            0,
        );

        Ledger {
            chain: vec![genesis],
            mempool: TransactionPool::new(),
            assigner: ShardAssigner::new(config.shard_count),
            difficulty: config.difficulty.initial,
            policy: DifficultyPolicy {
                min: config.difficulty.min,
                max: config.difficulty.max,
            },
            supply: SupplyState::new(config.supply.total, config.supply.genesis),
            config,
        }
    }

    /// Wrap the ledger in the single-writer boundary for concurrent use.
    pub fn into_shared(self) -> SharedLedger {
        Arc::new(Mutex::new(self))
    }

    pub fn latest_block(&self) -> &Block {
        self.chain.last().expect("chain always holds genesis")
    }

    /// Enqueue a transfer. No account or balance model exists, so the
    /// sender and recipient are opaque identifiers and nothing is
    /// validated here.
    pub fn add_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: f64,
    ) {
        self.mempool
            .add(Transaction::transfer(sender, recipient, amount));
    }

    /// Stricter submission variant paired with the convenience hash
    /// collaborator: the transfer is enqueued only when `secret`
    /// re-derives to `sender_address`. A mismatch is a rejected result,
    /// never an error, and the transaction is simply not enqueued.
    pub fn add_transaction_checked(
        &mut self,
        sender_address: &str,
        secret: &str,
        recipient: impl Into<String>,
        amount: f64,
    ) -> SubmitOutcome {
        if !crypto::verify_secret(sender_address, secret) {
            return SubmitOutcome::Rejected(format!(
                "secret does not match sender address {}",
                sender_address
            ));
        }
        self.add_transaction(sender_address.to_string(), recipient, amount);
        SubmitOutcome::Accepted
    }

    /// Enqueue an asset registration. The engine carries the fields
    /// opaquely; they only ever influence the block hash.
    pub fn register_asset(
        &mut self,
        owner: impl Into<String>,
        name: impl Into<String>,
        metadata: impl Into<String>,
    ) {
        self.mempool.add(Transaction::AssetRegistration {
            owner: owner.into(),
            name: name.into(),
            metadata: metadata.into(),
        });
    }

    /// Run one mining pass over the pending pool.
    ///
    /// Drains the pool, partitions it round-robin, and mines one block per
    /// non-empty shard in shard-id order. Each shard mines against the
    /// current chain tip, so blocks minted in one pass form a strict
    /// sequential chain rather than a fan-out from a single parent;
    /// reordering the shards would change every hash downstream. Empty
    /// shards are skipped entirely, no empty blocks exist.
    pub fn mine(&mut self) -> MineOutcome {
        if self.mempool.is_empty() {
            return MineOutcome::NothingPending;
        }

        let started = Instant::now();
        let shards = self.assigner.assign(self.mempool.drain());

        let mut blocks_appended = 0;
        for (shard_id, mut transactions) in shards.into_iter().enumerate() {
            if transactions.is_empty() {
                continue;
            }

            // Reward minting must precede the nonce search: the reward
            // transaction is part of the hashed block contents.
            let reward = block_reward(
                self.chain.len() as u64,
                self.config.reward.base,
                self.config.reward.halving_interval,
            );
            if self.supply.try_mint(reward) {
                transactions.insert(0, Transaction::reward(REWARD_RECIPIENT, reward));
            } else {
                log::warn!(
                    "supply cap reached ({}/{}); shard {} block mined without a reward",
                    self.supply.current(),
                    self.supply.total(),
                    shard_id
                );
            }

            let candidate = Block::new(
                self.chain.len() as u64,
                self.latest_block().hash.clone(),
                now_timestamp(),
                transactions,
                shard_id as u32,
            );
            let sealed = mine_block(candidate, self.difficulty);
            log::info!(
                "mined block {} (shard {}) nonce={} hash={}",
                sealed.index,
                shard_id,
                sealed.nonce,
                &sealed.hash[..12]
            );
            self.chain.push(sealed);
            blocks_appended += 1;
        }

        let previous = self.difficulty;
        self.difficulty = self.policy.adjust(self.difficulty, self.chain.len() as u64);
        if self.difficulty != previous {
            log::info!(
                "difficulty adjusted {} -> {} at chain length {}",
                previous,
                self.difficulty,
                self.chain.len()
            );
        }

        MineOutcome::Mined(MiningReport {
            blocks_appended,
            elapsed: started.elapsed(),
        })
    }

    /// Recompute-and-link scan of the whole chain; see
    /// [`verify_chain`](crate::blockchain::core::validation::verify_chain).
    pub fn is_chain_valid(&self) -> bool {
        verify_chain(&self.chain)
    }

    /// Also re-checks proof-of-work against the configured minimum
    /// difficulty.
    pub fn is_chain_valid_strict(&self) -> bool {
        verify_chain_strict(&self.chain, self.policy.min)
    }

    /// Replace this ledger with a fresh genesis-only instance built from
    /// the same configuration. Old state is discarded wholesale.
    pub fn reset(&mut self) {
        *self = Ledger::new(self.config.clone());
    }

    pub fn pending_len(&self) -> usize {
        self.mempool.len()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn shard_count(&self) -> u32 {
        self.assigner.shard_count()
    }

    pub fn current_supply(&self) -> f64 {
        self.supply.current()
    }

    pub fn total_supply(&self) -> f64 {
        self.supply.total()
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}
