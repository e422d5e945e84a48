//! Block structure and canonical hashing

use crate::transaction::Transaction;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Sentinel `previous_hash` carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Current wall-clock time in fractional seconds.
pub fn now_timestamp() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// A block in the ledger.
///
/// `hash` is a lowercase hex SHA-256 digest over the other six fields and
/// is recomputed whenever `nonce` changes during mining. All other fields
/// are fixed at construction.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Block {
    pub index: u64,
    pub previous_hash: String,
    pub timestamp: f64,
    pub transactions: Vec<Transaction>,
    pub shard_id: u32,
    pub nonce: u64,
    pub hash: String,
}

impl Block {
    pub fn new(
        index: u64,
        previous_hash: String,
        timestamp: f64,
        transactions: Vec<Transaction>,
        shard_id: u32,
    ) -> Self {
        let mut block = Block {
            index,
            previous_hash,
            timestamp,
            transactions,
            shard_id,
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.compute_hash();
        block
    }

    /// Digest of the block contents, excluding the stored `hash` itself.
    ///
    /// The six fields are serialized as a JSON object; serde_json's default
    /// map is BTreeMap-backed, so object keys come out lexicographically
    /// sorted at every nesting level and floats use the shortest
    /// round-trip textual form. The digest is therefore stable across
    /// platforms and across recomputations.
    pub fn compute_hash(&self) -> String {
        let payload = json!({
            "index": self.index,
            "previous_hash": self.previous_hash,
            "timestamp": self.timestamp,
            "transactions": self.transactions,
            "shard_id": self.shard_id,
            "nonce": self.nonce,
        });
        let mut hasher = Sha256::new();
        hasher.update(payload.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Refresh the stored hash after a field mutation (nonce bumps during
    /// mining). Never leaves a stale cache behind.
    pub fn recompute_hash(&mut self) {
        self.hash = self.compute_hash();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> Block {
        Block::new(
            1,
            "abc123".to_string(),
            1_700_000_000.25,
            vec![
                Transaction::transfer("Investor", "Akshay", 100.0),
                Transaction::transfer("Akshay", "Bob", 2.5),
            ],
            0,
        )
    }

    #[test]
    fn hash_is_deterministic() {
        let block = sample_block();
        assert_eq!(block.hash, block.compute_hash());
        assert_eq!(block.compute_hash(), block.compute_hash());
    }

    #[test]
    fn hash_is_lowercase_hex() {
        let block = sample_block();
        assert_eq!(block.hash.len(), 64);
        assert!(block
            .hash
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn nonce_change_changes_hash() {
        let mut block = sample_block();
        let before = block.hash.clone();
        block.nonce += 1;
        block.recompute_hash();
        assert_ne!(before, block.hash);
    }

    #[test]
    fn each_field_affects_hash() {
        let base = sample_block();

        let mut b = base.clone();
        b.index = 2;
        assert_ne!(base.compute_hash(), b.compute_hash());

        let mut b = base.clone();
        b.previous_hash = "def456".to_string();
        assert_ne!(base.compute_hash(), b.compute_hash());

        let mut b = base.clone();
        b.timestamp += 0.001;
        assert_ne!(base.compute_hash(), b.compute_hash());

        let mut b = base.clone();
        b.shard_id = 3;
        assert_ne!(base.compute_hash(), b.compute_hash());
    }

    #[test]
    fn transaction_order_affects_hash() {
        let base = sample_block();
        let mut reordered = base.clone();
        reordered.transactions.reverse();
        assert_ne!(base.compute_hash(), reordered.compute_hash());
    }

    #[test]
    fn identical_fields_hash_identically() {
        let a = sample_block();
        let b = Block::new(
            a.index,
            a.previous_hash.clone(),
            a.timestamp,
            a.transactions.clone(),
            a.shard_id,
        );
        assert_eq!(a.hash, b.hash);
    }
}
