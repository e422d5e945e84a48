//! Pending-transaction pool
//!
//! The pool holds unconfirmed transactions in submission order until a
//! mining pass drains them. There is no account or balance model, so no
//! validation of sender/recipient existence or spendable balance happens
//! here; that is an explicit simplification of this engine.

use crate::transaction::Transaction;

#[derive(Debug, Clone, Default)]
pub struct TransactionPool {
    pending: Vec<Transaction>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction in call order.
    pub fn add(&mut self, tx: Transaction) {
        self.pending.push(tx);
    }

    /// Atomically take the current ordered list and empty the pool.
    ///
    /// Called exactly once per mining pass; transactions submitted after
    /// the drain land in the next pass instead of being lost.
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_submission_order() {
        let mut pool = TransactionPool::new();
        pool.add(Transaction::transfer("a", "b", 1.0));
        pool.add(Transaction::transfer("c", "d", 2.0));
        pool.add(Transaction::transfer("e", "f", 3.0));

        let amounts: Vec<f64> = pool.iter().filter_map(|tx| tx.amount()).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn drain_empties_the_pool() {
        let mut pool = TransactionPool::new();
        pool.add(Transaction::transfer("a", "b", 1.0));
        pool.add(Transaction::transfer("c", "d", 2.0));

        let drained = pool.drain();
        assert_eq!(drained.len(), 2);
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);

        // A second drain yields nothing.
        assert!(pool.drain().is_empty());
    }
}
