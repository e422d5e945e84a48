//! AUMChain - a sharded proof-of-work ledger simulation
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Core Ledger
//! - [`blockchain`] - Ledger orchestration, supply/difficulty state, validation
//! - [`transaction`] - Transaction types
//! - [`block`] - Block structure and canonical hashing
//! - [`mempool`] - Pending-transaction pool
//!
//! ## Consensus
//! - [`miner`] - Proof-of-work nonce search
//! - [`shard`] - Round-robin shard assignment
//! - [`economics`] - Reward halving schedule
//!
//! ## Collaborators
//! - [`crypto`] - Convenience address hashing (non-cryptographic demo)
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod block;
pub mod blockchain;
pub mod mempool;
pub mod transaction;

// ============================================================================
// Consensus & Mining
// ============================================================================
pub mod economics;
pub mod miner;
pub mod shard;

// ============================================================================
// Collaborators
// ============================================================================
pub mod crypto;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
