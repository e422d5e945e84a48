// Thin re-export module: implementation is in `blockchain/core.rs` to allow
// progressive decomposition of ledger responsibilities (orchestration,
// supply/difficulty state, validation).

pub mod core;
pub use core::*;
