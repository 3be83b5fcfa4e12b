//! # Types
//!
//! Shared data structures used across the modules of the FundMe contract.
//!
//! ## Design decisions
//!
//! ### Price data
//!
//! [`RoundData`] is the wire shape returned by the external price feed. The
//! contract only consumes `answer`; `round_id` and `updated_at` are carried so
//! that off-chain tooling can correlate a contribution with the feed round that
//! priced it.
//!
//! ### Settlement strategy
//!
//! `withdraw` and `withdraw_optimized` are one contract with two ways of walking
//! the contributor set. [`WithdrawStrategy`] names the walk:
//!
//! ```text
//! Direct ──► read index i of the stored set on every iteration
//! Cached ──► load the stored set into a local Vec once, then iterate the copy
//! ```
//!
//! Both end in the same state; the strategy is recorded in the `withdrawn`
//! event.

use soroban_sdk::contracttype;

/// Latest round reported by a price feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    /// Price of one native unit in the reference currency, scaled by the
    /// feed's `decimals()`.
    pub answer: i128,
    /// Ledger timestamp of the round. Not checked for staleness here.
    pub updated_at: u64,
}

/// A validated exchange rate fetched for a single contribution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rate {
    /// Strictly positive.
    pub answer: i128,
    pub decimals: u32,
}

/// How settlement walks the contributor set.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WithdrawStrategy {
    /// Look up each contributor in storage inside the loop.
    Direct,
    /// Copy the contributor set into memory before the loop.
    Cached,
}
