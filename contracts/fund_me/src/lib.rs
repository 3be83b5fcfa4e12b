//! # FundMe Contract
//!
//! A custodial contribution pool. Anyone may contribute native value as long
//! as it is worth at least [`MINIMUM_REFERENCE_AMOUNT`] in the reference
//! currency at the current oracle rate; the single owner sweeps the whole pool
//! out in one settlement.
//!
//! | Phase      | Entry Point(s)                                           |
//! |------------|----------------------------------------------------------|
//! | Deployment | `__constructor`                                          |
//! | Funding    | [`FundMe::contribute`]                                   |
//! | Settlement | [`FundMe::withdraw`], [`FundMe::withdraw_optimized`]     |
//! | Queries    | `owner`, `price_feed`, `contributed_amount`, `contributor`, `contributors`, `pooled_balance`, `quote` |
//!
//! ## Architecture
//!
//! Pricing is delegated to [`oracle`] and [`conversion`]. The owner guard is
//! [`access`]. Storage access is fully delegated to [`storage`]. This file
//! holds the public entry points, the settlement walk, and event emissions.
//!
//! ## Atomicity
//!
//! Every fallible entry point returns `Result<_, Error>`. The host discards all
//! storage writes of an invocation that returns `Err`, and each entry point is
//! also ordered so that the external transfer happens before any ledger write.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};

pub mod access;
pub mod conversion;
pub mod events;
pub mod oracle;
mod storage;
mod types;

#[cfg(test)]
mod invariants;

pub use conversion::{MINIMUM_REFERENCE_AMOUNT, REFERENCE_DECIMALS};
pub use oracle::{PriceFeed, PriceFeedClient};
pub use types::{Rate, RoundData, WithdrawStrategy};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientContribution = 1,
    NotOwner = 2,
    TransferFailed = 3,
    OracleUnavailable = 4,
    InvalidRate = 5,
    IndexOutOfRange = 6,
    InvalidAmount = 7,
    Overflow = 8,
}

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    // ─────────────────────────────────────────────────────────
    // Deployment
    // ─────────────────────────────────────────────────────────

    /// Fix the owner, the price feed and the native token for the lifetime of
    /// the deployment.
    ///
    /// The native token's `decimals()` is read once here and reused by every
    /// conversion.
    pub fn __constructor(env: Env, owner: Address, price_feed: Address, native_token: Address) {
        let native_decimals = token::Client::new(&env, &native_token).decimals();
        storage::init_config(&env, &owner, &price_feed, &native_token, native_decimals);
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the native token to the pool.
    ///
    /// - `contributor` must authorize and hold at least `amount`.
    /// - The amount is priced against a freshly fetched oracle rate and must be
    ///   worth at least `MINIMUM_REFERENCE_AMOUNT`.
    /// - A first contribution in the current cycle appends `contributor` to the
    ///   contributor set.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), Error> {
        contributor.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let reference_amount = Self::reference_amount(&env, amount)?;
        if !conversion::meets_minimum(reference_amount) {
            return Err(Error::InsufficientContribution);
        }

        // Compute every new value before touching storage.
        let mut contributions = storage::load_contributions(&env);
        let previous = contributions.get(contributor.clone());
        let total_contributed = previous
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let pooled = storage::get_pooled_balance(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        Self::transfer(
            &env,
            &contributor,
            &env.current_contract_address(),
            amount,
        )?;

        contributions.set(contributor.clone(), total_contributed);
        storage::save_contributions(&env, &contributions);
        if previous.is_none() {
            storage::push_contributor(&env, &contributor);
        }
        storage::set_pooled_balance(&env, pooled);

        events::emit_funded(&env, contributor, amount, reference_amount, total_contributed);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Send the whole pool to the owner and reset the ledger to empty.
    ///
    /// Looks up each contributor in the stored set inside the reset loop.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        Self::settle(&env, &caller, WithdrawStrategy::Direct)
    }

    /// Same contract as [`FundMe::withdraw`]; copies the contributor set into
    /// memory once before the reset loop.
    pub fn withdraw_optimized(env: Env, caller: Address) -> Result<(), Error> {
        Self::settle(&env, &caller, WithdrawStrategy::Cached)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn price_feed(env: Env) -> Address {
        storage::get_price_feed(&env)
    }

    pub fn native_token(env: Env) -> Address {
        storage::get_native_token(&env)
    }

    pub fn minimum_reference_amount(_env: Env) -> i128 {
        MINIMUM_REFERENCE_AMOUNT
    }

    /// Cumulative amount `contributor` has put in since the last settlement.
    pub fn contributed_amount(env: Env, contributor: Address) -> i128 {
        storage::get_contributed(&env, &contributor).unwrap_or(0)
    }

    /// The contributor at `index`, in first-contribution order.
    pub fn contributor(env: Env, index: u32) -> Result<Address, Error> {
        storage::contributor_at(&env, index)
    }

    pub fn contributor_count(env: Env) -> u32 {
        storage::contributor_count(&env)
    }

    /// All contributors of the current cycle, in first-contribution order.
    pub fn contributors(env: Env) -> Vec<Address> {
        storage::load_contributors(&env)
    }

    pub fn pooled_balance(env: Env) -> i128 {
        storage::get_pooled_balance(&env)
    }

    /// Value of `amount` native units in reference units at the current rate.
    pub fn quote(env: Env, amount: i128) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Self::reference_amount(&env, amount)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn reference_amount(env: &Env, amount: i128) -> Result<i128, Error> {
        let rate = oracle::current_rate(env, &storage::get_price_feed(env))?;
        conversion::to_reference_amount(
            amount,
            rate.answer,
            rate.decimals,
            storage::get_native_decimals(env),
        )
        .ok_or(Error::Overflow)
    }

    /// Move `amount` of the native token, mapping any token failure to
    /// `Error::TransferFailed`.
    fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        let token_client = token::Client::new(env, &storage::get_native_token(env));
        match token_client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }

    fn settle(env: &Env, caller: &Address, strategy: WithdrawStrategy) -> Result<(), Error> {
        caller.require_auth();
        access::require_owner(env, caller)?;

        let owner = caller.clone();
        let amount = storage::get_pooled_balance(env);
        let count = storage::contributor_count(env);

        // The transfer is the only step that can fail; nothing is reset
        // until it has gone through.
        if amount > 0 {
            Self::transfer(env, &env.current_contract_address(), &owner, amount)?;
        }

        let mut contributions = storage::load_contributions(env);
        match strategy {
            WithdrawStrategy::Direct => {
                for index in 0..count {
                    let contributor = storage::contributor_at(env, index)?;
                    contributions.remove(contributor);
                }
            }
            WithdrawStrategy::Cached => {
                let contributors = storage::load_contributors(env);
                for contributor in contributors.iter() {
                    contributions.remove(contributor);
                }
            }
        }
        storage::save_contributions(env, &contributions);
        storage::clear_contributors(env);
        storage::set_pooled_balance(env, 0);

        events::emit_withdrawn(env, owner, amount, count, strategy);
        Ok(())
    }
}
