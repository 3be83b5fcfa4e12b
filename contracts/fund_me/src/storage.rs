//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by FundMe:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key                | Type      | Description                              |
//! |--------------------|-----------|------------------------------------------|
//! | `Owner`            | `Address` | Settlement recipient, fixed at deploy    |
//! | `PriceFeed`        | `Address` | External price feed contract             |
//! | `NativeToken`      | `Address` | SAC holding contributed value            |
//! | `NativeDecimals`   | `u32`     | Decimals of the native token             |
//! | `PooledBalance`    | `i128`    | Sum of all recorded contributions        |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key             | Type                 | Description                              |
//! |-----------------|----------------------|------------------------------------------|
//! | `Contributions` | `Map<Address, i128>` | Cumulative amount per contributor        |
//! | `Contributors`  | `Vec<Address>`       | Distinct contributors, first-seen order  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Fixed entry count
//!
//! The whole ledger lives in two persistent entries plus the instance entry,
//! however many addresses contribute, so settlement writes a constant number
//! of ledger entries.
//!
//! ## Ordered contributor set
//!
//! Membership is the presence of a key in `Contributions`, so an address is
//! appended to `Contributors` exactly once per settlement cycle. An absent key
//! reads as zero. Settlement removes both entries, returning the set to empty.

use soroban_sdk::{contracttype, Address, Env, Map, Vec};

use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    PriceFeed,
    NativeToken,
    NativeDecimals,
    PooledBalance,
    /// Contributor → cumulative amount in the current cycle (Persistent).
    Contributions,
    /// Ordered contributor set of the current cycle (Persistent).
    Contributors,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Write the construction-time configuration. Called once from `__constructor`.
pub fn init_config(
    env: &Env,
    owner: &Address,
    price_feed: &Address,
    native_token: &Address,
    native_decimals: u32,
) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::PriceFeed, price_feed);
    instance.set(&DataKey::NativeToken, native_token);
    instance.set(&DataKey::NativeDecimals, &native_decimals);
    instance.set(&DataKey::PooledBalance, &0i128);
    bump_instance(env);
}

fn get_config_address(env: &Env, key: &DataKey) -> Address {
    bump_instance(env);
    // Written by the constructor; a deployed instance always has it.
    env.storage()
        .instance()
        .get(key)
        .expect("contract not constructed")
}

pub fn get_owner(env: &Env) -> Address {
    get_config_address(env, &DataKey::Owner)
}

pub fn get_price_feed(env: &Env) -> Address {
    get_config_address(env, &DataKey::PriceFeed)
}

pub fn get_native_token(env: &Env) -> Address {
    get_config_address(env, &DataKey::NativeToken)
}

pub fn get_native_decimals(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::NativeDecimals)
        .expect("contract not constructed")
}

// ─────────────────────────────────────────────────────────
// Pooled balance
// ─────────────────────────────────────────────────────────

pub fn get_pooled_balance(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::PooledBalance)
        .unwrap_or(0)
}

pub fn set_pooled_balance(env: &Env, balance: i128) {
    env.storage()
        .instance()
        .set(&DataKey::PooledBalance, &balance);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Per-contributor amounts
// ─────────────────────────────────────────────────────────

/// The contributor → amount map of the current cycle (empty when absent).
pub fn load_contributions(env: &Env) -> Map<Address, i128> {
    let key = DataKey::Contributions;
    match env.storage().persistent().get(&key) {
        Some(contributions) => {
            bump_persistent(env, &key);
            contributions
        }
        None => Map::new(env),
    }
}

/// Persist `contributions`; an empty map removes the entry.
pub fn save_contributions(env: &Env, contributions: &Map<Address, i128>) {
    let key = DataKey::Contributions;
    if contributions.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, contributions);
        bump_persistent(env, &key);
    }
}

/// Cumulative amount recorded for `contributor`, or `None` if it has not
/// contributed in the current cycle.
pub fn get_contributed(env: &Env, contributor: &Address) -> Option<i128> {
    load_contributions(env).get(contributor.clone())
}

// ─────────────────────────────────────────────────────────
// Ordered contributor set
// ─────────────────────────────────────────────────────────

/// Copy the contributor set, in order, into a local vector.
pub fn load_contributors(env: &Env) -> Vec<Address> {
    let key = DataKey::Contributors;
    match env.storage().persistent().get(&key) {
        Some(contributors) => {
            bump_persistent(env, &key);
            contributors
        }
        None => Vec::new(env),
    }
}

pub fn contributor_count(env: &Env) -> u32 {
    load_contributors(env).len()
}

/// Append `contributor` to the set.
///
/// The caller is responsible for checking membership first.
pub fn push_contributor(env: &Env, contributor: &Address) {
    let key = DataKey::Contributors;
    let mut contributors = load_contributors(env);
    contributors.push_back(contributor.clone());
    env.storage().persistent().set(&key, &contributors);
    bump_persistent(env, &key);
}

/// Read the contributor at `index` straight from the stored set.
pub fn contributor_at(env: &Env, index: u32) -> Result<Address, Error> {
    load_contributors(env)
        .get(index)
        .ok_or(Error::IndexOutOfRange)
}

/// Reset the set to empty.
pub fn clear_contributors(env: &Env) {
    env.storage().persistent().remove(&DataKey::Contributors);
}
