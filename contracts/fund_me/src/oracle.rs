//! # Price oracle adapter
//!
//! The exchange rate between the native unit and the reference currency comes
//! from an external [`PriceFeed`] contract. The feed is untrusted: every call
//! goes through the fallible `try_` client so that a trapping or misbehaving
//! feed turns into a typed [`Error`] instead of aborting the invocation.
//!
//! | Failure                                   | Error                      |
//! |-------------------------------------------|----------------------------|
//! | Call traps, or the reply does not decode  | `Error::OracleUnavailable` |
//! | `answer <= 0`                             | `Error::InvalidRate`       |
//! | `decimals > MAX_RATE_DECIMALS`            | `Error::InvalidRate`       |
//!
//! No freshness check is made on `updated_at`, and no rate is cached between
//! contributions.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::{Rate, RoundData};
use crate::Error;

/// Largest feed precision accepted. Anything above cannot be combined with
/// the native decimals without overflowing the power-of-ten table.
pub const MAX_RATE_DECIMALS: u32 = 18;

/// Query surface of an aggregator-style price feed.
#[allow(dead_code)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Most recent round.
    fn latest_round_data(env: Env) -> RoundData;
    /// Decimal precision of `RoundData::answer`.
    fn decimals(env: Env) -> u32;
}

/// Fetch and validate the current rate from `feed`.
pub fn current_rate(env: &Env, feed: &Address) -> Result<Rate, Error> {
    let client = PriceFeedClient::new(env, feed);

    let round = match client.try_latest_round_data() {
        Ok(Ok(round)) => round,
        _ => return Err(Error::OracleUnavailable),
    };
    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(Error::OracleUnavailable),
    };

    validate(&round, decimals)
}

fn validate(round: &RoundData, decimals: u32) -> Result<Rate, Error> {
    if round.answer <= 0 || decimals > MAX_RATE_DECIMALS {
        return Err(Error::InvalidRate);
    }
    Ok(Rate {
        answer: round.answer,
        decimals,
    })
}
