#![allow(dead_code)]

extern crate std;

use std::vec::Vec;

use soroban_sdk::{token, Address};

use crate::FundMeClient;

/// Everything an external observer can read about the ledger, for
/// before/after comparisons.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerSnapshot {
    pub pooled_balance: i128,
    pub contributors: Vec<Address>,
    /// `contributed_amount` for each tracked address, in the order given.
    pub amounts: Vec<i128>,
    pub custody: i128,
}

pub fn snapshot(
    client: &FundMeClient,
    token: &token::Client,
    tracked: &[Address],
) -> LedgerSnapshot {
    LedgerSnapshot {
        pooled_balance: client.pooled_balance(),
        contributors: client.contributors().iter().collect(),
        amounts: tracked
            .iter()
            .map(|addr| client.contributed_amount(addr))
            .collect(),
        custody: token.balance(&client.address),
    }
}

/// INV-1: the pooled balance equals the sum of every recorded contribution.
pub fn assert_pool_matches_contributions(client: &FundMeClient) {
    let sum: i128 = client
        .contributors()
        .iter()
        .map(|c| client.contributed_amount(&c))
        .sum();
    assert_eq!(
        client.pooled_balance(),
        sum,
        "INV-1 violated: pooled balance {} != sum of contributions {}",
        client.pooled_balance(),
        sum
    );
}

/// INV-2: no address appears twice in the contributor set, and every member
/// has a positive recorded amount.
pub fn assert_contributors_distinct(client: &FundMeClient) {
    let contributors: Vec<Address> = client.contributors().iter().collect();
    for (i, a) in contributors.iter().enumerate() {
        for b in contributors.iter().skip(i + 1) {
            assert_ne!(a, b, "INV-2 violated: duplicate contributor");
        }
        assert!(
            client.contributed_amount(a) > 0,
            "INV-2 violated: contributor without a recorded amount"
        );
    }
    assert_eq!(contributors.len() as u32, client.contributor_count());
}

/// INV-3: the contract holds at least what it has recorded.
pub fn assert_custody_covers_pool(client: &FundMeClient, token: &token::Client) {
    let held = token.balance(&client.address);
    assert!(
        held >= client.pooled_balance(),
        "INV-3 violated: contract holds {} but pool records {}",
        held,
        client.pooled_balance()
    );
}

/// INV-4: after settlement the ledger is back to its empty state.
pub fn assert_settled(client: &FundMeClient, previously_tracked: &[Address]) {
    assert_eq!(client.pooled_balance(), 0, "INV-4 violated: pool not zeroed");
    assert_eq!(client.contributor_count(), 0, "INV-4 violated: contributors kept");
    assert!(client.contributors().is_empty());
    for addr in previously_tracked {
        assert_eq!(
            client.contributed_amount(addr),
            0,
            "INV-4 violated: contribution not reset"
        );
    }
}

pub fn assert_all_ledger_invariants(client: &FundMeClient, token: &token::Client) {
    assert_pool_matches_contributions(client);
    assert_contributors_distinct(client);
    assert_custody_covers_pool(client, token);
}
