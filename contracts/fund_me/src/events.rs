use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::WithdrawStrategy;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    pub contributor: Address,
    pub amount: i128,
    pub reference_amount: i128,
    pub total_contributed: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub owner: Address,
    pub amount: i128,
    pub contributor_count: u32,
    pub strategy: WithdrawStrategy,
}

pub fn emit_funded(
    env: &Env,
    contributor: Address,
    amount: i128,
    reference_amount: i128,
    total_contributed: i128,
) {
    let topics = (symbol_short!("funded"), contributor.clone());
    let data = Funded {
        contributor,
        amount,
        reference_amount,
        total_contributed,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(
    env: &Env,
    owner: Address,
    amount: i128,
    contributor_count: u32,
    strategy: WithdrawStrategy,
) {
    let topics = (symbol_short!("withdrawn"), owner.clone());
    let data = Withdrawn {
        owner,
        amount,
        contributor_count,
        strategy,
    };
    env.events().publish(topics, data);
}
