//! # Access control
//!
//! FundMe has exactly one privileged identity: the owner fixed at
//! construction. There is no role hierarchy and no ownership transfer.
//!
//! The owner is read from storage on every check, before any privileged state
//! mutation.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::Error;

/// Returns `true` if `address` is the owner.
pub fn is_owner(env: &Env, address: &Address) -> bool {
    storage::get_owner(env) == *address
}

/// Fails with `Error::NotOwner` unless `address` is the owner.
#[inline]
pub fn require_owner(env: &Env, address: &Address) -> Result<(), Error> {
    if is_owner(env, address) {
        Ok(())
    } else {
        Err(Error::NotOwner)
    }
}
