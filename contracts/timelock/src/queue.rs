//! Pending-transaction bookkeeping.
//!
//! Only a boolean flag is persisted per transaction, keyed by the hash of the
//! full descriptor. Callers must resupply the exact descriptor to execute or
//! cancel.

use crate::{DataKey, DAY_IN_LEDGERS, GRACE_PERIOD};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, BytesN, Env, Symbol, Val, Vec};

/// Seconds per ledger used to turn a time window into a TTL.
const LEDGER_SECONDS: u64 = 5;

/// sha256 over the XDR encoding of `(target, value, signature, data, eta)`.
pub(crate) fn transaction_key(
    e: &Env,
    target: &Address,
    value: i128,
    signature: &Option<Symbol>,
    data: &Vec<Val>,
    eta: u64,
) -> BytesN<32> {
    let descriptor = (target.clone(), value, signature.clone(), data.clone(), eta);
    e.crypto().sha256(&descriptor.to_xdr(e)).to_bytes()
}

pub(crate) fn is_queued(e: &Env, key: &BytesN<32>) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Queued(key.clone()))
        .unwrap_or(false)
}

/// Marks `key` pending and keeps the entry alive until the grace period
/// after `eta` has run out.
pub(crate) fn mark_queued(e: &Env, key: &BytesN<32>, eta: u64) {
    let storage_key = DataKey::Queued(key.clone());
    e.storage().persistent().set(&storage_key, &true);

    let ttl = live_for(e, eta);
    e.storage().persistent().extend_ttl(&storage_key, ttl, ttl);
}

/// Removing the entry is the same as clearing the flag and frees the slot.
pub(crate) fn clear_queued(e: &Env, key: &BytesN<32>) {
    e.storage().persistent().remove(&DataKey::Queued(key.clone()));
}

fn live_for(e: &Env, eta: u64) -> u32 {
    let remaining = eta
        .saturating_sub(e.ledger().timestamp())
        .saturating_add(GRACE_PERIOD);
    let ledgers = remaining / LEDGER_SECONDS + DAY_IN_LEDGERS as u64;
    let max_ttl = e.storage().max_ttl();
    if ledgers > max_ttl as u64 {
        max_ttl
    } else {
        ledgers as u32
    }
}
