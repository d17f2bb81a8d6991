//! # Timelock Controller
//!
//! Queues calls to other contracts and forwards them only after a mandatory
//! delay. A single admin queues, cancels and executes transactions. Queued
//! transactions expire once the grace period after their ETA has passed.
//!
//! The controller is also a valid target for its own queue: `set_delay` and
//! `set_pending_admin` are only reachable by queueing a call whose target is
//! the controller, and are subject to the same delay as any other call.

#![no_std]

mod dispatch;
pub mod events;
mod queue;

#[cfg(test)]
mod test_helpers;

use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, Symbol, Val, Vec};
pub use timelock_errors::TimelockError;

pub const HOUR: u64 = 60 * 60;
pub const DAY: u64 = 24 * HOUR;

/// Window after the ETA during which a queued transaction stays executable.
pub const GRACE_PERIOD: u64 = 14 * DAY;
/// Lower bound for `delay`.
pub const MINIMUM_DELAY: u64 = 6 * HOUR;
/// Upper bound for `delay`.
pub const MAXIMUM_DELAY: u64 = 30 * DAY;

/// Instance storage is bumped to 30 days whenever it drops under 7 days
/// (assuming ~5s ledgers).
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address allowed to queue, cancel and execute transactions.
    Admin,
    /// Address nominated to become admin; cleared once accepted.
    PendingAdmin,
    /// Minimum seconds between queue time and ETA.
    Delay,
    /// Token contract used to forward native value with a call.
    NativeToken,
    /// Pending flag of a queued transaction, keyed by its hash.
    Queued(BytesN<32>),
}

#[contract]
pub struct Timelock;

#[contractimpl]
impl Timelock {
    /// Initialize the timelock.
    ///
    /// @param admin        Address that queues, cancels and executes transactions
    /// @param delay        Initial delay in seconds, within `[MINIMUM_DELAY, MAXIMUM_DELAY]`
    /// @param native_token Token contract whose balance backs the `value` of forwarded calls
    pub fn initialize(
        e: Env,
        admin: Address,
        delay: u64,
        native_token: Address,
    ) -> Result<(), TimelockError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(TimelockError::AlreadyInitialized);
        }
        admin.require_auth();
        check_delay(delay)?;

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Delay, &delay);
        e.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
        bump_instance(&e);

        events::emit_initialized(&e, &admin, delay);
        Ok(())
    }

    /// Queue a transaction for execution at or after `eta`.
    ///
    /// `signature` names the function to call on `target` with `data` as its
    /// arguments. When `signature` is `None`, the first element of `data` must
    /// be the function name and the rest are the arguments.
    ///
    /// @return The transaction key: sha256 over the XDR of the full descriptor.
    pub fn queue_transaction(
        e: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<BytesN<32>, TimelockError> {
        require_admin(&e, &caller)?;
        if value < 0 {
            return Err(TimelockError::InvalidValue);
        }

        let earliest = e
            .ledger()
            .timestamp()
            .checked_add(read_delay(&e)?)
            .ok_or(TimelockError::Overflow)?;
        if eta < earliest {
            return Err(TimelockError::EtaTooSoon);
        }

        let key = queue::transaction_key(&e, &target, value, &signature, &data, eta);
        if queue::is_queued(&e, &key) {
            return Err(TimelockError::TransactionAlreadyQueued);
        }
        queue::mark_queued(&e, &key, eta);
        bump_instance(&e);

        events::emit_transaction_queued(&e, &key, &target, value, &signature, &data, eta);
        Ok(key)
    }

    /// Cancel a queued transaction. Cancelling a descriptor that is not
    /// pending is a no-op, but the cancellation event is still emitted.
    pub fn cancel_transaction(
        e: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<(), TimelockError> {
        require_admin(&e, &caller)?;

        let key = queue::transaction_key(&e, &target, value, &signature, &data, eta);
        queue::clear_queued(&e, &key);

        events::emit_transaction_cancelled(&e, &key, &target, value, &signature, &data, eta);
        Ok(())
    }

    /// Execute a queued transaction whose ETA has passed and whose grace
    /// period has not.
    ///
    /// Any failure, including a failure of the target contract, rolls back
    /// the whole invocation and leaves the transaction queued.
    ///
    /// @return The value returned by the target.
    pub fn execute_transaction(
        e: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Result<Val, TimelockError> {
        require_admin(&e, &caller)?;

        let key = queue::transaction_key(&e, &target, value, &signature, &data, eta);
        if !queue::is_queued(&e, &key) {
            return Err(TimelockError::TransactionNotQueued);
        }

        let now = e.ledger().timestamp();
        if now < eta {
            return Err(TimelockError::TransactionLocked);
        }
        if now > eta.saturating_add(GRACE_PERIOD) {
            return Err(TimelockError::TransactionStale);
        }

        queue::clear_queued(&e, &key);

        let (func, args) = dispatch::build_call(&e, &signature, &data)?;
        let result = if target == e.current_contract_address() {
            dispatch::invoke_self(&e, &func, &args)?
        } else {
            dispatch::forward(&e, &target, value, &func, args)?
        };
        bump_instance(&e);

        events::emit_transaction_executed(
            &e, &key, &target, value, &signature, &data, eta, result,
        );
        Ok(result)
    }

    /// Change the delay. Only reachable through a queued transaction that
    /// targets the timelock itself.
    pub fn set_delay(e: Env, caller: Address, new_delay: u64) -> Result<(), TimelockError> {
        require_self(&e, &caller)?;
        apply_delay(&e, new_delay)
    }

    /// Nominate the next admin. Only reachable through a queued transaction
    /// that targets the timelock itself.
    pub fn set_pending_admin(
        e: Env,
        caller: Address,
        pending_admin: Address,
    ) -> Result<(), TimelockError> {
        require_self(&e, &caller)?;
        apply_pending_admin(&e, &pending_admin)
    }

    /// Complete an admin handover. Only the pending admin can call this.
    pub fn accept_admin(e: Env, caller: Address) -> Result<(), TimelockError> {
        caller.require_auth();
        read_admin(&e)?;

        let pending: Option<Address> = e.storage().instance().get(&DataKey::PendingAdmin);
        match pending {
            Some(pending) if pending == caller => {
                e.storage().instance().set(&DataKey::Admin, &caller);
                e.storage().instance().remove(&DataKey::PendingAdmin);
                bump_instance(&e);
                events::emit_new_admin(&e, &caller);
                Ok(())
            }
            _ => Err(TimelockError::NotPendingAdmin),
        }
    }

    pub fn get_admin(e: Env) -> Result<Address, TimelockError> {
        read_admin(&e)
    }

    pub fn get_pending_admin(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::PendingAdmin)
    }

    pub fn get_delay(e: Env) -> Result<u64, TimelockError> {
        read_delay(&e)
    }

    pub fn get_native_token(e: Env) -> Result<Address, TimelockError> {
        read_native_token(&e)
    }

    pub fn grace_period(_e: Env) -> u64 {
        GRACE_PERIOD
    }

    pub fn minimum_delay(_e: Env) -> u64 {
        MINIMUM_DELAY
    }

    pub fn maximum_delay(_e: Env) -> u64 {
        MAXIMUM_DELAY
    }

    /// Whether the transaction with this key is currently pending.
    pub fn is_queued(e: Env, key: BytesN<32>) -> bool {
        queue::is_queued(&e, &key)
    }

    /// Derive the key a descriptor is queued under.
    pub fn get_transaction_key(
        e: Env,
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> BytesN<32> {
        queue::transaction_key(&e, &target, value, &signature, &data, eta)
    }
}

pub(crate) fn read_admin(e: &Env) -> Result<Address, TimelockError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TimelockError::NotInitialized)
}

pub(crate) fn read_delay(e: &Env) -> Result<u64, TimelockError> {
    e.storage()
        .instance()
        .get(&DataKey::Delay)
        .ok_or(TimelockError::NotInitialized)
}

pub(crate) fn read_native_token(e: &Env) -> Result<Address, TimelockError> {
    e.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(TimelockError::NotInitialized)
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), TimelockError> {
    caller.require_auth();
    if *caller != read_admin(e)? {
        return Err(TimelockError::NotAdmin);
    }
    Ok(())
}

fn require_self(e: &Env, caller: &Address) -> Result<(), TimelockError> {
    read_admin(e)?;
    if *caller != e.current_contract_address() {
        return Err(TimelockError::NotSelf);
    }
    caller.require_auth();
    Ok(())
}

fn check_delay(delay: u64) -> Result<(), TimelockError> {
    if delay < MINIMUM_DELAY {
        return Err(TimelockError::DelayBelowMinimum);
    }
    if delay > MAXIMUM_DELAY {
        return Err(TimelockError::DelayAboveMaximum);
    }
    Ok(())
}

pub(crate) fn apply_delay(e: &Env, new_delay: u64) -> Result<(), TimelockError> {
    check_delay(new_delay)?;
    let old_delay = read_delay(e)?;
    e.storage().instance().set(&DataKey::Delay, &new_delay);
    events::emit_new_delay(e, old_delay, new_delay);
    Ok(())
}

pub(crate) fn apply_pending_admin(e: &Env, pending_admin: &Address) -> Result<(), TimelockError> {
    read_admin(e)?;
    e.storage()
        .instance()
        .set(&DataKey::PendingAdmin, pending_admin);
    events::emit_new_pending_admin(e, pending_admin);
    Ok(())
}

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
