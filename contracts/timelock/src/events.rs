use soroban_sdk::{Address, BytesN, Env, Symbol, Val, Vec};

/// Emitted once by `initialize`.
///
/// # Topics
/// * `Symbol` - "timelock_initialized"
///
/// # Data
/// * `Address` - The initial admin
/// * `u64` - The initial delay in seconds
pub fn emit_initialized(e: &Env, admin: &Address, delay: u64) {
    let topics = (Symbol::new(e, "timelock_initialized"),);
    e.events().publish(topics, (admin.clone(), delay));
}

/// Emitted when a transaction is queued.
///
/// # Topics
/// * `Symbol` - "tx_queued"
/// * `BytesN<32>` - The transaction key
/// * `Address` - The target contract
///
/// # Data
/// * `i128` - Native value forwarded with the call
/// * `Option<Symbol>` - The function name, if given separately
/// * `Vec<Val>` - The call data
/// * `u64` - The ETA
pub fn emit_transaction_queued(
    e: &Env,
    key: &BytesN<32>,
    target: &Address,
    value: i128,
    signature: &Option<Symbol>,
    data: &Vec<Val>,
    eta: u64,
) {
    let topics = (Symbol::new(e, "tx_queued"), key.clone(), target.clone());
    let payload = (value, signature.clone(), data.clone(), eta);
    e.events().publish(topics, payload);
}

/// Emitted when a transaction is cancelled, whether or not it was pending.
///
/// # Topics
/// * `Symbol` - "tx_cancelled"
/// * `BytesN<32>` - The transaction key
/// * `Address` - The target contract
///
/// # Data
/// Same layout as `tx_queued`.
pub fn emit_transaction_cancelled(
    e: &Env,
    key: &BytesN<32>,
    target: &Address,
    value: i128,
    signature: &Option<Symbol>,
    data: &Vec<Val>,
    eta: u64,
) {
    let topics = (Symbol::new(e, "tx_cancelled"), key.clone(), target.clone());
    let payload = (value, signature.clone(), data.clone(), eta);
    e.events().publish(topics, payload);
}

/// Emitted after the forwarded call returns.
///
/// # Topics
/// * `Symbol` - "tx_executed"
/// * `BytesN<32>` - The transaction key
/// * `Address` - The target contract
///
/// # Data
/// Same layout as `tx_queued`, followed by the `Val` returned by the target.
#[allow(clippy::too_many_arguments)]
pub fn emit_transaction_executed(
    e: &Env,
    key: &BytesN<32>,
    target: &Address,
    value: i128,
    signature: &Option<Symbol>,
    data: &Vec<Val>,
    eta: u64,
    returned: Val,
) {
    let topics = (Symbol::new(e, "tx_executed"), key.clone(), target.clone());
    let payload = (value, signature.clone(), data.clone(), eta, returned);
    e.events().publish(topics, payload);
}

/// # Topics
/// * `Symbol` - "new_delay"
///
/// # Data
/// * `u64` - The previous delay
/// * `u64` - The new delay
pub fn emit_new_delay(e: &Env, old_delay: u64, new_delay: u64) {
    e.events()
        .publish((Symbol::new(e, "new_delay"),), (old_delay, new_delay));
}

pub fn emit_new_pending_admin(e: &Env, pending_admin: &Address) {
    e.events()
        .publish((Symbol::new(e, "new_pending_admin"),), pending_admin.clone());
}

pub fn emit_new_admin(e: &Env, admin: &Address) {
    e.events()
        .publish((Symbol::new(e, "new_admin"),), admin.clone());
}
