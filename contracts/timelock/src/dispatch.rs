//! Turns a queued descriptor into a call and forwards it.

use crate::{apply_delay, apply_pending_admin, read_native_token, TimelockError};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, Address, Env, Error, IntoVal, Symbol, TryFromVal, Val, Vec};

/// Split a descriptor's `(signature, data)` into a function name and its
/// arguments. Without a signature the function name is the first element of
/// `data`.
pub(crate) fn build_call(
    e: &Env,
    signature: &Option<Symbol>,
    data: &Vec<Val>,
) -> Result<(Symbol, Vec<Val>), TimelockError> {
    match signature {
        Some(func) => Ok((func.clone(), data.clone())),
        None => {
            let selector = data.get(0).ok_or(TimelockError::InvalidCallData)?;
            let func =
                Symbol::try_from_val(e, &selector).map_err(|_| TimelockError::InvalidCallData)?;
            Ok((func, data.slice(1..)))
        }
    }
}

/// Forward `value` of the native token and then call `func` on `target`.
///
/// The target's failure is surfaced as `CallReverted`; returning the error
/// makes the host roll back the value transfer together with the rest of the
/// invocation.
pub(crate) fn forward(
    e: &Env,
    target: &Address,
    value: i128,
    func: &Symbol,
    args: Vec<Val>,
) -> Result<Val, TimelockError> {
    if value > 0 {
        transfer_value(e, target, value)?;
    }

    match e.try_invoke_contract::<Val, Error>(target, func, args) {
        Ok(Ok(ret)) => Ok(ret),
        Ok(Err(_)) | Err(_) => {
            log!(e, "forwarded call failed", target.clone(), func.clone());
            Err(TimelockError::CallReverted)
        }
    }
}

fn transfer_value(e: &Env, target: &Address, value: i128) -> Result<(), TimelockError> {
    let token = TokenClient::new(e, &read_native_token(e)?);
    let this = e.current_contract_address();
    if token.balance(&this) < value {
        log!(e, "insufficient native balance", value);
        return Err(TimelockError::InsufficientValue);
    }
    token.transfer(&this, target, &value);
    Ok(())
}

/// Run a queued call whose target is the timelock itself. Soroban forbids
/// re-entering a contract, so these never go through the host.
pub(crate) fn invoke_self(
    e: &Env,
    func: &Symbol,
    args: &Vec<Val>,
) -> Result<Val, TimelockError> {
    if *func == Symbol::new(e, "set_delay") {
        let new_delay: u64 = single_arg(e, args)?;
        apply_delay(e, new_delay)?;
    } else if *func == Symbol::new(e, "set_pending_admin") {
        let pending_admin: Address = single_arg(e, args)?;
        apply_pending_admin(e, &pending_admin)?;
    } else {
        return Err(TimelockError::UnsupportedSelfCall);
    }
    Ok(().into_val(e))
}

fn single_arg<T>(e: &Env, args: &Vec<Val>) -> Result<T, TimelockError>
where
    T: TryFromVal<Env, Val>,
{
    if args.len() != 1 {
        return Err(TimelockError::InvalidCallData);
    }
    let raw = args.get(0).ok_or(TimelockError::InvalidCallData)?;
    T::try_from_val(e, &raw).map_err(|_| TimelockError::InvalidCallData)
}
