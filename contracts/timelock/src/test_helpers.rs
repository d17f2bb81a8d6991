//! Shared test helpers: timelock setup, clock control and two owner-gated
//! target contracts for the timelock to govern.

#![cfg(test)]

use crate::{Timelock, TimelockClient, HOUR};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol, Val, Vec};

/// Delay the timelock is initialized with.
pub const DELAY: u64 = 12 * HOUR;

/// Ledger timestamp every test starts from.
pub const GENESIS: u64 = 1_700_000_000;

/// Setup the timelock with a Stellar Asset native token.
/// Returns (client, admin, native_token).
pub fn setup(e: &Env) -> (TimelockClient<'_>, Address, Address) {
    e.mock_all_auths();
    set_time(e, GENESIS);

    let contract_id = e.register(Timelock, ());
    let client = TimelockClient::new(e, &contract_id);
    let admin = Address::generate(e);

    let native = e
        .register_stellar_asset_contract_v2(Address::generate(e))
        .address();
    client.initialize(&admin, &DELAY, &native);

    (client, admin, native)
}

/// Mint native token straight to the timelock so it can forward value.
pub fn fund_timelock(e: &Env, client: &TimelockClient, native: &Address, amount: i128) {
    StellarAssetClient::new(e, native).mint(&client.address, &amount);
}

pub fn native_balance(e: &Env, native: &Address, who: &Address) -> i128 {
    TokenClient::new(e, native).balance(who)
}

pub fn now(e: &Env) -> u64 {
    e.ledger().timestamp()
}

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}

pub fn advance(e: &Env, seconds: u64) {
    let t = now(e) + seconds;
    set_time(e, t);
}

pub fn sig(e: &Env, name: &str) -> Option<Symbol> {
    Some(Symbol::new(e, name))
}

/// Arguments for `OwnableToken::transfer_ownership` issued by the timelock.
pub fn transfer_ownership_args(e: &Env, timelock: &Address, new_owner: &Address) -> Vec<Val> {
    vec![e, timelock.into_val(e), new_owner.into_val(e)]
}

/// Deploy an ownable token owned by `owner`.
pub fn deploy_ownable(e: &Env, owner: &Address) -> ownable::OwnableTokenClient<'static> {
    let id = e.register(ownable::OwnableToken, ());
    let client = ownable::OwnableTokenClient::new(e, &id);
    client.init(owner);
    client
}

/// Deploy a reward pool owned by `owner`.
pub fn deploy_pool(e: &Env, owner: &Address) -> pool::RewardPoolClient<'static> {
    let id = e.register(pool::RewardPool, ());
    let client = pool::RewardPoolClient::new(e, &id);
    client.init(owner);
    client
}

/// A token whose ownership can only be moved by its current owner.
pub mod ownable {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    enum Key {
        Owner,
    }

    #[contract]
    pub struct OwnableToken;

    #[contractimpl]
    impl OwnableToken {
        pub fn init(e: Env, owner: Address) {
            e.storage().instance().set(&Key::Owner, &owner);
        }

        pub fn owner(e: Env) -> Address {
            e.storage().instance().get(&Key::Owner).unwrap()
        }

        pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) {
            caller.require_auth();
            if caller != Self::owner(e.clone()) {
                panic!("Ownable: caller is not the owner");
            }
            e.storage().instance().set(&Key::Owner, &new_owner);
        }
    }
}

/// A staking pool whose `add` is owner-gated.
pub mod pool {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

    #[contracttype]
    enum Key {
        Owner,
        Pools,
    }

    #[contracttype]
    #[derive(Clone, Debug, PartialEq)]
    pub struct PoolInfo {
        pub lp_token: Address,
        pub alloc_point: u64,
        pub deposit_fee_bps: u32,
    }

    #[contract]
    pub struct RewardPool;

    #[contractimpl]
    impl RewardPool {
        pub fn init(e: Env, owner: Address) {
            e.storage().instance().set(&Key::Owner, &owner);
            e.storage()
                .instance()
                .set(&Key::Pools, &Vec::<PoolInfo>::new(&e));
        }

        pub fn owner(e: Env) -> Address {
            e.storage().instance().get(&Key::Owner).unwrap()
        }

        pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) {
            caller.require_auth();
            if caller != Self::owner(e.clone()) {
                panic!("Ownable: caller is not the owner");
            }
            e.storage().instance().set(&Key::Owner, &new_owner);
        }

        pub fn add(
            e: Env,
            caller: Address,
            alloc_point: u64,
            lp_token: Address,
            deposit_fee_bps: u32,
        ) -> u32 {
            caller.require_auth();
            if caller != Self::owner(e.clone()) {
                panic!("Ownable: caller is not the owner");
            }
            let mut pools = Self::pools(&e);
            pools.push_back(PoolInfo {
                lp_token,
                alloc_point,
                deposit_fee_bps,
            });
            e.storage().instance().set(&Key::Pools, &pools);
            pools.len() - 1
        }

        pub fn pool_length(e: Env) -> u32 {
            Self::pools(&e).len()
        }

        pub fn pool_info(e: Env, pid: u32) -> PoolInfo {
            Self::pools(&e).get(pid).unwrap()
        }
    }

    impl RewardPool {
        fn pools(e: &Env) -> Vec<PoolInfo> {
            e.storage().instance().get(&Key::Pools).unwrap()
        }
    }
}
