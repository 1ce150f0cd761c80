#![cfg(test)]

use crate::ttl::{extend_instance, extend_persistent, DAY_IN_LEDGERS};
use soroban_sdk::testutils::storage::{Instance as _, Persistent as _};
use soroban_sdk::testutils::Ledger;
use soroban_sdk::{contract, symbol_short, Env};

#[contract]
struct Holder;

const ONE_YEAR_OF_LEDGERS: u32 = 365 * DAY_IN_LEDGERS;

#[test]
fn test_extend_instance_reaches_a_year() {
    let e = Env::default();
    let id = e.register(Holder, ());

    e.as_contract(&id, || {
        extend_instance(&e);
        assert!(e.storage().instance().get_ttl() >= ONE_YEAR_OF_LEDGERS);
    });
}

#[test]
fn test_extend_persistent_reaches_a_year() {
    let e = Env::default();
    let id = e.register(Holder, ());
    let key = symbol_short!("pos");

    e.as_contract(&id, || {
        e.storage().persistent().set(&key, &7_u32);
        extend_persistent(&e, &key);
        assert!(e.storage().persistent().get_ttl(&key) >= ONE_YEAR_OF_LEDGERS);
    });
}

#[test]
fn test_extend_persistent_restores_ttl_after_ledgers_pass() {
    let e = Env::default();
    let id = e.register(Holder, ());
    let key = symbol_short!("pos");

    e.as_contract(&id, || {
        e.storage().persistent().set(&key, &7_u32);
        extend_persistent(&e, &key);
    });
    let full = e.as_contract(&id, || e.storage().persistent().get_ttl(&key));

    e.ledger().with_mut(|li| li.sequence_number += 30 * DAY_IN_LEDGERS);
    e.as_contract(&id, || {
        assert_eq!(e.storage().persistent().get_ttl(&key), full - 30 * DAY_IN_LEDGERS);
        extend_persistent(&e, &key);
        assert_eq!(e.storage().persistent().get_ttl(&key), full);
    });
}
