//! Fuzz test for network name resolution
//!
//! Resolution must never panic, and any name that resolves must hand back
//! the shared built-in for that name.

#![no_main]

use bsv_chaincfg::{get_chain_params, get_chain_params_from_network};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    match get_chain_params(name) {
        Ok(params) => {
            assert_eq!(params.name, name);
            let again = get_chain_params_from_network(name).expect("resolved once");
            assert!(Arc::ptr_eq(&params, &again));
        }
        Err(_) => assert!(get_chain_params_from_network(name).is_none()),
    }
});
