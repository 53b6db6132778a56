//! Fuzz test for registry lookups
//!
//! Arbitrary network magics, version bytes and prefixes must be answered
//! without panicking.

#![no_main]

use bsv_chaincfg::{default_registry, BitcoinNet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }

    let net = BitcoinNet(u32::from_le_bytes([data[0], data[1], data[2], data[3]]));
    let id = data[4];
    let registry = default_registry();

    let _ = registry.is_pub_key_hash_addr_id(net, id);
    let _ = registry.is_script_hash_addr_id(net, id);
    let _ = registry.hd_private_key_to_public_key_id(&data[5..]);

    if let Ok(candidate) = std::str::from_utf8(&data[5..]) {
        let _ = registry.is_cash_address_prefix(net, candidate);
    }
});
