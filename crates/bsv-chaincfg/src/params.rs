//! BSV network parameter sets

use crate::hash::{new_hash_from_str, Hash};
use crate::wire::{self, BitcoinNet};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

const MAIN_NET_GENESIS: &str = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
const TEST_NET_GENESIS: &str = "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943";
const REG_TEST_GENESIS: &str = "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206";

/// BIP-32 version bytes for mainnet (`xprv` / `xpub`)
const MAIN_HD_PRIVATE_KEY_ID: [u8; 4] = [0x04, 0x88, 0xad, 0xe4];
const MAIN_HD_PUBLIC_KEY_ID: [u8; 4] = [0x04, 0x88, 0xb2, 0x1e];

/// BIP-32 version bytes shared by the test networks (`tprv` / `tpub`)
const TEST_HD_PRIVATE_KEY_ID: [u8; 4] = [0x04, 0x35, 0x83, 0x94];
const TEST_HD_PUBLIC_KEY_ID: [u8; 4] = [0x04, 0x35, 0x87, 0xcf];

/// DNS seed used to discover peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Seed hostname
    pub host: String,
    /// Whether the seed supports service-bit filtering
    #[serde(default)]
    pub has_filtering: bool,
}

impl DnsSeed {
    /// Create a new seed entry
    pub fn new(host: impl Into<String>, has_filtering: bool) -> Self {
        Self {
            host: host.into(),
            has_filtering,
        }
    }
}

impl fmt::Display for DnsSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}

/// Parameter set describing one BSV network
///
/// Registered sets are shared as `Arc<Params>`; the registry and the
/// resolver hand out the same allocation, so callers can compare with
/// `Arc::ptr_eq` where value equality is not enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Human-readable network name
    pub name: String,
    /// Wire network magic
    pub net: BitcoinNet,
    /// Default P2P port
    pub default_port: u16,
    /// Peer discovery seeds
    #[serde(default)]
    pub dns_seeds: Vec<DnsSeed>,
    /// Hash of the genesis block
    pub genesis_hash: Hash,
    /// Blocks before a coinbase output is spendable
    pub coinbase_maturity: u16,
    /// Legacy P2PKH address version byte
    pub legacy_pub_key_hash_addr_id: u8,
    /// Legacy P2SH address version byte
    pub legacy_script_hash_addr_id: u8,
    /// WIF private key version byte
    pub private_key_id: u8,
    /// BIP-32 extended private key version bytes
    pub hd_private_key_id: [u8; 4],
    /// BIP-32 extended public key version bytes
    pub hd_public_key_id: [u8; 4],
    /// BIP-44 coin type
    pub hd_coin_type: u32,
    /// Cash address human-readable prefix (no trailing `:`)
    pub cash_address_prefix: String,
}

impl Params {
    /// Get mainnet parameters
    pub fn mainnet() -> Self {
        Self {
            name: "mainnet".to_string(),
            net: wire::MAIN_NET,
            default_port: 8333,
            dns_seeds: vec![DnsSeed::new("seed.bitcoinsv.io", true)],
            genesis_hash: new_hash_from_str(MAIN_NET_GENESIS),
            coinbase_maturity: 100,
            legacy_pub_key_hash_addr_id: 0x00, // starts with 1
            legacy_script_hash_addr_id: 0x05,  // starts with 3
            private_key_id: 0x80,              // starts with 5 (uncompressed) or K (compressed)
            hd_private_key_id: MAIN_HD_PRIVATE_KEY_ID,
            hd_public_key_id: MAIN_HD_PUBLIC_KEY_ID,
            hd_coin_type: 236,
            cash_address_prefix: "bitcoincash".to_string(),
        }
    }

    /// Get testnet parameters
    pub fn testnet() -> Self {
        Self {
            name: "testnet".to_string(),
            net: wire::TEST_NET,
            default_port: 18333,
            dns_seeds: vec![DnsSeed::new("testnet-seed.bitcoinsv.io", true)],
            genesis_hash: new_hash_from_str(TEST_NET_GENESIS),
            coinbase_maturity: 100,
            legacy_pub_key_hash_addr_id: 0x6f, // starts with m or n
            legacy_script_hash_addr_id: 0xc4,  // starts with 2
            private_key_id: 0xef,              // starts with 9 (uncompressed) or c (compressed)
            hd_private_key_id: TEST_HD_PRIVATE_KEY_ID,
            hd_public_key_id: TEST_HD_PUBLIC_KEY_ID,
            hd_coin_type: 1,
            cash_address_prefix: "bchtest".to_string(),
        }
    }

    /// Get regtest parameters
    pub fn regtest() -> Self {
        Self {
            name: "regtest".to_string(),
            net: wire::REG_TEST_NET,
            default_port: 18444,
            dns_seeds: Vec::new(),
            genesis_hash: new_hash_from_str(REG_TEST_GENESIS),
            coinbase_maturity: 100,
            legacy_pub_key_hash_addr_id: 0x6f,
            legacy_script_hash_addr_id: 0xc4,
            private_key_id: 0xef,
            hd_private_key_id: TEST_HD_PRIVATE_KEY_ID,
            hd_public_key_id: TEST_HD_PUBLIC_KEY_ID,
            hd_coin_type: 1,
            cash_address_prefix: "bchreg".to_string(),
        }
    }

    /// Get scaling test network parameters
    pub fn stn() -> Self {
        Self {
            name: "stn".to_string(),
            net: wire::STN,
            default_port: 9333,
            dns_seeds: vec![DnsSeed::new("stn-seed.bitcoinsv.io", true)],
            genesis_hash: new_hash_from_str(TEST_NET_GENESIS),
            coinbase_maturity: 100,
            legacy_pub_key_hash_addr_id: 0x6f,
            legacy_script_hash_addr_id: 0xc4,
            private_key_id: 0xef,
            hd_private_key_id: TEST_HD_PRIVATE_KEY_ID,
            hd_public_key_id: TEST_HD_PUBLIC_KEY_ID,
            hd_coin_type: 1,
            cash_address_prefix: "bchtest".to_string(),
        }
    }

    /// Get Teranode test network parameters
    pub fn teratestnet() -> Self {
        Self {
            name: "teratestnet".to_string(),
            net: wire::TERA_TEST_NET,
            default_port: 18333,
            dns_seeds: Vec::new(),
            genesis_hash: new_hash_from_str(TEST_NET_GENESIS),
            coinbase_maturity: 100,
            legacy_pub_key_hash_addr_id: 0x6f,
            legacy_script_hash_addr_id: 0xc4,
            private_key_id: 0xef,
            hd_private_key_id: TEST_HD_PRIVATE_KEY_ID,
            hd_public_key_id: TEST_HD_PUBLIC_KEY_ID,
            hd_coin_type: 1,
            cash_address_prefix: "bchtest".to_string(),
        }
    }

    /// Get Teranode scaling test network parameters
    pub fn tstn() -> Self {
        Self {
            name: "tstn".to_string(),
            net: wire::TERA_SCALING_TEST_NET,
            default_port: 18333,
            dns_seeds: Vec::new(),
            genesis_hash: new_hash_from_str(TEST_NET_GENESIS),
            coinbase_maturity: 100,
            legacy_pub_key_hash_addr_id: 0x6f,
            legacy_script_hash_addr_id: 0xc4,
            private_key_id: 0xef,
            hd_private_key_id: TEST_HD_PRIVATE_KEY_ID,
            hd_public_key_id: TEST_HD_PUBLIC_KEY_ID,
            hd_coin_type: 1,
            cash_address_prefix: "bchtest".to_string(),
        }
    }

    /// Shared references to every built-in parameter set
    pub fn builtins() -> [Arc<Params>; 6] {
        [
            Arc::clone(&*MAIN_NET_PARAMS),
            Arc::clone(&*TEST_NET_PARAMS),
            Arc::clone(&*REGRESSION_NET_PARAMS),
            Arc::clone(&*STN_PARAMS),
            Arc::clone(&*TERA_TEST_NET_PARAMS),
            Arc::clone(&*TERA_SCALING_TEST_NET_PARAMS),
        ]
    }

    /// Parse a custom network definition from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Params = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Load a custom network definition from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the fields the registry relies on
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidParams("network name is empty".to_string()));
        }
        if self.cash_address_prefix.is_empty() {
            return Err(Error::InvalidParams(format!(
                "{}: cash address prefix is empty",
                self.name
            )));
        }
        if self.cash_address_prefix.contains(':') {
            return Err(Error::InvalidParams(format!(
                "{}: cash address prefix must not contain ':'",
                self.name
            )));
        }
        if self.hd_private_key_id == self.hd_public_key_id {
            return Err(Error::InvalidParams(format!(
                "{}: HD private and public key IDs are identical",
                self.name
            )));
        }
        Ok(())
    }
}

/// Shared mainnet parameters
pub static MAIN_NET_PARAMS: Lazy<Arc<Params>> = Lazy::new(|| Arc::new(Params::mainnet()));

/// Shared testnet parameters
pub static TEST_NET_PARAMS: Lazy<Arc<Params>> = Lazy::new(|| Arc::new(Params::testnet()));

/// Shared regtest parameters
pub static REGRESSION_NET_PARAMS: Lazy<Arc<Params>> = Lazy::new(|| Arc::new(Params::regtest()));

/// Shared scaling test network parameters
pub static STN_PARAMS: Lazy<Arc<Params>> = Lazy::new(|| Arc::new(Params::stn()));

/// Shared Teranode test network parameters
pub static TERA_TEST_NET_PARAMS: Lazy<Arc<Params>> =
    Lazy::new(|| Arc::new(Params::teratestnet()));

/// Shared Teranode scaling test network parameters
pub static TERA_SCALING_TEST_NET_PARAMS: Lazy<Arc<Params>> =
    Lazy::new(|| Arc::new(Params::tstn()));
