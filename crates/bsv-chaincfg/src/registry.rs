//! Registry of network parameter sets
//!
//! The registry indexes every registered [`Params`] by network magic and by
//! the address, HD key and cash-address magics it carries. It only grows:
//! there is no way to unregister a network.
//!
//! All four indices live behind one lock. Registration holds the write lock
//! across the duplicate check and every insert, so a registration is either
//! fully visible to lookups or not at all.

use crate::params::Params;
use crate::wire::BitcoinNet;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Cash address separator between prefix and payload
const CASH_ADDRESS_SEPARATOR: char = ':';

/// Which legacy address field a version byte came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrIdKind {
    /// Pay-to-pubkey-hash version byte
    PubKeyHash,
    /// Pay-to-script-hash version byte
    ScriptHash,
}

#[derive(Debug, Clone)]
struct AddrIdEntry {
    params: Arc<Params>,
    kind: AddrIdKind,
}

#[derive(Debug, Default)]
struct Indices {
    /// Uniqueness anchor: one entry per registered network
    registered_nets: HashMap<BitcoinNet, Arc<Params>>,
    /// Version byte to every (network, field) pair that uses it
    by_addr_id: HashMap<u8, Vec<AddrIdEntry>>,
    hd_priv_to_pub: HashMap<[u8; 4], [u8; 4]>,
    /// Lowercased prefixes
    cash_addr_prefixes: HashMap<BitcoinNet, String>,
}

/// Network parameter registry
#[derive(Debug)]
pub struct Registry {
    inner: RwLock<Indices>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Indices::default()),
        }
    }

    /// Create a registry holding every built-in network
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for params in Params::builtins() {
            // Built-in magics are distinct, so this cannot collide.
            if let Err(e) = registry.register(params) {
                tracing::error!("Failed to register built-in network: {}", e);
            }
        }
        registry
    }

    /// Register a network's parameters
    ///
    /// Fails with [`Error::DuplicateNet`] if a network with the same magic
    /// is already registered, leaving every index untouched.
    pub fn register(&self, params: Arc<Params>) -> Result<()> {
        let mut inner = self.inner.write();

        if inner.registered_nets.contains_key(&params.net) {
            tracing::warn!(
                "Network {} ({}) is already registered",
                params.name,
                params.net
            );
            return Err(Error::DuplicateNet(params.net));
        }

        inner
            .registered_nets
            .insert(params.net, Arc::clone(&params));

        for (id, kind) in [
            (params.legacy_pub_key_hash_addr_id, AddrIdKind::PubKeyHash),
            (params.legacy_script_hash_addr_id, AddrIdKind::ScriptHash),
        ] {
            inner.by_addr_id.entry(id).or_default().push(AddrIdEntry {
                params: Arc::clone(&params),
                kind,
            });
        }

        if let Some(previous) = inner
            .hd_priv_to_pub
            .insert(params.hd_private_key_id, params.hd_public_key_id)
        {
            if previous != params.hd_public_key_id {
                tracing::warn!(
                    "Network {} remaps HD private key ID {} from {} to {}",
                    params.name,
                    hex::encode(params.hd_private_key_id),
                    hex::encode(previous),
                    hex::encode(params.hd_public_key_id)
                );
            }
        }

        inner
            .cash_addr_prefixes
            .insert(params.net, params.cash_address_prefix.to_lowercase());

        tracing::debug!("Registered network {} ({})", params.name, params.net);
        Ok(())
    }

    /// Check whether `id` is the P2PKH version byte of registered network `net`
    pub fn is_pub_key_hash_addr_id(&self, net: BitcoinNet, id: u8) -> bool {
        self.has_addr_id(net, id, AddrIdKind::PubKeyHash)
    }

    /// Check whether `id` is the P2SH version byte of registered network `net`
    pub fn is_script_hash_addr_id(&self, net: BitcoinNet, id: u8) -> bool {
        self.has_addr_id(net, id, AddrIdKind::ScriptHash)
    }

    fn has_addr_id(&self, net: BitcoinNet, id: u8, kind: AddrIdKind) -> bool {
        let inner = self.inner.read();
        inner.by_addr_id.get(&id).is_some_and(|entries| {
            entries
                .iter()
                .any(|entry| entry.kind == kind && entry.params.net == net)
        })
    }

    /// Check whether `candidate` starts with the cash address prefix of `net`
    ///
    /// The candidate must contain a `:` separator; the part before the first
    /// separator is compared case-insensitively.
    pub fn is_cash_address_prefix(&self, net: BitcoinNet, candidate: &str) -> bool {
        let Some((prefix, _)) = candidate.split_once(CASH_ADDRESS_SEPARATOR) else {
            return false;
        };

        let inner = self.inner.read();
        inner
            .cash_addr_prefixes
            .get(&net)
            .is_some_and(|registered| *registered == prefix.to_lowercase())
    }

    /// Map an HD extended private key ID to its public key ID
    ///
    /// Any input that is not exactly four bytes is reported as unknown.
    /// The returned bytes are a copy.
    pub fn hd_private_key_to_public_key_id(&self, priv_id: &[u8]) -> Result<Vec<u8>> {
        let key: [u8; 4] = priv_id.try_into().map_err(|_| Error::UnknownHdKeyId)?;

        let inner = self.inner.read();
        inner
            .hd_priv_to_pub
            .get(&key)
            .map(|pub_id| pub_id.to_vec())
            .ok_or(Error::UnknownHdKeyId)
    }

    /// Get the registered parameters for `net`
    pub fn get(&self, net: BitcoinNet) -> Option<Arc<Params>> {
        self.inner.read().registered_nets.get(&net).cloned()
    }

    /// Check if `net` has been registered
    pub fn is_registered(&self, net: BitcoinNet) -> bool {
        self.inner.read().registered_nets.contains_key(&net)
    }

    /// All registered network magics, sorted
    pub fn registered_networks(&self) -> Vec<BitcoinNet> {
        let mut nets: Vec<_> = self.inner.read().registered_nets.keys().copied().collect();
        nets.sort();
        nets
    }

    /// Number of registered networks
    pub fn len(&self) -> usize {
        self.inner.read().registered_nets.len()
    }

    /// Check if no network is registered
    pub fn is_empty(&self) -> bool {
        self.inner.read().registered_nets.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::with_builtins);

/// Process-wide registry, pre-populated with the built-in networks
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Register a network in the process-wide registry
pub fn register(params: Arc<Params>) -> Result<()> {
    default_registry().register(params)
}

/// P2PKH version byte check against the process-wide registry
pub fn is_pub_key_hash_addr_id(net: BitcoinNet, id: u8) -> bool {
    default_registry().is_pub_key_hash_addr_id(net, id)
}

/// P2SH version byte check against the process-wide registry
pub fn is_script_hash_addr_id(net: BitcoinNet, id: u8) -> bool {
    default_registry().is_script_hash_addr_id(net, id)
}

/// Cash address prefix check against the process-wide registry
pub fn is_cash_address_prefix(net: BitcoinNet, candidate: &str) -> bool {
    default_registry().is_cash_address_prefix(net, candidate)
}

/// HD key ID mapping against the process-wide registry
pub fn hd_private_key_to_public_key_id(priv_id: &[u8]) -> Result<Vec<u8>> {
    default_registry().hd_private_key_to_public_key_id(priv_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MAIN_NET_PARAMS, REGRESSION_NET_PARAMS, TEST_NET_PARAMS};
    use crate::wire;

    fn mock_params() -> Params {
        Params {
            name: "mocknet".to_string(),
            net: BitcoinNet(u32::MAX),
            legacy_pub_key_hash_addr_id: 0x9f,
            legacy_script_hash_addr_id: 0xf9,
            hd_private_key_id: [0x01, 0x02, 0x03, 0x04],
            hd_public_key_id: [0x05, 0x06, 0x07, 0x08],
            cash_address_prefix: "bsvmock".to_string(),
            ..Params::mainnet()
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_pub_key_hash_addr_id(wire::MAIN_NET, 0x00));
        assert!(!registry.is_cash_address_prefix(wire::MAIN_NET, "bitcoincash:"));
        assert!(registry
            .hd_private_key_to_public_key_id(&MAIN_NET_PARAMS.hd_private_key_id)
            .is_err());
    }

    #[test]
    fn test_with_builtins() {
        let registry = Registry::with_builtins();
        assert_eq!(registry.len(), 6);
        for params in Params::builtins() {
            assert!(registry.is_registered(params.net));
            let stored = registry.get(params.net).unwrap();
            assert!(Arc::ptr_eq(&stored, &params));
        }
    }

    #[test]
    fn test_duplicate_leaves_indices_untouched() {
        let registry = Registry::new();
        registry.register(Arc::new(mock_params())).unwrap();

        let mut clash = mock_params();
        clash.legacy_pub_key_hash_addr_id = 0x42;
        clash.hd_private_key_id = [0xaa; 4];
        clash.cash_address_prefix = "other".to_string();

        let err = registry.register(Arc::new(clash)).unwrap_err();
        assert!(matches!(err, Error::DuplicateNet(net) if net == BitcoinNet(u32::MAX)));

        assert_eq!(registry.len(), 1);
        assert!(!registry.is_pub_key_hash_addr_id(BitcoinNet(u32::MAX), 0x42));
        assert!(registry.is_pub_key_hash_addr_id(BitcoinNet(u32::MAX), 0x9f));
        assert!(registry.hd_private_key_to_public_key_id(&[0xaa; 4]).is_err());
        assert!(!registry.is_cash_address_prefix(BitcoinNet(u32::MAX), "other:"));
        assert!(registry.is_cash_address_prefix(BitcoinNet(u32::MAX), "bsvmock:"));
    }

    #[test]
    fn test_addr_id_families_are_separate() {
        let registry = Registry::with_builtins();
        let main = &*MAIN_NET_PARAMS;

        assert!(registry.is_pub_key_hash_addr_id(main.net, main.legacy_pub_key_hash_addr_id));
        assert!(registry.is_script_hash_addr_id(main.net, main.legacy_script_hash_addr_id));
        assert!(!registry.is_pub_key_hash_addr_id(main.net, main.legacy_script_hash_addr_id));
        assert!(!registry.is_script_hash_addr_id(main.net, main.legacy_pub_key_hash_addr_id));
    }

    #[test]
    fn test_addr_id_requires_matching_network() {
        let registry = Registry::with_builtins();
        // Testnet's P2PKH byte is not valid for mainnet.
        assert!(!registry.is_pub_key_hash_addr_id(
            wire::MAIN_NET,
            TEST_NET_PARAMS.legacy_pub_key_hash_addr_id
        ));
        assert!(!registry.is_pub_key_hash_addr_id(
            BitcoinNet(0),
            MAIN_NET_PARAMS.legacy_pub_key_hash_addr_id
        ));
    }

    #[test]
    fn test_cross_network_byte_collision_allowed() {
        let registry = Registry::with_builtins();
        let mut custom = mock_params();
        // Reuse mainnet's P2SH byte as this network's P2PKH byte.
        custom.legacy_pub_key_hash_addr_id = MAIN_NET_PARAMS.legacy_script_hash_addr_id;
        registry.register(Arc::new(custom)).unwrap();

        let custom_net = BitcoinNet(u32::MAX);
        assert!(registry.is_pub_key_hash_addr_id(custom_net, 0x05));
        assert!(!registry.is_script_hash_addr_id(custom_net, 0x05));
        assert!(registry.is_script_hash_addr_id(wire::MAIN_NET, 0x05));
        assert!(!registry.is_pub_key_hash_addr_id(wire::MAIN_NET, 0x05));
    }

    #[test]
    fn test_cash_address_prefix() {
        let registry = Registry::with_builtins();
        let prefix = &REGRESSION_NET_PARAMS.cash_address_prefix;
        let net = REGRESSION_NET_PARAMS.net;

        assert!(registry.is_cash_address_prefix(net, &format!("{}:", prefix)));
        assert!(registry.is_cash_address_prefix(net, &format!("{}:qpm2q", prefix).to_uppercase()));
        assert!(!registry.is_cash_address_prefix(net, prefix));
        assert!(!registry.is_cash_address_prefix(net, "bitcoincash:"));
        assert!(!registry.is_cash_address_prefix(net, ":"));
        assert!(!registry.is_cash_address_prefix(BitcoinNet(0xff), "abc1"));
    }

    #[test]
    fn test_mixed_case_prefix_is_normalized() {
        let registry = Registry::new();
        let mut custom = mock_params();
        custom.cash_address_prefix = "BsvMock".to_string();
        registry.register(Arc::new(custom)).unwrap();

        assert!(registry.is_cash_address_prefix(BitcoinNet(u32::MAX), "bsvmock:"));
        assert!(registry.is_cash_address_prefix(BitcoinNet(u32::MAX), "BSVMOCK:"));
    }

    #[test]
    fn test_hd_key_mapping() {
        let registry = Registry::with_builtins();
        let pub_id = registry
            .hd_private_key_to_public_key_id(&MAIN_NET_PARAMS.hd_private_key_id)
            .unwrap();
        assert_eq!(pub_id, MAIN_NET_PARAMS.hd_public_key_id);

        assert!(matches!(
            registry.hd_private_key_to_public_key_id(&[0xff; 4]),
            Err(Error::UnknownHdKeyId)
        ));
        assert!(matches!(
            registry.hd_private_key_to_public_key_id(&[0xff]),
            Err(Error::UnknownHdKeyId)
        ));
        assert!(matches!(
            registry.hd_private_key_to_public_key_id(&[0x04, 0x88, 0xad, 0xe4, 0x00]),
            Err(Error::UnknownHdKeyId)
        ));
    }

    #[test]
    fn test_hd_key_result_is_a_copy() {
        let registry = Registry::with_builtins();
        let mut pub_id = registry
            .hd_private_key_to_public_key_id(&TEST_NET_PARAMS.hd_private_key_id)
            .unwrap();
        pub_id[0] = 0xff;

        let again = registry
            .hd_private_key_to_public_key_id(&TEST_NET_PARAMS.hd_private_key_id)
            .unwrap();
        assert_eq!(again, TEST_NET_PARAMS.hd_public_key_id);
    }

    #[test]
    fn test_registered_networks_sorted() {
        let registry = Registry::with_builtins();
        let nets = registry.registered_networks();
        assert_eq!(nets.len(), 6);
        assert!(nets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_default_registry_has_builtins() {
        assert!(is_pub_key_hash_addr_id(
            wire::MAIN_NET,
            MAIN_NET_PARAMS.legacy_pub_key_hash_addr_id
        ));
        assert!(register(Arc::clone(&*MAIN_NET_PARAMS))
            .unwrap_err()
            .is_duplicate_net());
    }
}
