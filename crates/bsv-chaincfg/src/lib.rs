//! BSV chain configuration parameters and network registry
//!
//! This crate provides the parameter sets of the well-known BSV networks
//! (mainnet, testnet, regtest and the scaling test networks), a registry
//! that indexes their address, HD key and cash-address magics, and a
//! resolver that maps canonical network names to the shared built-ins.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod hash;
pub mod params;
pub mod registry;
pub mod resolver;
pub mod wire;

pub use hash::{new_hash_from_str, Hash};
pub use params::{
    DnsSeed, Params, MAIN_NET_PARAMS, REGRESSION_NET_PARAMS, STN_PARAMS,
    TERA_SCALING_TEST_NET_PARAMS, TERA_TEST_NET_PARAMS, TEST_NET_PARAMS,
};
pub use registry::{
    default_registry, hd_private_key_to_public_key_id, is_cash_address_prefix,
    is_pub_key_hash_addr_id, is_script_hash_addr_id, register, AddrIdKind, Registry,
};
pub use resolver::{get_chain_params, get_chain_params_from_network, CHAIN_NAMES};
pub use wire::BitcoinNet;

/// Error types for chain configuration operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A network with the same identifier is already registered
    #[error("duplicate network: {0}")]
    DuplicateNet(BitcoinNet),

    /// HD private key identifier is not registered (or malformed)
    #[error("unknown hd private extended key bytes")]
    UnknownHdKeyId,

    /// Network name is not one of the canonical names
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// Hash string could not be parsed
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    /// Parameter set failed validation
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error reports an already-registered network
    pub fn is_duplicate_net(&self) -> bool {
        matches!(self, Error::DuplicateNet(_))
    }
}

/// Result type for chain configuration operations
pub type Result<T> = std::result::Result<T, Error>;
