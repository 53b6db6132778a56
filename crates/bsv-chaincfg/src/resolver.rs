//! Network name resolution

use crate::params::{
    Params, MAIN_NET_PARAMS, REGRESSION_NET_PARAMS, STN_PARAMS, TERA_SCALING_TEST_NET_PARAMS,
    TERA_TEST_NET_PARAMS, TEST_NET_PARAMS,
};
use crate::{Error, Result};
use std::sync::Arc;

/// Canonical network names accepted by [`get_chain_params`]
pub const CHAIN_NAMES: [&str; 6] = ["mainnet", "testnet", "regtest", "stn", "teratestnet", "tstn"];

/// Get the built-in parameters for a canonical network name
///
/// Matching is exact and case-sensitive. The returned `Arc` is the shared
/// built-in, so `Arc::ptr_eq` against e.g. [`MAIN_NET_PARAMS`] holds.
pub fn get_chain_params(name: &str) -> Result<Arc<Params>> {
    get_chain_params_from_network(name).ok_or_else(|| Error::UnknownNetwork(name.to_string()))
}

/// Like [`get_chain_params`], returning `None` for unknown names
pub fn get_chain_params_from_network(name: &str) -> Option<Arc<Params>> {
    let params = match name {
        "mainnet" => &*MAIN_NET_PARAMS,
        "testnet" => &*TEST_NET_PARAMS,
        "regtest" => &*REGRESSION_NET_PARAMS,
        "stn" => &*STN_PARAMS,
        "teratestnet" => &*TERA_TEST_NET_PARAMS,
        "tstn" => &*TERA_SCALING_TEST_NET_PARAMS,
        _ => {
            tracing::trace!("No built-in network named {:?}", name);
            return None;
        }
    };
    Some(Arc::clone(params))
}
