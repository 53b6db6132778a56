//! Wire network identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Network magic identifying which BSV network a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitcoinNet(pub u32);

/// Main BSV network
pub const MAIN_NET: BitcoinNet = BitcoinNet(0xe8f3e1e3);

/// Public test network
pub const TEST_NET: BitcoinNet = BitcoinNet(0xf4f3e5f4);

/// Regression test network
pub const REG_TEST_NET: BitcoinNet = BitcoinNet(0xdab5bffa);

/// Scaling test network
pub const STN: BitcoinNet = BitcoinNet(0xf9c4cefb);

/// Teranode test network
pub const TERA_TEST_NET: BitcoinNet = BitcoinNet(0x0b110907);

/// Teranode scaling test network
pub const TERA_SCALING_TEST_NET: BitcoinNet = BitcoinNet(0xf9c4cefc);

impl BitcoinNet {
    /// Raw magic value
    pub const fn magic(self) -> u32 {
        self.0
    }

    /// Well-known name, if any
    pub fn known_name(self) -> Option<&'static str> {
        match self {
            MAIN_NET => Some("MainNet"),
            TEST_NET => Some("TestNet"),
            REG_TEST_NET => Some("RegTestNet"),
            STN => Some("STN"),
            TERA_TEST_NET => Some("TeraTestNet"),
            TERA_SCALING_TEST_NET => Some("TeraScalingTestNet"),
            _ => None,
        }
    }
}

impl From<u32> for BitcoinNet {
    fn from(magic: u32) -> Self {
        Self(magic)
    }
}

impl fmt::Display for BitcoinNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Unknown BitcoinNet ({})", self.0),
        }
    }
}
