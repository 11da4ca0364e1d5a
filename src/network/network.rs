use crate::util::{Error, Result};

/// Network type
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
    Simnet,
}

impl Default for Network {
    fn default() -> Network {
        Network::Mainnet
    }
}

impl Network {
    /// Parses a network from its name as used by hsd
    pub fn from_name(name: &str) -> Result<Network> {
        match name.to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "simnet" => Ok(Network::Simnet),
            _ => {
                let msg = format!("Unknown network name: {}", name);
                Err(Error::BadArgument(msg))
            }
        }
    }

    /// Returns the bech32 human-readable part for addresses
    pub fn address_hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => "hs",
            Network::Testnet => "ts",
            Network::Regtest => "rs",
            Network::Simnet => "ss",
        }
    }
}
