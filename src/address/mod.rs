//! Address encoding and decoding
//!
//! # Examples
//!
//! Extract the public key hash from a bech32 address:
//!
//! ```rust
//! use hns_tx::address::addr_decode;
//! use hns_tx::network::Network;
//!
//! let addr = "hs1q2vnxeuq4ueqh36hln642kmkjjpx26083upy9d5";
//! let pubkeyhash = addr_decode(&addr, Network::Mainnet).unwrap();
//! assert_eq!(pubkeyhash.len(), 20);
//! ```
//!
//! Encode a public key into an address:
//!
//! ```rust
//! use hns_tx::address::pubkey_to_address;
//! use hns_tx::network::Network;
//!
//! let addr = pubkey_to_address(&[2; 33], Network::Mainnet).unwrap();
//! assert!(addr.starts_with("hs1q"));
//! ```
//!
use crate::consensus::PUBKEY_SIZE;
use crate::network::Network;
use crate::util::{blake160, Error, Result};
use bech32::{segwit, Hrp};

/// Maps between human-readable addresses and the hashes they commit to
pub trait AddressCodec {
    /// Decodes an address into its hash
    fn decode_address(&self, address: &str) -> Result<Vec<u8>>;

    /// Encodes a hash into an address
    fn encode_address(&self, hash: &[u8]) -> Result<String>;
}

impl AddressCodec for Network {
    fn decode_address(&self, address: &str) -> Result<Vec<u8>> {
        addr_decode(address, *self)
    }

    fn encode_address(&self, hash: &[u8]) -> Result<String> {
        addr_encode(hash, *self)
    }
}

/// Converts a witness version 0 program to its bech32 address
pub fn addr_encode(hash: &[u8], network: Network) -> Result<String> {
    let hrp = Hrp::parse(network.address_hrp()).map_err(|e| Error::AddressFormat(e.to_string()))?;
    segwit::encode(hrp, segwit::VERSION_0, hash).map_err(|e| Error::AddressFormat(e.to_string()))
}

/// Decodes a bech32 address to its witness version 0 program
pub fn addr_decode(input: &str, network: Network) -> Result<Vec<u8>> {
    let (hrp, version, program) =
        segwit::decode(input).map_err(|e| Error::AddressFormat(e.to_string()))?;

    let prefix = format!("{}", hrp).to_lowercase();
    if prefix != network.address_hrp() {
        let msg = format!("Prefix {} is not {}", prefix, network.address_hrp());
        return Err(Error::AddressFormat(msg));
    }

    if version != segwit::VERSION_0 {
        let msg = format!("Unsupported witness version {:?}", version);
        return Err(Error::AddressFormat(msg));
    }

    Ok(program)
}

/// Converts a compressed public key to the address that pays to it
pub fn pubkey_to_address(public_key: &[u8], network: Network) -> Result<String> {
    if public_key.len() != PUBKEY_SIZE {
        let msg = format!("Public key length {}, expected {}", public_key.len(), PUBKEY_SIZE);
        return Err(Error::BadArgument(msg));
    }
    addr_encode(&blake160(public_key).0, network)
}
