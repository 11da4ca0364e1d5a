//! Build and sign transactions
//!
//! # Examples
//!
//! Build, sign and combine a transaction:
//!
//! ```rust
//! use hns_tx::address::pubkey_to_address;
//! use hns_tx::network::Network;
//! use hns_tx::transaction::builder::{Destination, SpendCandidate};
//! use hns_tx::transaction::raw::{
//!     combine_and_verify_raw_transaction, create_empty_raw_transaction_and_hash,
//!     sign_raw_transaction_hash,
//! };
//! use hns_tx::util::blake160;
//! use secp256k1::{PublicKey, Secp256k1, SecretKey};
//!
//! // Use real values here
//! let private_key = [1; 32];
//! let secp = Secp256k1::new();
//! let secret_key = SecretKey::from_slice(&private_key).unwrap();
//! let public_key = PublicKey::from_secret_key(&secp, &secret_key);
//! let public_key = public_key.serialize();
//!
//! let spends = vec![SpendCandidate {
//!     txid: hex::encode([7; 32]),
//!     vout: 0,
//!     lock_script: hex::encode(blake160(&public_key).0),
//!     amount: 10_000,
//! }];
//! let destinations = vec![Destination {
//!     address: pubkey_to_address(&public_key, Network::Mainnet).unwrap(),
//!     amount: 9_000,
//! }];
//!
//! let network = Network::Mainnet;
//! let (bundle, mut records) =
//!     create_empty_raw_transaction_and_hash(&spends, &destinations, 0, &network).unwrap();
//! for record in records.iter_mut() {
//!     let signature = sign_raw_transaction_hash(&record.hash.encode(), &private_key).unwrap();
//!     record.signature = signature.to_vec();
//!     record.public_key = public_key.to_vec();
//! }
//! let signed_tx = combine_and_verify_raw_transaction(&bundle, &records).unwrap();
//! ```

use crate::consensus::{PUBKEY_SIZE, SIGNATURE_SIZE};
use crate::util::{Error, Hash256, Result};
use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1, SecretKey};

pub mod builder;
pub mod p2pkh;
pub mod raw;
pub mod sighash;

/// Generates a compact r||s signature for a transaction sighash
///
/// The nonce is deterministic (RFC6979) and s is always low.
pub fn generate_signature(private_key: &[u8; 32], sighash: &Hash256) -> Result<[u8; 64]> {
    let secp = Secp256k1::signing_only();
    let message = Message::from_digest(sighash.0);
    let secret_key = SecretKey::from_slice(private_key)?;
    let mut signature = secp.sign_ecdsa(&message, &secret_key);
    signature.normalize_s();
    Ok(signature.serialize_compact())
}

/// Verifies a compact signature over a sighash against a compressed public key
pub fn verify_signature(public_key: &[u8], sighash: &Hash256, signature: &[u8]) -> Result<()> {
    if public_key.len() != PUBKEY_SIZE {
        let msg = format!("Public key length {}, expected {}", public_key.len(), PUBKEY_SIZE);
        return Err(Error::BadArgument(msg));
    }
    if signature.len() != SIGNATURE_SIZE {
        let msg = format!("Signature length {}, expected {}", signature.len(), SIGNATURE_SIZE);
        return Err(Error::BadArgument(msg));
    }
    let secp = Secp256k1::verification_only();
    let message = Message::from_digest(sighash.0);
    let public_key = PublicKey::from_slice(public_key)?;
    let signature = Signature::from_compact(signature)?;
    secp.verify_ecdsa(&message, &signature, &public_key)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex;

    fn key_pair() -> ([u8; 32], Vec<u8>) {
        let mut private_key = [0; 32];
        private_key.clone_from_slice(
            &hex::decode("370b3b5c6f74d0052b39982cd351d2d0901d821429e311a3df75515c40cceb68")
                .unwrap(),
        );
        let public_key =
            hex::decode("02a0da6c79e6448afbd063a3055f090aced23e985666f4afd5328f8580d68cd909")
                .unwrap();
        (private_key, public_key)
    }

    #[test]
    fn sign_verify() {
        let (private_key, public_key) = key_pair();
        let sighash = Hash256([3; 32]);
        let sig = generate_signature(&private_key, &sighash).unwrap();
        assert!(verify_signature(&public_key, &sighash, &sig).is_ok());
        assert!(generate_signature(&private_key, &sighash).unwrap() == sig);
    }

    #[test]
    fn tampering_fails() {
        let (private_key, public_key) = key_pair();
        let sighash = Hash256([3; 32]);
        let sig = generate_signature(&private_key, &sighash).unwrap();

        let mut bad_hash = sighash;
        bad_hash.0[31] ^= 1;
        assert!(verify_signature(&public_key, &bad_hash, &sig).is_err());

        let mut bad_sig = sig;
        bad_sig[10] ^= 1;
        assert!(verify_signature(&public_key, &sighash, &bad_sig).is_err());

        let mut bad_pub = public_key.clone();
        bad_pub[20] ^= 1;
        assert!(verify_signature(&bad_pub, &sighash, &sig).is_err());
    }

    #[test]
    fn wrong_lengths() {
        let (private_key, public_key) = key_pair();
        let sighash = Hash256([3; 32]);
        let sig = generate_signature(&private_key, &sighash).unwrap();
        assert!(verify_signature(&public_key[1..], &sighash, &sig).is_err());
        assert!(verify_signature(&public_key, &sighash, &sig[1..]).is_err());
        assert!(generate_signature(&[0; 32], &sighash).is_err());
    }
}
