//! Raw transaction workflow: build and hash, sign, then combine and verify
//!
//! Each step is independent of any other transaction. The only link between the
//! steps is the unsigned bundle string and the sighash records passed along.

use crate::address::AddressCodec;
use crate::consensus::{BUNDLE_SEPARATOR, UNLOCK_SCRIPT_SIZE};
use crate::transaction::builder::{build_unsigned_transaction, Destination, SpendCandidate};
use crate::transaction::p2pkh::{create_unlock_script, extract_pubkeyhash};
use crate::transaction::sighash::{sighashes, SigHashRecord};
use crate::transaction::{generate_signature, verify_signature};
use crate::util::{Error, Hash256, Result};
use crate::wire::UnsignedBundle;
use hex;

/// Builds an unsigned transaction and returns its bundle with the sighash of each input
///
/// Each record carries the address of the output its input spends.
pub fn create_empty_raw_transaction_and_hash(
    spends: &[SpendCandidate],
    destinations: &[Destination],
    lock_time: u32,
    codec: &dyn AddressCodec,
) -> Result<(String, Vec<SigHashRecord>)> {
    let tx = build_unsigned_transaction(spends, destinations, lock_time, codec)?;
    let bundle = UnsignedBundle::from_tx(&tx)?;
    let mut records = sighashes(&tx)?;
    for (record, tx_in) in records.iter_mut().zip(tx.inputs.iter()) {
        let pubkeyhash = extract_pubkeyhash(&tx_in.lock_script.0)?;
        record.address = codec.encode_address(&pubkeyhash.0)?;
    }
    Ok((bundle.encode(), records))
}

/// Signs a hex sighash with a 32 byte private key
pub fn sign_raw_transaction_hash(hash: &str, private_key: &[u8]) -> Result<[u8; 64]> {
    let sighash = Hash256::decode(hash)
        .map_err(|e| Error::BadArgument(format!("Invalid transaction hash: {}", e)))?;
    if private_key.len() != 32 {
        let msg = format!("Private key length {}, expected 32", private_key.len());
        return Err(Error::BadArgument(msg));
    }
    let mut key = [0; 32];
    key.clone_from_slice(private_key);
    generate_signature(&key, &sighash)
}

/// Verifies every signature against a freshly computed sighash and returns the signed hex
///
/// Fails as a whole if any record does not match or verify. The signed transaction is
/// the transaction hex of the bundle followed by the unlock script of each input.
pub fn combine_and_verify_raw_transaction(
    bundle: &str,
    records: &[SigHashRecord],
) -> Result<String> {
    if records.is_empty() {
        return Err(Error::BadArgument("No sighash records".to_string()));
    }

    let unsigned = UnsignedBundle::parse(bundle)?;
    if unsigned.segment_count() != records.len() {
        let msg = format!(
            "{} spent outputs in bundle but {} sighash records",
            unsigned.segment_count(),
            records.len()
        );
        return Err(Error::BadData(msg));
    }
    let tx = unsigned.to_tx()?;

    let recomputed = sighashes(&tx)?;
    for (i, (expected, record)) in recomputed.iter().zip(records.iter()).enumerate() {
        if expected.hash != record.hash {
            warn!(
                "Input {} sighash {} does not match {}",
                i,
                record.hash.encode(),
                expected.hash.encode()
            );
            return Err(Error::DigestMismatch(i));
        }
        if let Err(e) = verify_signature(&record.public_key, &expected.hash, &record.signature) {
            warn!("Input {} signature rejected: {}", i, e);
            return Err(Error::BadSignature(i));
        }
    }

    let mut witnesses = Vec::with_capacity(UNLOCK_SCRIPT_SIZE * records.len());
    for record in records.iter() {
        let unlock_script = create_unlock_script(&record.signature, &record.public_key)?;
        witnesses.extend_from_slice(&unlock_script.0);
    }

    let tx_hex = match bundle.find(BUNDLE_SEPARATOR) {
        Some(end) => &bundle[..end],
        None => bundle,
    };
    info!("Combined transaction {}", tx.hash()?.encode());
    Ok(format!("{}{}", tx_hex, hex::encode(witnesses)))
}
