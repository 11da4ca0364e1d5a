//! Transaction sighash helpers

use crate::consensus::SIGHASH_ALL;
use crate::util::{blake2b256, Error, Hash256, Result, Serializable};
use crate::wire::{OutPoint, Tx};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Digest to sign for one input, with the signature and key attached once signed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SigHashRecord {
    /// Sighash of the input
    pub hash: Hash256,
    /// Address of the output being spent, for display
    pub address: String,
    /// Compact r||s signature over the hash
    pub signature: Vec<u8>,
    /// Compressed public key the signature verifies against
    pub public_key: Vec<u8>,
}

/// Cache for sighash intermediate values to avoid quadratic hashing
///
/// This is only valid for one transaction, but may be used for multiple signatures.
pub struct SigHashCache {
    hash_prevouts: Option<Hash256>,
    hash_sequence: Option<Hash256>,
    hash_outputs: Option<Hash256>,
}

impl SigHashCache {
    /// Creates a new cache
    pub fn new() -> SigHashCache {
        SigHashCache {
            hash_prevouts: None,
            hash_sequence: None,
            hash_outputs: None,
        }
    }
}

/// Generates the digest that the signature of an input commits to
///
/// The spent lock script and amount are taken from the input itself. Only
/// SIGHASH_ALL is supported.
///
/// # Arguments
///
/// * `tx` - Spending transaction
/// * `n_input` - Spending input index
/// * `sighash_type` - Sighash flags
/// * `cache` - Cache to store intermediate values for future sighash calls.
pub fn sighash(
    tx: &Tx,
    n_input: usize,
    sighash_type: u8,
    cache: &mut SigHashCache,
) -> Result<Hash256> {
    if n_input >= tx.inputs.len() {
        return Err(Error::BadArgument("input out of tx_in range".to_string()));
    }
    if sighash_type != SIGHASH_ALL {
        let msg = format!("Unsupported sighash type {}", sighash_type);
        return Err(Error::BadArgument(msg));
    }

    let tx_in = &tx.inputs[n_input];
    let mut s = Vec::with_capacity(4 + 32 * 3 + tx_in.size() + tx_in.lock_script.0.len() + 16);

    // 1. Serialize version
    s.write_u32::<LittleEndian>(tx.version)?;

    // 2. Serialize hash of prevouts
    let hash_prevouts = match cache.hash_prevouts {
        Some(hash) => hash,
        None => {
            let mut prev_outputs = Vec::with_capacity(OutPoint::SIZE * tx.inputs.len());
            for input in tx.inputs.iter() {
                input.prev_output.write(&mut prev_outputs)?;
            }
            let hash = blake2b256(&prev_outputs);
            cache.hash_prevouts = Some(hash);
            hash
        }
    };
    s.write_all(&hash_prevouts.0)?;

    // 3. Serialize hash of sequences
    let hash_sequence = match cache.hash_sequence {
        Some(hash) => hash,
        None => {
            let mut sequences = Vec::with_capacity(4 * tx.inputs.len());
            for input in tx.inputs.iter() {
                sequences.write_u32::<LittleEndian>(input.sequence)?;
            }
            let hash = blake2b256(&sequences);
            cache.hash_sequence = Some(hash);
            hash
        }
    };
    s.write_all(&hash_sequence.0)?;

    // 4. Serialize prev output
    tx_in.prev_output.write(&mut s)?;

    // 5. Serialize the length-prefixed lock script being spent
    s.write_all(&tx_in.lock_script.0)?;

    // 6. Serialize amount
    s.write_u64::<LittleEndian>(tx_in.amount.0)?;

    // 7. Serialize sequence
    s.write_u32::<LittleEndian>(tx_in.sequence)?;

    // 8. Serialize hash of outputs
    let hash_outputs = match cache.hash_outputs {
        Some(hash) => hash,
        None => {
            let size = tx.outputs.iter().map(|tx_out| tx_out.size()).sum();
            let mut outputs = Vec::with_capacity(size);
            for tx_out in tx.outputs.iter() {
                tx_out.write(&mut outputs)?;
            }
            let hash = blake2b256(&outputs);
            cache.hash_outputs = Some(hash);
            hash
        }
    };
    s.write_all(&hash_outputs.0)?;

    // 9. Serialize lock_time
    s.write_u32::<LittleEndian>(tx.lock_time)?;

    // 10. Serialize hash type
    s.write_u32::<LittleEndian>(sighash_type as u32)?;

    Ok(blake2b256(&s))
}

/// Computes the SIGHASH_ALL digest of every input, in input order
pub fn sighashes(tx: &Tx) -> Result<Vec<SigHashRecord>> {
    let mut cache = SigHashCache::new();
    let mut records = Vec::with_capacity(tx.inputs.len());
    for n_input in 0..tx.inputs.len() {
        let hash = sighash(tx, n_input, SIGHASH_ALL, &mut cache)?;
        debug!("Sighash of input {}: {}", n_input, hash.encode());
        records.push(SigHashRecord {
            hash,
            ..Default::default()
        });
    }
    Ok(records)
}
