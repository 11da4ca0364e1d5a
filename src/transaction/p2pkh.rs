//! Pay-to-public-key-hash transaction scripts

use crate::consensus::{
    ADDRESS_VERSION, OP_BLAKE160, OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OUTPUT_ACTION_NONE,
    OUTPUT_TYPE_SEND, PUBKEY_HASH_SIZE, PUBKEY_SIZE, SIGHASH_ALL, SIGNATURE_SIZE,
    SPENT_LOCK_SCRIPT_SIZE, UNLOCK_ITEM_COUNT, UNLOCK_SCRIPT_SIZE,
};
use crate::script::Script;
use crate::util::{Error, Hash160, Result};

/// Creates the length-prefixed lock script of an output paying to a public key hash
///
/// This is the script committed to by the sighash of an input spending that output.
pub fn create_lock_script(hash: &[u8]) -> Result<Script> {
    let mut script = Script::new();
    script.append(OP_DUP);
    script.append(OP_BLAKE160);
    script.append_data(hash)?;
    script.append(OP_EQUALVERIFY);
    script.append(OP_CHECKSIG);
    script.length_prefixed()
}

/// Creates the output script sending to an address hash with a plain send covenant
pub fn create_address_script(hash: &[u8]) -> Result<Script> {
    let mut script = Script::new();
    script.append(ADDRESS_VERSION);
    script.append_data(hash)?;
    script.append(OUTPUT_TYPE_SEND);
    script.append(OUTPUT_ACTION_NONE);
    Ok(script)
}

/// Creates the witness that unlocks a p2pkh output
pub fn create_unlock_script(sig: &[u8], public_key: &[u8]) -> Result<Script> {
    if sig.len() != SIGNATURE_SIZE {
        let msg = format!("Signature length {}, expected {}", sig.len(), SIGNATURE_SIZE);
        return Err(Error::BadArgument(msg));
    }
    if public_key.len() != PUBKEY_SIZE {
        let msg = format!("Public key length {}, expected {}", public_key.len(), PUBKEY_SIZE);
        return Err(Error::BadArgument(msg));
    }
    let mut sig_with_type = Vec::with_capacity(SIGNATURE_SIZE + 1);
    sig_with_type.extend_from_slice(sig);
    sig_with_type.push(SIGHASH_ALL);

    let mut script = Script(Vec::with_capacity(UNLOCK_SCRIPT_SIZE));
    script.append(UNLOCK_ITEM_COUNT);
    script.append_data(&sig_with_type)?;
    script.append_data(public_key)?;
    Ok(script)
}

/// Returns whether the length-prefixed lock script is p2pkh
pub fn check_lock_script(lock_script: &[u8]) -> bool {
    lock_script.len() == SPENT_LOCK_SCRIPT_SIZE
        && lock_script[0] == (SPENT_LOCK_SCRIPT_SIZE - 1) as u8
        && lock_script[1] == OP_DUP
        && lock_script[2] == OP_BLAKE160
        && lock_script[3] == PUBKEY_HASH_SIZE as u8
        && lock_script[24] == OP_EQUALVERIFY
        && lock_script[25] == OP_CHECKSIG
}

/// Returns whether the witness is a p2pkh signature and public key
pub fn check_unlock_script(unlock_script: &[u8]) -> bool {
    unlock_script.len() == UNLOCK_SCRIPT_SIZE
        && unlock_script[0] == UNLOCK_ITEM_COUNT
        && unlock_script[1] == (SIGNATURE_SIZE + 1) as u8
        && unlock_script[2 + SIGNATURE_SIZE] == SIGHASH_ALL
        && unlock_script[3 + SIGNATURE_SIZE] == PUBKEY_SIZE as u8
}

/// Returns the public key hash this lock script pays to
pub fn extract_pubkeyhash(lock_script: &[u8]) -> Result<Hash160> {
    if check_lock_script(lock_script) {
        Hash160::from_slice(&lock_script[4..24])
    } else {
        Err(Error::BadData("Script is not a standard P2PKH".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex;

    #[test]
    fn lock_script() {
        let hash = hex::decode("b302960fb163255e3abf855babd47da1d819bb85").unwrap();
        let s = create_lock_script(&hash).unwrap();
        assert!(hex::encode(&s.0) == "1976c014b302960fb163255e3abf855babd47da1d819bb8588ac");
        assert!(check_lock_script(&s.0));
        assert!(extract_pubkeyhash(&s.0).unwrap().0.to_vec() == hash);
        assert!(create_lock_script(&[0; 256]).is_err());
        assert!(create_lock_script(&[0; 251]).is_err());
        assert!(create_lock_script(&[0; 250]).is_ok());
    }

    #[test]
    fn check_lock_script_test() {
        let s = create_lock_script(&[1; 20]).unwrap();
        assert!(check_lock_script(&s.0));
        let s = create_lock_script(&[1; 32]).unwrap();
        assert!(!check_lock_script(&s.0));
        assert!(extract_pubkeyhash(&s.0).is_err());
        let mut s = create_lock_script(&[1; 20]).unwrap();
        s.0[2] = 0xa9;
        assert!(!check_lock_script(&s.0));
        assert!(!check_lock_script(&[]));
    }

    #[test]
    fn address_script() {
        let hash = hex::decode("53266cf015e64178eaff9eaaab6ed2904cad3cf1").unwrap();
        let s = create_address_script(&hash).unwrap();
        assert!(hex::encode(&s.0) == "001453266cf015e64178eaff9eaaab6ed2904cad3cf10000");
        assert!(create_address_script(&[0; 256]).is_err());
    }

    #[test]
    fn unlock_script() {
        let s = create_unlock_script(&[5; 64], &[2; 33]).unwrap();
        assert!(s.0.len() == UNLOCK_SCRIPT_SIZE);
        assert!(s.0.len() == 101);
        assert!(s.0[..2] == [0x02, 0x41]);
        assert!(s.0[66..68] == [0x01, 0x21]);
        assert!(s.0[68..] == [2; 33][..]);
        assert!(check_unlock_script(&s.0));
        assert!(!check_unlock_script(&s.0[1..]));

        assert!(create_unlock_script(&[5; 63], &[2; 33]).is_err());
        assert!(create_unlock_script(&[5; 72], &[2; 33]).is_err());
        assert!(create_unlock_script(&[5; 64], &[4; 65]).is_err());
        assert!(create_unlock_script(&[5; 64], &[2; 32]).is_err());
    }
}
