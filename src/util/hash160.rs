use crate::util::{Error, Result};
use blake2b_simd::Params;
use hex;
use std::fmt;

/// 160-bit hash for public key addresses
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash160(pub [u8; 20]);

impl Hash160 {
    /// Converts a slice of exactly 20 bytes into a hash
    pub fn from_slice(bytes: &[u8]) -> Result<Hash160> {
        if bytes.len() != 20 {
            let msg = format!("Hash160 length {}, expected 20", bytes.len());
            return Err(Error::BadArgument(msg));
        }
        let mut hash160 = [0; 20];
        hash160.clone_from_slice(bytes);
        Ok(Hash160(hash160))
    }
}

/// Hashes a data array once using BLAKE2b with a 20 byte output
pub fn blake160(data: &[u8]) -> Hash160 {
    let digest = Params::new().hash_length(20).hash(data);
    let mut hash160 = [0; 20];
    hash160.clone_from_slice(digest.as_bytes());
    Hash160(hash160)
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex;

    #[test]
    fn to_blake160() {
        let pubkey = "03ac2c33b23097cc8b442015f824fa90c1e2cd64b9a681add03aa1e82e7014edc1";
        let pubkey = hex::decode(pubkey).unwrap();
        assert!(hex::encode(blake160(&pubkey).0) == "b302960fb163255e3abf855babd47da1d819bb85");
    }

    #[test]
    fn from_slice() {
        assert!(Hash160::from_slice(&[1; 20]).unwrap() == Hash160([1; 20]));
        assert!(Hash160::from_slice(&[1; 19]).is_err());
        assert!(Hash160::from_slice(&[1; 21]).is_err());
    }
}
