use crate::util::{Error, Result, Serializable};
use blake2b_simd::Params;
use hex;
use std::fmt;
use std::io;
use std::io::{Read, Write};

/// 256-bit hash for transactions and signature digests
///
/// Unlike bitcoin txids the bytes are displayed in the order they are stored.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Converts the hash into a hex string
    pub fn encode(&self) -> String {
        hex::encode(self.0)
    }

    /// Converts a string of 64 hex characters into a hash
    pub fn decode(s: &str) -> Result<Hash256> {
        let decoded_bytes = hex::decode(s)?;
        if decoded_bytes.len() != 32 {
            let msg = format!("Hash length {}, expected 32", decoded_bytes.len());
            return Err(Error::BadArgument(msg));
        }
        let mut hash_bytes = [0; 32];
        hash_bytes.clone_from_slice(&decoded_bytes);
        Ok(Hash256(hash_bytes))
    }
}

impl Serializable<Hash256> for Hash256 {
    fn read(reader: &mut dyn Read) -> Result<Hash256> {
        let mut bytes = [0; 32];
        reader.read_exact(&mut bytes)?;
        Ok(Hash256(bytes))
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.0)
    }
}

/// Hashes a data array once using BLAKE2b with a 32 byte output
pub fn blake2b256(data: &[u8]) -> Hash256 {
    let digest = Params::new().hash_length(32).hash(data);
    let mut hash256 = [0; 32];
    hash256.clone_from_slice(digest.as_bytes());
    Hash256(hash256)
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex;
    use std::io::Cursor;

    #[test]
    fn blake2b256_test() {
        let x = hex::decode("0123456789abcdef").unwrap();
        let e = hex::encode(blake2b256(&x).0);
        assert!(e == "e1b6a71c4d3a70498445ca6ac5703c5e4db1f4935e7bd2f2256a2d6bce5e5c16");
        let e = blake2b256(&[]).encode();
        assert!(e == "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8");
    }

    #[test]
    fn hash_decode() {
        // Valid
        let s1 = "0000000000000000000000000000000000000000000000000000000000000000";
        let s2 = "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
        assert!(Hash256::decode(s1).is_ok());
        assert!(Hash256::decode(s2).is_ok());

        // Invalid
        let s1 = "000000000000000000000000000000000000000000000000000000000000000";
        let s2 = "00000000000000000000000000000000000000000000000000000000000000000000";
        let s3 = "000000000000000000000000000000000000000000000000000000000000000g";
        assert!(Hash256::decode(s1).is_err());
        assert!(Hash256::decode(s2).is_err());
        assert!(Hash256::decode(s3).is_err());
    }

    #[test]
    fn hash_decode_keeps_byte_order() {
        let s = "ec823cbfcd7e6e49491e5d3c2ad09d0b76f770bfa24d3cd877e2ab323674d522";
        let h = Hash256::decode(s).unwrap();
        assert!(h.0[0] == 0xec);
        assert!(h.0[31] == 0x22);
        let mut v = Vec::new();
        h.write(&mut v).unwrap();
        assert!(hex::encode(&v) == s);
        assert!(Hash256::read(&mut Cursor::new(v)).unwrap().encode() == s);
    }
}
