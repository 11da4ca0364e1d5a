use crate::consensus::{BUNDLE_SEPARATOR, SPENT_OUTPUT_SIZE};
use crate::util::{Error, Result, Serializable};
use crate::wire::Tx;
use hex;
use std::io::Cursor;

/// An unsigned transaction together with the spent output of each input
///
/// Its text form is the transaction hex followed by one `:`-separated hex segment per
/// input holding that input's lock script and amount.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct UnsignedBundle {
    /// Serialized transaction without witnesses
    pub tx: Vec<u8>,
    /// Lock script and amount of each spent output, in input order
    pub spent_outputs: Vec<Vec<u8>>,
}

impl UnsignedBundle {
    /// Serializes a transaction into a bundle
    pub fn from_tx(tx: &Tx) -> Result<UnsignedBundle> {
        let (tx, spent_outputs) = tx.encode()?;
        Ok(UnsignedBundle { tx, spent_outputs })
    }

    /// Parses the text form, checking the hex and the size of every segment
    pub fn parse(s: &str) -> Result<UnsignedBundle> {
        let mut segments = s.split(BUNDLE_SEPARATOR);
        let tx = match segments.next() {
            Some(tx_hex) => hex::decode(tx_hex)?,
            None => return Err(Error::BadData("bundle empty".to_string())),
        };
        let mut spent_outputs = Vec::new();
        for (i, segment) in segments.enumerate() {
            let record = hex::decode(segment)
                .map_err(|e| Error::BadData(format!("input {} spent output: {}", i, e)))?;
            if record.len() != SPENT_OUTPUT_SIZE {
                let msg = format!(
                    "input {} spent output length {}, expected {}",
                    i,
                    record.len(),
                    SPENT_OUTPUT_SIZE
                );
                return Err(Error::BadData(msg));
            }
            spent_outputs.push(record);
        }
        Ok(UnsignedBundle { tx, spent_outputs })
    }

    /// Decodes the text form of a bundle into a transaction
    pub fn decode(s: &str) -> Result<Tx> {
        UnsignedBundle::parse(s)?.to_tx()
    }

    /// Returns the text form
    pub fn encode(&self) -> String {
        let mut s = self.tx_hex();
        for record in self.spent_outputs.iter() {
            s.push(BUNDLE_SEPARATOR);
            s.push_str(&hex::encode(record));
        }
        s
    }

    /// Returns the hex of the transaction bytes alone
    pub fn tx_hex(&self) -> String {
        hex::encode(&self.tx)
    }

    /// Number of spent output segments, which should equal the input count
    pub fn segment_count(&self) -> usize {
        self.spent_outputs.len()
    }

    /// Rebuilds the transaction, restoring each input's spent output
    pub fn to_tx(&self) -> Result<Tx> {
        let mut cursor = Cursor::new(&self.tx);
        let mut tx = Tx::read(&mut cursor)?;
        if cursor.position() as usize != self.tx.len() {
            let msg = format!("{} trailing bytes", self.tx.len() - cursor.position() as usize);
            return Err(Error::BadData(msg));
        }
        if tx.inputs.len() != self.spent_outputs.len() {
            let msg = format!(
                "{} inputs but {} spent outputs",
                tx.inputs.len(),
                self.spent_outputs.len()
            );
            return Err(Error::BadData(msg));
        }
        let records = self.spent_outputs.iter();
        for (i, (tx_in, record)) in tx.inputs.iter_mut().zip(records).enumerate() {
            tx_in
                .read_spent_output(record)
                .map_err(|e| Error::BadData(format!("input {}: {}", i, e)))?;
        }
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Script;
    use crate::util::{Amount, Hash256};
    use crate::wire::{OutPoint, TxIn, TxOut};
    use pretty_assertions::assert_eq;

    fn sample() -> Tx {
        let mut lock_script = vec![25, 0x76, 0xc0, 20];
        lock_script.extend_from_slice(&[5; 20]);
        lock_script.extend_from_slice(&[0x88, 0xac]);
        let mut address_script = vec![0, 20];
        address_script.extend_from_slice(&[7; 20]);
        address_script.extend_from_slice(&[0, 0]);
        Tx {
            version: 0,
            inputs: vec![TxIn {
                prev_output: OutPoint {
                    hash: Hash256([3; 32]),
                    index: 1,
                },
                sequence: 0xffffffff,
                lock_script: Script(lock_script),
                amount: Amount(5000),
            }],
            outputs: vec![TxOut {
                amount: Amount(4000),
                lock_script: Script(address_script),
            }],
            lock_time: 0,
        }
    }

    #[test]
    fn encode_decode() {
        let tx = sample();
        let bundle = UnsignedBundle::from_tx(&tx).unwrap();
        let s = bundle.encode();
        assert_eq!(s.matches(':').count(), 1);
        assert_eq!(bundle.segment_count(), 1);
        assert_eq!(UnsignedBundle::parse(&s).unwrap(), bundle);
        assert_eq!(UnsignedBundle::decode(&s).unwrap(), tx);
        assert!(s.starts_with(&bundle.tx_hex()));
    }

    #[test]
    fn decode_errors() {
        let s = UnsignedBundle::from_tx(&sample()).unwrap().encode();
        let (tx_hex, record_hex) = s.split_at(s.find(':').unwrap());

        // Missing spent output
        assert!(UnsignedBundle::decode(tx_hex).is_err());
        // Extra spent output
        assert!(UnsignedBundle::decode(&format!("{}{}", s, record_hex)).is_err());
        // Short spent output
        assert!(UnsignedBundle::decode(&s[..s.len() - 2]).is_err());
        // Non-hex
        assert!(UnsignedBundle::decode(&format!("zz{}", &s[2..])).is_err());
        assert!(UnsignedBundle::decode(&format!("{}:{}zz", tx_hex, &record_hex[3..])).is_err());
        // Truncated transaction
        let short_tx_hex = &tx_hex[..tx_hex.len() - 2];
        assert!(UnsignedBundle::decode(&format!("{}{}", short_tx_hex, record_hex)).is_err());
        // Trailing transaction bytes
        assert!(UnsignedBundle::decode(&format!("{}00{}", tx_hex, record_hex)).is_err());
        // Empty
        assert!(UnsignedBundle::decode("").is_err());
    }
}
