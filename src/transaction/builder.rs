//! Unsigned transaction construction

use crate::address::AddressCodec;
use crate::consensus::{MAX_IO_COUNT, PUBKEY_HASH_SIZE, SEQUENCE_FINAL, TX_VERSION};
use crate::transaction::p2pkh::{create_address_script, create_lock_script};
use crate::util::{Amount, Error, Hash256, Result};
use crate::wire::{OutPoint, Tx, TxIn, TxOut};
use hex;

/// An unspent output to spend
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpendCandidate {
    /// Hex of the transaction holding the output
    pub txid: String,
    /// Index of the output in that transaction
    pub vout: u32,
    /// Hex of the public key hash the output pays to
    pub lock_script: String,
    /// Amount of the output in dollarydoos
    pub amount: u64,
}

/// Where to send funds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Address to pay
    pub address: String,
    /// Amount in dollarydoos
    pub amount: u64,
}

/// Builds an unsigned transaction spending p2pkh outputs to addresses
///
/// Nothing is returned unless every spend candidate and destination is valid.
pub fn build_unsigned_transaction(
    spends: &[SpendCandidate],
    destinations: &[Destination],
    lock_time: u32,
    codec: &dyn AddressCodec,
) -> Result<Tx> {
    if spends.is_empty() {
        return Err(Error::BadArgument("No inputs to spend".to_string()));
    }
    if destinations.is_empty() {
        return Err(Error::BadArgument("No outputs to send to".to_string()));
    }
    if spends.len() > MAX_IO_COUNT {
        let msg = format!("{} inputs exceeds {}", spends.len(), MAX_IO_COUNT);
        return Err(Error::BadArgument(msg));
    }
    if destinations.len() > MAX_IO_COUNT {
        let msg = format!("{} outputs exceeds {}", destinations.len(), MAX_IO_COUNT);
        return Err(Error::BadArgument(msg));
    }

    let mut inputs = Vec::with_capacity(spends.len());
    for (i, spend) in spends.iter().enumerate() {
        let hash = Hash256::decode(&spend.txid)
            .map_err(|e| Error::BadArgument(format!("input {} txid: {}", i, e)))?;
        let pubkeyhash = hex::decode(&spend.lock_script)
            .map_err(|e| Error::BadArgument(format!("input {} lock script: {}", i, e)))?;
        if pubkeyhash.len() != PUBKEY_HASH_SIZE {
            let msg = format!(
                "input {} lock script hash length {}, expected {}",
                i,
                pubkeyhash.len(),
                PUBKEY_HASH_SIZE
            );
            return Err(Error::BadArgument(msg));
        }
        if spend.amount == 0 {
            return Err(Error::BadArgument(format!("input {} amount zero", i)));
        }
        inputs.push(TxIn {
            prev_output: OutPoint {
                hash,
                index: spend.vout,
            },
            sequence: SEQUENCE_FINAL,
            lock_script: create_lock_script(&pubkeyhash)?,
            amount: Amount(spend.amount),
        });
    }

    let mut outputs = Vec::with_capacity(destinations.len());
    for (i, destination) in destinations.iter().enumerate() {
        if destination.amount == 0 {
            return Err(Error::BadArgument(format!("output {} amount zero", i)));
        }
        let hash = codec
            .decode_address(&destination.address)
            .map_err(|e| match e {
                Error::AddressFormat(msg) => Error::AddressFormat(format!("output {}: {}", i, msg)),
                e => e,
            })?;
        outputs.push(TxOut {
            amount: Amount(destination.amount),
            lock_script: create_address_script(&hash)?,
        });
    }

    let tx = Tx {
        version: TX_VERSION,
        inputs,
        outputs,
        lock_time,
    };
    debug!("Built unsigned transaction {:?}", tx);
    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;
    use crate::wire::UnsignedBundle;
    use pretty_assertions::assert_eq;

    fn spend() -> SpendCandidate {
        SpendCandidate {
            txid: "ec823cbfcd7e6e49491e5d3c2ad09d0b76f770bfa24d3cd877e2ab323674d522".to_string(),
            vout: 0,
            lock_script: "b302960fb163255e3abf855babd47da1d819bb85".to_string(),
            amount: 1000000,
        }
    }

    fn destinations() -> Vec<Destination> {
        vec![
            Destination {
                address: "hs1q2vnxeuq4ueqh36hln642kmkjjpx26083upy9d5".to_string(),
                amount: 1000,
            },
            Destination {
                address: "hs1qmhylkn9eg3fr0tushpkna0k9y9lqxzx4dzrpc7".to_string(),
                amount: 699000,
            },
        ]
    }

    #[test]
    fn build() {
        let tx = build_unsigned_transaction(&[spend()], &destinations(), 0, &Network::Mainnet)
            .unwrap();
        assert_eq!(tx.version, 0);
        assert_eq!(tx.lock_time, 0);
        assert_eq!(tx.inputs.len(), 1);
        assert_eq!(tx.inputs[0].sequence, 0xffffffff);
        assert_eq!(tx.inputs[0].amount, Amount(1000000));
        assert_eq!(
            hex::encode(&tx.inputs[0].lock_script.0),
            "1976c014b302960fb163255e3abf855babd47da1d819bb8588ac"
        );
        assert_eq!(
            hex::encode(&tx.outputs[1].lock_script.0),
            "0014ddc9fb4cb9445237af90b86d3ebec5217e0308d50000"
        );
    }

    #[test]
    fn round_trip() {
        let tx = build_unsigned_transaction(&[spend()], &destinations(), 500, &Network::Mainnet)
            .unwrap();
        let bundle = UnsignedBundle::from_tx(&tx).unwrap().encode();
        assert_eq!(UnsignedBundle::decode(&bundle).unwrap(), tx);
    }

    #[test]
    fn validation_errors() {
        let n = Network::Mainnet;
        assert!(build_unsigned_transaction(&[], &destinations(), 0, &n).is_err());
        assert!(build_unsigned_transaction(&[spend()], &[], 0, &n).is_err());

        let mut s = spend();
        s.amount = 0;
        assert!(build_unsigned_transaction(&[s], &destinations(), 0, &n).is_err());

        let mut s = spend();
        s.txid = s.txid[2..].to_string();
        assert!(build_unsigned_transaction(&[s], &destinations(), 0, &n).is_err());

        let mut s = spend();
        s.txid = format!("zz{}", &s.txid[2..]);
        assert!(build_unsigned_transaction(&[s], &destinations(), 0, &n).is_err());

        let mut s = spend();
        s.lock_script = "b302".to_string();
        assert!(build_unsigned_transaction(&[s], &destinations(), 0, &n).is_err());

        let mut d = destinations();
        d[1].amount = 0;
        assert!(build_unsigned_transaction(&[spend()], &d, 0, &n).is_err());

        let mut d = destinations();
        d[0].address = "hs1q2vnxeuq4ueqh36hln642kmkjjpx26083upy9d6".to_string();
        match build_unsigned_transaction(&[spend()], &d, 0, &n) {
            Err(Error::AddressFormat(_)) => {}
            _ => panic!("expected address format error"),
        }
    }

    #[test]
    fn io_count_cap() {
        let n = Network::Mainnet;
        let spends = vec![spend(); 256];
        match build_unsigned_transaction(&spends, &destinations(), 0, &n) {
            Err(Error::BadArgument(_)) => {}
            _ => panic!("expected bad argument"),
        }
        let spends = vec![spend(); 255];
        assert!(build_unsigned_transaction(&spends, &destinations(), 0, &n).is_ok());

        let d = vec![destinations()[0].clone(); 256];
        assert!(build_unsigned_transaction(&[spend()], &d, 0, &n).is_err());
    }
}
