//! Transaction wire format
//!
//! # Examples
//!
//! Construct a transaction and serialize it into an unsigned bundle:
//!
//! ```rust
//! use hns_tx::script::Script;
//! use hns_tx::util::{Amount, Hash256};
//! use hns_tx::wire::{OutPoint, Tx, TxIn, TxOut, UnsignedBundle};
//!
//! // Use real values here
//! let inputs = vec![TxIn {
//!     prev_output: OutPoint {
//!         hash: Hash256([0; 32]),
//!         index: 0,
//!     },
//!     sequence: 0xffffffff,
//!     lock_script: Script(vec![0; 26]),
//!     amount: Amount(1000),
//! }];
//!
//! let mut address_script = vec![0, 20];
//! address_script.extend_from_slice(&[0; 22]);
//! let outputs = vec![TxOut {
//!     amount: Amount(900),
//!     lock_script: Script(address_script),
//! }];
//!
//! let tx = Tx {
//!     version: 0,
//!     inputs,
//!     outputs,
//!     lock_time: 0,
//! };
//!
//! let bundle = UnsignedBundle::from_tx(&tx).unwrap().encode();
//! assert_eq!(UnsignedBundle::decode(&bundle).unwrap().inputs.len(), 1);
//! ```

mod bundle;
mod out_point;
mod tx;
mod tx_in;
mod tx_out;

pub use self::bundle::UnsignedBundle;
pub use self::out_point::OutPoint;
pub use self::tx::Tx;
pub use self::tx_in::TxIn;
pub use self::tx_out::TxOut;
