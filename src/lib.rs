//! Build, sign and combine Handshake transactions.
//!
//! A transaction is built unsigned from spendable outputs and destinations, the
//! sighash of each input is handed to a signer, and the returned signatures are
//! verified and assembled into a transaction ready to broadcast.

extern crate bech32;
extern crate blake2b_simd;
extern crate byteorder;
extern crate hex;
#[macro_use]
extern crate log;
extern crate secp256k1;

pub mod address;
pub mod consensus;
pub mod network;
pub mod script;
pub mod transaction;
pub mod util;
pub mod wire;
