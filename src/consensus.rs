//! Consensus constants for building and signing transactions
//!
//! Every byte here must match the target network exactly or the transactions
//! built with them will be rejected.

/// Transaction version
pub const TX_VERSION: u32 = 0;

/// Input sequence that opts out of relative lock time
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Address version of pay-to-pubkey-hash outputs
pub const ADDRESS_VERSION: u8 = 0;

/// Covenant type of a plain send
pub const OUTPUT_TYPE_SEND: u8 = 0;

/// Covenant action (item count) of a plain send
pub const OUTPUT_ACTION_NONE: u8 = 0;

/// Signs all of the inputs and outputs
pub const SIGHASH_ALL: u8 = 0x01;

/// Duplicates the top stack item
pub const OP_DUP: u8 = 0x76;
/// Hashes the top stack item with BLAKE2b-160
pub const OP_BLAKE160: u8 = 0xc0;
/// Same as OP_EQUAL, but runs OP_VERIFY afterward
pub const OP_EQUALVERIFY: u8 = 0x88;
/// Checks the signature of the top two stack items
pub const OP_CHECKSIG: u8 = 0xac;

/// Size of a public key hash in bytes
pub const PUBKEY_HASH_SIZE: usize = 20;

/// Size of a compressed public key in bytes
pub const PUBKEY_SIZE: usize = 33;

/// Size of a compact r||s signature in bytes
pub const SIGNATURE_SIZE: usize = 64;

/// Size of the length-prefixed lock script of a spent output
pub const SPENT_LOCK_SCRIPT_SIZE: usize = 26;

/// Size of a side-channel segment in an unsigned bundle: lock script and amount
pub const SPENT_OUTPUT_SIZE: usize = SPENT_LOCK_SCRIPT_SIZE + 8;

/// Number of witness items in an unlock script: signature and public key
pub const UNLOCK_ITEM_COUNT: u8 = 2;

/// Size of an unlock script in bytes
pub const UNLOCK_SCRIPT_SIZE: usize = 1 + 1 + SIGNATURE_SIZE + 1 + 1 + PUBKEY_SIZE;

/// Input and output counts are written as a single byte
pub const MAX_IO_COUNT: usize = 255;

/// Separates the transaction from the spent outputs in an unsigned bundle
pub const BUNDLE_SEPARATOR: char = ':';
