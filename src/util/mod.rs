//! Miscellaneous helpers

mod amount;
mod hash160;
mod hash256;
mod result;
mod serdes;

pub use self::amount::{Amount, Units, DOOS_PER_HNS};
pub use self::hash160::{blake160, Hash160};
pub use self::hash256::{blake2b256, Hash256};
pub use self::result::{Error, Result};
pub use self::serdes::Serializable;
