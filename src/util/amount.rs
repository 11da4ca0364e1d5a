//! Functions to convert between different handshake denominations

use std::fmt;

/// Number of dollarydoos in one HNS
pub const DOOS_PER_HNS: u64 = 1_000_000;

/// Denomination of a handshake amount
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Units {
    /// One HNS
    Hns,
    /// One millionth of an HNS, the smallest unit on chain
    Doo,
}

/// An amount of handshake in dollarydoos
#[derive(Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Amount(pub u64);

impl Amount {
    /// Converts the amount to a given unit
    pub fn to(&self, units: Units) -> f64 {
        match units {
            Units::Hns => self.0 as f64 / DOOS_PER_HNS as f64,
            Units::Doo => self.0 as f64,
        }
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&format!("{} hns", self.to(Units::Hns)))
    }
}
