//! Script byte containers
//!
//! # Examples
//!
//! Build a length-prefixed data push:
//!
//! ```rust
//! use hns_tx::consensus::OP_DUP;
//! use hns_tx::script::Script;
//!
//! let mut script = Script::new();
//! script.append(OP_DUP);
//! script.append_data(&[0xab; 20]).unwrap();
//! assert_eq!(script.0.len(), 22);
//! ```

use crate::util::{Error, Result};
use hex;
use std::fmt;

/// Transaction script
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Script(pub Vec<u8>);

impl Script {
    /// Creates a new empty script
    pub fn new() -> Script {
        Script(vec![])
    }

    /// Appends a single opcode or data byte
    pub fn append(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Appends a slice of data
    pub fn append_slice(&mut self, slice: &[u8]) {
        self.0.extend_from_slice(slice);
    }

    /// Appends data prefixed with its length as a single byte
    pub fn append_data(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > u8::max_value() as usize {
            let msg = format!("Data push of {} bytes overflows its length byte", data.len());
            return Err(Error::BadArgument(msg));
        }
        self.0.push(data.len() as u8);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Returns a new script with the length of this one prepended as a single byte
    pub fn length_prefixed(&self) -> Result<Script> {
        let mut script = Script(Vec::with_capacity(self.0.len() + 1));
        script.append_data(&self.0)?;
        Ok(script)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}
