use crate::script::Script;
use crate::util::{Amount, Result, Serializable};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Read, Write};

/// Transaction output
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TxOut {
    /// Number of dollarydoos to send
    pub amount: Amount,
    /// Address version, length-prefixed hash, covenant type and action
    pub lock_script: Script,
}

impl TxOut {
    /// Returns the size of the transaction output in bytes
    pub fn size(&self) -> usize {
        8 + self.lock_script.0.len()
    }
}

impl Serializable<TxOut> for TxOut {
    fn read(reader: &mut dyn Read) -> Result<TxOut> {
        let amount = Amount(reader.read_u64::<LittleEndian>()?);
        let version = reader.read_u8()?;
        let hash_len = reader.read_u8()?;
        let mut lock_script = Script(Vec::with_capacity(hash_len as usize + 4));
        lock_script.append(version);
        lock_script.append(hash_len);
        let mut hash = vec![0; hash_len as usize];
        reader.read_exact(&mut hash)?;
        lock_script.append_slice(&hash);
        lock_script.append(reader.read_u8()?);
        lock_script.append(reader.read_u8()?);
        Ok(TxOut {
            amount,
            lock_script,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_u64::<LittleEndian>(self.amount.0)?;
        writer.write_all(&self.lock_script.0)?;
        Ok(())
    }
}
