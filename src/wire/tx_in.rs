use crate::consensus::{SPENT_LOCK_SCRIPT_SIZE, SPENT_OUTPUT_SIZE};
use crate::script::Script;
use crate::util::{Amount, Error, Result, Serializable};
use crate::wire::OutPoint;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Cursor, Read, Write};

/// Transaction input
///
/// The lock script and amount of the spent output are needed to compute the sighash
/// but are not part of the serialized input. They travel beside the transaction as
/// a spent output record.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TxIn {
    /// The previous output transaction reference
    pub prev_output: OutPoint,
    /// Relative lock time, final when all bits are set
    pub sequence: u32,
    /// Length-prefixed lock script of the output being spent
    pub lock_script: Script,
    /// Amount of the output being spent
    pub amount: Amount,
}

impl TxIn {
    /// Size of the serialized input in bytes
    pub const SIZE: usize = OutPoint::SIZE + 4;

    /// Returns the size of the transaction input in bytes
    pub fn size(&self) -> usize {
        TxIn::SIZE
    }

    /// Writes the lock script and amount of the spent output
    pub fn write_spent_output(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.lock_script.0)?;
        writer.write_u64::<LittleEndian>(self.amount.0)?;
        Ok(())
    }

    /// Returns the spent output record, checking its fixed size
    pub fn spent_output(&self) -> Result<Vec<u8>> {
        if self.lock_script.0.len() != SPENT_LOCK_SCRIPT_SIZE {
            let msg = format!(
                "Lock script length {}, expected {}",
                self.lock_script.0.len(),
                SPENT_LOCK_SCRIPT_SIZE
            );
            return Err(Error::BadArgument(msg));
        }
        let mut v = Vec::with_capacity(SPENT_OUTPUT_SIZE);
        self.write_spent_output(&mut v)?;
        Ok(v)
    }

    /// Restores the lock script and amount from a spent output record
    pub fn read_spent_output(&mut self, record: &[u8]) -> Result<()> {
        if record.len() != SPENT_OUTPUT_SIZE {
            let msg = format!(
                "Spent output length {}, expected {}",
                record.len(),
                SPENT_OUTPUT_SIZE
            );
            return Err(Error::BadData(msg));
        }
        self.lock_script = Script(record[..SPENT_LOCK_SCRIPT_SIZE].to_vec());
        let mut amount = Cursor::new(&record[SPENT_LOCK_SCRIPT_SIZE..]);
        self.amount = Amount(amount.read_u64::<LittleEndian>()?);
        Ok(())
    }
}

impl Serializable<TxIn> for TxIn {
    fn read(reader: &mut dyn Read) -> Result<TxIn> {
        let prev_output = OutPoint::read(reader)?;
        let sequence = reader.read_u32::<LittleEndian>()?;
        Ok(TxIn {
            prev_output,
            sequence,
            lock_script: Script::new(),
            amount: Amount(0),
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.prev_output.write(writer)?;
        writer.write_u32::<LittleEndian>(self.sequence)?;
        Ok(())
    }
}
