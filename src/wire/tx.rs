use crate::consensus::MAX_IO_COUNT;
use crate::util::{blake2b256, Error, Hash256, Result, Serializable};
use crate::wire::{TxIn, TxOut};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fmt;
use std::io;
use std::io::{Read, Write};

/// Handshake transaction without its witnesses
#[derive(Default, PartialEq, Eq, Hash, Clone)]
pub struct Tx {
    /// Transaction version
    pub version: u32,
    /// Transaction inputs
    pub inputs: Vec<TxIn>,
    /// Transaction outputs
    pub outputs: Vec<TxOut>,
    /// The block number or timestamp at which this transaction is unlocked
    pub lock_time: u32,
}

impl Tx {
    /// Calculates the hash of the transaction also known as the txid
    pub fn hash(&self) -> Result<Hash256> {
        let mut b = Vec::with_capacity(self.size());
        self.write(&mut b)?;
        Ok(blake2b256(&b))
    }

    /// Returns the size of the serialized transaction in bytes
    pub fn size(&self) -> usize {
        let mut size = 4 + 1 + 1 + 4;
        size += self.inputs.iter().map(|tx_in| tx_in.size()).sum::<usize>();
        size += self.outputs.iter().map(|tx_out| tx_out.size()).sum::<usize>();
        size
    }

    /// Checks the input and output counts and the fixed size fields
    pub fn check_shape(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(Error::BadArgument("inputs empty".to_string()));
        }
        if self.outputs.is_empty() {
            return Err(Error::BadArgument("outputs empty".to_string()));
        }
        if self.inputs.len() > MAX_IO_COUNT {
            let msg = format!("{} inputs exceeds {}", self.inputs.len(), MAX_IO_COUNT);
            return Err(Error::BadArgument(msg));
        }
        if self.outputs.len() > MAX_IO_COUNT {
            let msg = format!("{} outputs exceeds {}", self.outputs.len(), MAX_IO_COUNT);
            return Err(Error::BadArgument(msg));
        }
        for (i, tx_out) in self.outputs.iter().enumerate() {
            if tx_out.lock_script.0.is_empty() {
                let msg = format!("output {} lock script empty", i);
                return Err(Error::BadArgument(msg));
            }
        }
        Ok(())
    }

    /// Serializes the transaction and the spent output record of each input
    ///
    /// The spent output records are not part of the transaction bytes. They are
    /// returned separately in input order.
    pub fn encode(&self) -> Result<(Vec<u8>, Vec<Vec<u8>>)> {
        self.check_shape()?;
        let mut spent_outputs = Vec::with_capacity(self.inputs.len());
        for (i, tx_in) in self.inputs.iter().enumerate() {
            let record = tx_in
                .spent_output()
                .map_err(|e| Error::BadArgument(format!("input {}: {}", i, e)))?;
            spent_outputs.push(record);
        }
        let mut b = Vec::with_capacity(self.size());
        self.write(&mut b)?;
        Ok((b, spent_outputs))
    }
}

fn io_count(n: usize) -> io::Result<u8> {
    if n > MAX_IO_COUNT {
        let msg = format!("count {} does not fit in a byte", n);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, msg));
    }
    Ok(n as u8)
}

impl Serializable<Tx> for Tx {
    /// Reads the transaction bytes, leaving the spent outputs of the inputs empty
    fn read(reader: &mut dyn Read) -> Result<Tx> {
        let version = reader
            .read_u32::<LittleEndian>()
            .map_err(|e| Error::BadData(format!("version: {}", e)))?;

        let n_inputs = reader
            .read_u8()
            .map_err(|e| Error::BadData(format!("input count: {}", e)))?;
        if n_inputs == 0 {
            return Err(Error::BadData("input count zero".to_string()));
        }
        let mut inputs = Vec::with_capacity(n_inputs as usize);
        for i in 0..n_inputs {
            let tx_in = TxIn::read(reader)
                .map_err(|e| Error::BadData(format!("input {}: {}", i, e)))?;
            inputs.push(tx_in);
        }

        let n_outputs = reader
            .read_u8()
            .map_err(|e| Error::BadData(format!("output count: {}", e)))?;
        if n_outputs == 0 {
            return Err(Error::BadData("output count zero".to_string()));
        }
        let mut outputs = Vec::with_capacity(n_outputs as usize);
        for i in 0..n_outputs {
            let tx_out = TxOut::read(reader)
                .map_err(|e| Error::BadData(format!("output {}: {}", i, e)))?;
            outputs.push(tx_out);
        }

        let lock_time = reader
            .read_u32::<LittleEndian>()
            .map_err(|e| Error::BadData(format!("lock time: {}", e)))?;
        Ok(Tx {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_u32::<LittleEndian>(self.version)?;
        writer.write_u8(io_count(self.inputs.len())?)?;
        for tx_in in self.inputs.iter() {
            tx_in.write(writer)?;
        }
        writer.write_u8(io_count(self.outputs.len())?)?;
        for tx_out in self.outputs.iter() {
            tx_out.write(writer)?;
        }
        writer.write_u32::<LittleEndian>(self.lock_time)?;
        Ok(())
    }
}

impl fmt::Debug for Tx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inputs_str = format!("[<{} inputs>]", self.inputs.len());
        let outputs_str = format!("[<{} outputs>]", self.outputs.len());

        f.debug_struct("Tx")
            .field("version", &self.version)
            .field(
                "inputs",
                if self.inputs.len() <= 3 {
                    &self.inputs
                } else {
                    &inputs_str
                },
            )
            .field(
                "outputs",
                if self.outputs.len() <= 3 {
                    &self.outputs
                } else {
                    &outputs_str
                },
            )
            .field("lock_time", &self.lock_time)
            .finish()
    }
}
