use super::codec::{Reader, Writer};
use super::hash::Hash;
use super::WireError;

/// Serialized size lower bounds, used to reject impossible counts early.
const MIN_TX_IN_PREFIX_SIZE: usize = 32 + 4 + 1 + 4;
const MIN_TX_OUT_SIZE: usize = 8 + 2 + 1;
const MIN_TX_IN_WITNESS_SIZE: usize = 8 + 4 + 4 + 1;

/// Which parts of a transaction a serialization carries. Stored in the
/// upper 16 bits of the version word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerType {
    Full,
    NoWitness,
    OnlyWitness,
}

impl SerType {
    fn from_u16(v: u16) -> Result<Self, WireError> {
        match v {
            0 => Ok(SerType::Full),
            1 => Ok(SerType::NoWitness),
            2 => Ok(SerType::OnlyWitness),
            other => Err(WireError::UnsupportedSerType(other)),
        }
    }

    fn as_u16(self) -> u16 {
        match self {
            SerType::Full => 0,
            SerType::NoWitness => 1,
            SerType::OnlyWitness => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
    pub tree: i8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    pub previous_out_point: OutPoint,
    pub sequence: u32,
    pub value_in: i64,
    pub block_height: u32,
    pub block_index: u32,
    pub signature_script: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    pub value: i64,
    pub version: u16,
    pub pk_script: Vec<u8>,
}

/// A Decred transaction as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgTx {
    pub ser_type: SerType,
    pub version: u16,
    pub tx_in: Vec<TxIn>,
    pub tx_out: Vec<TxOut>,
    pub lock_time: u32,
    pub expiry: u32,
}

impl MsgTx {
    pub fn new(version: u16) -> Self {
        Self {
            ser_type: SerType::Full,
            version,
            tx_in: Vec::new(),
            tx_out: Vec::new(),
            lock_time: 0,
            expiry: 0,
        }
    }

    /// Deserializes a transaction, requiring the whole buffer to be consumed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        let mut r = Reader::new(bytes);

        let version_word = r.read_u32()?;
        let version = (version_word & 0xffff) as u16;
        let ser_type = SerType::from_u16((version_word >> 16) as u16)?;

        let mut tx = MsgTx {
            ser_type,
            ..MsgTx::new(version)
        };

        match ser_type {
            SerType::NoWitness => tx.decode_prefix(&mut r)?,
            SerType::OnlyWitness => tx.decode_witness(&mut r, false)?,
            SerType::Full => {
                tx.decode_prefix(&mut r)?;
                tx.decode_witness(&mut r, true)?;
            }
        }

        if r.remaining() != 0 {
            return Err(WireError::TrailingBytes(r.remaining()));
        }
        Ok(tx)
    }

    fn decode_prefix(&mut self, r: &mut Reader<'_>) -> Result<(), WireError> {
        let count = r.read_count("inputs", MIN_TX_IN_PREFIX_SIZE)?;
        self.tx_in = Vec::with_capacity(count);
        for _ in 0..count {
            let previous_out_point = OutPoint {
                hash: r.read_hash()?,
                index: r.read_u32()?,
                tree: r.read_u8()? as i8,
            };
            self.tx_in.push(TxIn {
                previous_out_point,
                sequence: r.read_u32()?,
                value_in: 0,
                block_height: 0,
                block_index: 0,
                signature_script: Vec::new(),
            });
        }

        let count = r.read_count("outputs", MIN_TX_OUT_SIZE)?;
        self.tx_out = Vec::with_capacity(count);
        for _ in 0..count {
            self.tx_out.push(TxOut {
                value: r.read_i64()?,
                version: r.read_u16()?,
                pk_script: r.read_var_bytes("pk script")?,
            });
        }

        self.lock_time = r.read_u32()?;
        self.expiry = r.read_u32()?;
        Ok(())
    }

    fn decode_witness(&mut self, r: &mut Reader<'_>, has_prefix: bool) -> Result<(), WireError> {
        let count = r.read_count("witnesses", MIN_TX_IN_WITNESS_SIZE)?;
        if has_prefix && count != self.tx_in.len() {
            return Err(WireError::WitnessCountMismatch {
                prefix: self.tx_in.len(),
                witness: count,
            });
        }
        if !has_prefix {
            self.tx_in = (0..count)
                .map(|_| TxIn {
                    previous_out_point: OutPoint {
                        hash: Hash::default(),
                        index: 0,
                        tree: 0,
                    },
                    sequence: 0,
                    value_in: 0,
                    block_height: 0,
                    block_index: 0,
                    signature_script: Vec::new(),
                })
                .collect();
        }

        for txin in &mut self.tx_in {
            txin.value_in = r.read_i64()?;
            txin.block_height = r.read_u32()?;
            txin.block_index = r.read_u32()?;
            txin.signature_script = r.read_var_bytes("signature script")?;
        }
        Ok(())
    }

    pub fn to_bytes(&self, ser_type: SerType) -> Vec<u8> {
        let mut w = Writer::default();
        w.write_u32(u32::from(self.version) | (u32::from(ser_type.as_u16()) << 16));

        if ser_type != SerType::OnlyWitness {
            w.write_var_int(self.tx_in.len() as u64);
            for txin in &self.tx_in {
                w.write_hash(&txin.previous_out_point.hash);
                w.write_u32(txin.previous_out_point.index);
                w.write_u8(txin.previous_out_point.tree as u8);
                w.write_u32(txin.sequence);
            }
            w.write_var_int(self.tx_out.len() as u64);
            for txout in &self.tx_out {
                w.write_i64(txout.value);
                w.write_u16(txout.version);
                w.write_var_bytes(&txout.pk_script);
            }
            w.write_u32(self.lock_time);
            w.write_u32(self.expiry);
        }

        if ser_type != SerType::NoWitness {
            w.write_var_int(self.tx_in.len() as u64);
            for txin in &self.tx_in {
                w.write_i64(txin.value_in);
                w.write_u32(txin.block_height);
                w.write_u32(txin.block_index);
                w.write_var_bytes(&txin.signature_script);
            }
        }

        w.into_inner()
    }

    /// Transaction id: BLAKE-256 of the prefix serialization.
    pub fn tx_hash(&self) -> Hash {
        Hash::blake256(&self.to_bytes(SerType::NoWitness))
    }
}
