//! Wire Format Module
//!
//! Decred chain primitives needed to inspect client submissions:
//! - `Hash`: 32-byte identifiers in reversed-byte-order hex
//! - `MsgTx`: transaction (de)serialization
//! - BLAKE-256 and HASH160 helpers

mod codec;
mod hash;
mod msgtx;

pub use hash::{HASH_SIZE, Hash, HashParseError, MAX_HASH_STRING_SIZE, blake256, hash160};
pub use msgtx::{MsgTx, OutPoint, SerType, TxIn, TxOut};

pub(crate) use codec::Writer;

use thiserror::Error;

/// Errors produced while decoding wire data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("unexpected end of data: need {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("non-canonical varint {value:#x} - discriminant {discriminant:#x} must encode a larger value")]
    NonCanonicalVarInt { discriminant: u8, value: u64 },

    #[error("too many {what}: {count} cannot fit in the remaining data")]
    TooMany { what: &'static str, count: u64 },

    #[error("unsupported transaction serialization type {0}")]
    UnsupportedSerType(u16),

    #[error("mismatched witness and prefix input counts: {witness} witnesses for {prefix} inputs")]
    WitnessCountMismatch { prefix: usize, witness: usize },

    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),
}
