//! Stake Transaction Module
//!
//! Classifies transactions under the stake consensus rules. Only ticket
//! purchases (stake submissions, "sstx") are recognised; votes and
//! revocations are never submitted to the VSP by clients.

mod sstx;

pub use sstx::{
    MAX_INPUTS_PER_SSTX, MAX_OUTPUTS_PER_SSTX, StakeError, check_sstx, commitment_address, is_sstx,
};

#[cfg(test)]
pub(crate) use sstx::test_util;

/// Script opcodes used by stake outputs.
pub mod opcodes {
    pub const OP_DATA_20: u8 = 0x14;
    pub const OP_DATA_30: u8 = 0x1e;
    pub const OP_RETURN: u8 = 0x6a;
    pub const OP_EQUAL: u8 = 0x87;
    pub const OP_EQUALVERIFY: u8 = 0x88;
    pub const OP_DUP: u8 = 0x76;
    pub const OP_HASH160: u8 = 0xa9;
    pub const OP_CHECKSIG: u8 = 0xac;
    pub const OP_SSTX: u8 = 0xba;
    pub const OP_SSTXCHANGE: u8 = 0xbd;
}

