use super::opcodes::*;
use crate::address::Address;
use crate::params::NetworkParams;
use crate::wire::MsgTx;
use thiserror::Error;

pub const MAX_INPUTS_PER_SSTX: usize = 64;
pub const MAX_OUTPUTS_PER_SSTX: usize = MAX_INPUTS_PER_SSTX * 2 + 1;

/// Only script version 0 is defined for stake outputs.
const STAKE_SCRIPT_VERSION: u16 = 0;

const COMMITMENT_SCRIPT_LEN: usize = 32;
const COMMITMENT_P2SH_FLAG: u64 = 1 << 63;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StakeError {
    #[error("sstx has no inputs")]
    NoInputs,

    #[error("sstx has no outputs")]
    NoOutputs,

    #[error("sstx has {0} inputs, max is {max}", max = MAX_INPUTS_PER_SSTX)]
    TooManyInputs(usize),

    #[error("sstx has {0} outputs, max is {max}", max = MAX_OUTPUTS_PER_SSTX)]
    TooManyOutputs(usize),

    #[error("sstx with {inputs} inputs must have {expected} outputs, got {outputs}", expected = .inputs * 2 + 1)]
    InOutProportions { inputs: usize, outputs: usize },

    #[error("sstx output {index} uses unsupported script version {version}")]
    ScriptVersion { index: usize, version: u16 },

    #[error("first sstx output is not a tagged ticket submission script")]
    NotSubmission,

    #[error("sstx output {0} is not a ticket commitment script")]
    NotCommitment(usize),

    #[error("sstx output {0} is not a tagged stake change script")]
    NotChange(usize),
}

/// `tag OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG` or
/// `tag OP_HASH160 <20 bytes> OP_EQUAL`.
fn is_tagged_p2pkh_or_p2sh(tag: u8, script: &[u8]) -> bool {
    let p2pkh = script.len() == 26
        && script[0] == tag
        && script[1] == OP_DUP
        && script[2] == OP_HASH160
        && script[3] == OP_DATA_20
        && script[24] == OP_EQUALVERIFY
        && script[25] == OP_CHECKSIG;
    let p2sh = script.len() == 24
        && script[0] == tag
        && script[1] == OP_HASH160
        && script[2] == OP_DATA_20
        && script[23] == OP_EQUAL;
    p2pkh || p2sh
}

/// `OP_RETURN OP_DATA_30 <20 byte hash> <8 byte amount> <2 byte fee limits>`.
fn is_commitment_script(script: &[u8]) -> bool {
    script.len() == COMMITMENT_SCRIPT_LEN && script[0] == OP_RETURN && script[1] == OP_DATA_30
}

/// Checks that `tx` follows the stake submission (ticket purchase) rules.
pub fn check_sstx(tx: &MsgTx) -> Result<(), StakeError> {
    let (inputs, outputs) = (tx.tx_in.len(), tx.tx_out.len());

    if inputs > MAX_INPUTS_PER_SSTX {
        return Err(StakeError::TooManyInputs(inputs));
    }
    if outputs > MAX_OUTPUTS_PER_SSTX {
        return Err(StakeError::TooManyOutputs(outputs));
    }
    if inputs == 0 {
        return Err(StakeError::NoInputs);
    }
    if outputs == 0 {
        return Err(StakeError::NoOutputs);
    }

    // One submission output, then a commitment and a change output per input.
    if inputs * 2 + 1 != outputs {
        return Err(StakeError::InOutProportions { inputs, outputs });
    }

    for (index, txout) in tx.tx_out.iter().enumerate() {
        if txout.version != STAKE_SCRIPT_VERSION {
            return Err(StakeError::ScriptVersion {
                index,
                version: txout.version,
            });
        }

        let script = &txout.pk_script;
        match index {
            0 if !is_tagged_p2pkh_or_p2sh(OP_SSTX, script) => return Err(StakeError::NotSubmission),
            i if i % 2 == 1 && !is_commitment_script(script) => {
                return Err(StakeError::NotCommitment(i));
            }
            i if i > 0 && i % 2 == 0 && !is_tagged_p2pkh_or_p2sh(OP_SSTXCHANGE, script) => {
                return Err(StakeError::NotChange(i));
            }
            _ => {}
        }
    }

    Ok(())
}

pub fn is_sstx(tx: &MsgTx) -> bool {
    check_sstx(tx).is_ok()
}

/// Address committed to by the first commitment output of a ticket. This
/// is the address the ticket's controller signs requests with.
pub fn commitment_address(tx: &MsgTx, params: &NetworkParams) -> Result<Address, StakeError> {
    check_sstx(tx)?;

    let script = &tx.tx_out[1].pk_script;
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&script[2..22]);

    let mut amount = [0u8; 8];
    amount.copy_from_slice(&script[22..30]);
    if u64::from_le_bytes(amount) & COMMITMENT_P2SH_FLAG != 0 {
        Ok(Address::script_hash(hash, params))
    } else {
        Ok(Address::pub_key_hash(hash, params))
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;
    use crate::wire::{Hash, OutPoint, TxIn, TxOut};

    pub fn tagged_p2pkh(tag: u8, hash: [u8; 20]) -> Vec<u8> {
        let mut script = vec![tag, OP_DUP, OP_HASH160, OP_DATA_20];
        script.extend_from_slice(&hash);
        script.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
        script
    }

    pub fn commitment(hash: [u8; 20], amount: u64) -> Vec<u8> {
        let mut script = vec![OP_RETURN, OP_DATA_30];
        script.extend_from_slice(&hash);
        script.extend_from_slice(&amount.to_le_bytes());
        script.extend_from_slice(&[0x00, 0x58]);
        script
    }

    fn input(n: u8) -> TxIn {
        TxIn {
            previous_out_point: OutPoint {
                hash: Hash::new([n; 32]),
                index: 0,
                tree: 0,
            },
            sequence: u32::MAX,
            value_in: 2_000_000_000,
            block_height: 1000,
            block_index: 1,
            signature_script: vec![0x47; 8],
        }
    }

    /// A single-input ticket paying to `commit_hash`.
    pub fn ticket(commit_hash: [u8; 20]) -> MsgTx {
        let mut tx = MsgTx::new(1);
        tx.tx_in.push(input(1));
        tx.tx_out = vec![
            TxOut {
                value: 1_999_000_000,
                version: 0,
                pk_script: tagged_p2pkh(OP_SSTX, [0xaa; 20]),
            },
            TxOut {
                value: 0,
                version: 0,
                pk_script: commitment(commit_hash, 2_000_000_000),
            },
            TxOut {
                value: 0,
                version: 0,
                pk_script: tagged_p2pkh(OP_SSTXCHANGE, [0; 20]),
            },
        ];
        tx.expiry = 1100;
        tx
    }

    /// A ticket with `n` inputs, so `2n + 1` outputs.
    pub fn multi_input_ticket(n: u8) -> MsgTx {
        let mut tx = ticket([0x33; 20]);
        for i in 1..n {
            tx.tx_in.push(input(i + 1));
            tx.tx_out.push(tx.tx_out[1].clone());
            tx.tx_out.push(tx.tx_out[2].clone());
        }
        tx
    }
}
