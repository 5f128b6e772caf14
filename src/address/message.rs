//! Verification of messages signed with a wallet's "signmessage" command.

use super::addr::{Address, AddressError, AddressKind};
use crate::params::NetworkParams;
use crate::wire::{Writer, blake256, hash160};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use thiserror::Error;

const MESSAGE_MAGIC: &str = "Decred Signed Message:\n";

const COMPACT_SIG_LEN: usize = 65;
const COMPACT_SIG_MAGIC_OFFSET: u8 = 27;
const COMPACT_SIG_COMPRESSED: u8 = 4;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("address {0} is not a pay-to-pubkey-hash address")]
    NotPubKeyHash(String),

    #[error("signature is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("compact signature is {0} bytes, expected {expected}", expected = COMPACT_SIG_LEN)]
    Length(usize),

    #[error("invalid compact signature header byte {0}")]
    Header(u8),

    #[error("public key recovery failed: {0}")]
    Recovery(#[from] k256::ecdsa::Error),

    #[error("message not signed by address")]
    WrongSigner,
}

/// Hash committed to by a signed message.
pub fn message_hash(message: &str) -> [u8; 32] {
    let mut w = Writer::default();
    w.write_var_bytes(MESSAGE_MAGIC.as_bytes());
    w.write_var_bytes(message.as_bytes());
    blake256(&w.into_inner())
}

/// Checks that `signature` (base64 compact recoverable signature) over
/// `message` was produced by the key behind the pay-to-pubkey-hash
/// `address`.
pub fn verify_message(
    address: &str,
    signature: &str,
    message: &str,
    params: &NetworkParams,
) -> Result<(), MessageError> {
    let addr = Address::decode(address, params)?;
    if addr.kind() != AddressKind::PubKeyHash {
        return Err(MessageError::NotPubKeyHash(address.to_string()));
    }

    let sig = STANDARD.decode(signature)?;
    if sig.len() != COMPACT_SIG_LEN {
        return Err(MessageError::Length(sig.len()));
    }

    let header = sig[0];
    let code = header
        .checked_sub(COMPACT_SIG_MAGIC_OFFSET)
        .filter(|c| *c < 8)
        .ok_or(MessageError::Header(header))?;
    let compressed = code & COMPACT_SIG_COMPRESSED != 0;
    let mut recovery_id = RecoveryId::from_byte(code & 3).ok_or(MessageError::Header(header))?;

    let mut rs = Signature::from_slice(&sig[1..])?;
    // Recovery only accepts low-S signatures; negating S mirrors R.
    if let Some(normalized) = rs.normalize_s() {
        rs = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }

    let key = VerifyingKey::recover_from_prehash(&message_hash(message), &rs, recovery_id)?;
    let serialized = key.to_encoded_point(compressed);
    if &hash160(serialized.as_bytes()) != addr.hash160() {
        return Err(MessageError::WrongSigner);
    }
    Ok(())
}
