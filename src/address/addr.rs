use crate::params::NetworkParams;
use crate::wire::blake256;
use std::fmt;
use thiserror::Error;

const CHECKSUM_LEN: usize = 4;
const PAYLOAD_LEN: usize = 2 + 20 + CHECKSUM_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("malformed base58 address: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("decoded address is {0} bytes, expected {expected}", expected = PAYLOAD_LEN)]
    Length(usize),

    #[error("address checksum mismatch")]
    Checksum,

    #[error("address network id {0:02x?} does not belong to this network")]
    WrongNetwork([u8; 2]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// Pay to the HASH160 of a secp256k1 public key.
    PubKeyHash,
    /// Pay to the HASH160 of a redeem script.
    ScriptHash,
}

/// A version 0 Decred address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    kind: AddressKind,
    net_id: [u8; 2],
    hash: [u8; 20],
}

impl Address {
    pub fn pub_key_hash(hash: [u8; 20], params: &NetworkParams) -> Self {
        Self {
            kind: AddressKind::PubKeyHash,
            net_id: params.pub_key_hash_addr_id,
            hash,
        }
    }

    pub fn script_hash(hash: [u8; 20], params: &NetworkParams) -> Self {
        Self {
            kind: AddressKind::ScriptHash,
            net_id: params.script_hash_addr_id,
            hash,
        }
    }

    /// Decodes a base58 address string for the given network.
    pub fn decode(addr: &str, params: &NetworkParams) -> Result<Self, AddressError> {
        let decoded = bs58::decode(addr).into_vec()?;
        if decoded.len() != PAYLOAD_LEN {
            return Err(AddressError::Length(decoded.len()));
        }

        let (body, checksum) = decoded.split_at(PAYLOAD_LEN - CHECKSUM_LEN);
        if checksum != &blake256(&blake256(body))[..CHECKSUM_LEN] {
            return Err(AddressError::Checksum);
        }

        let net_id = [body[0], body[1]];
        let kind = if net_id == params.pub_key_hash_addr_id {
            AddressKind::PubKeyHash
        } else if net_id == params.script_hash_addr_id {
            AddressKind::ScriptHash
        } else {
            return Err(AddressError::WrongNetwork(net_id));
        };

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&body[2..]);
        Ok(Self { kind, net_id, hash })
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn hash160(&self) -> &[u8; 20] {
        &self.hash
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = Vec::with_capacity(PAYLOAD_LEN);
        payload.extend_from_slice(&self.net_id);
        payload.extend_from_slice(&self.hash);
        let checksum = blake256(&blake256(&payload));
        payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
        f.write_str(&bs58::encode(payload).into_string())
    }
}
