use crate::stake::StakeError;
use crate::wire::{Hash, HashParseError, WireError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Agenda id to choice id, as submitted by a voter.
///
/// Ordered so validation visits entries in key order: when several entries
/// are invalid, the one reported is always the lexicographically first.
pub type VoteChoices = BTreeMap<String, String>;

/// Treasury key (hex pubkey) or tspend hash to policy value.
pub type PolicyMap = BTreeMap<String, String>;

/// Request-scoped data needed to authenticate a ticket's controller.
#[derive(Debug, Clone, Copy)]
pub struct SigningContext<'a> {
    pub ticket_hash: &'a str,
    pub commitment_address: &'a str,
    pub signature: &'a str,
    pub message: &'a str,
}

/// What is known about a ticket's position in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketChainState {
    pub hash: Hash,
    pub confirmations: i64,
}

/// Broad category of a validation failure, used by callers to pick a
/// response status and retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Undecodable or wrongly sized input.
    MalformedInput,
    /// Input that is well formed but not allowed by the consensus rules.
    ConsensusMismatch,
    /// The request signature could not be attributed to the ticket.
    AuthenticationFailure,
    /// A collaborator (node or database) call failed.
    InfrastructureFailure,
}

/// Validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("incorrect hash length: got {got}, expected {expected}")]
    HashLength { got: usize, expected: usize },

    #[error("invalid hash: {0}")]
    InvalidHash(#[source] HashParseError),

    #[error("error decoding treasury key {key:?}: {source}")]
    TreasuryKeyEncoding { key: String, source: hex::FromHexError },

    #[error("treasury key {key:?} is not {expected} bytes")]
    TreasuryKeyLength { key: String, expected: usize },

    #[error("wrong tspend hash length, expected {expected} got {got}")]
    TSpendHashLength { got: usize, expected: usize },

    #[error("error decoding tspend hash {hash:?}: {source}")]
    TSpendHash { hash: String, source: HashParseError },

    #[error("error decoding transaction hex: {0}")]
    TransactionEncoding(#[source] hex::FromHexError),

    #[error("error deserializing transaction: {0}")]
    TransactionDecode(#[source] WireError),

    #[error("invalid transaction - not sstx: {0}")]
    NotTicket(#[source] StakeError),

    #[error("invalid transaction - expected 3 outputs, got {0}")]
    TicketOutputs(usize),

    #[error("agenda {agenda:?} not found for vote version {vote_version}")]
    UnknownAgenda { agenda: String, vote_version: u32 },

    #[error("choice {choice:?} not found for agenda {agenda:?}")]
    UnknownChoice { choice: String, agenda: String },

    #[error("{0:?} is not a valid policy option")]
    InvalidPolicyOption(String),

    /// Deliberately carries no detail about which check failed.
    #[error("bad signature")]
    BadSignature,

    #[error("alternate sign address lookup failed: {source}")]
    AltSignAddrLookup { source: anyhow::Error },

    #[error("live ticket query for {ticket} failed: {source}")]
    LiveTicketQuery { ticket: Hash, source: anyhow::Error },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::HashLength { .. }
            | ValidationError::InvalidHash(_)
            | ValidationError::TreasuryKeyEncoding { .. }
            | ValidationError::TreasuryKeyLength { .. }
            | ValidationError::TSpendHashLength { .. }
            | ValidationError::TSpendHash { .. }
            | ValidationError::TransactionEncoding(_)
            | ValidationError::TransactionDecode(_)
            | ValidationError::NotTicket(_)
            | ValidationError::TicketOutputs(_) => ErrorKind::MalformedInput,
            ValidationError::UnknownAgenda { .. }
            | ValidationError::UnknownChoice { .. }
            | ValidationError::InvalidPolicyOption(_) => ErrorKind::ConsensusMismatch,
            ValidationError::BadSignature => ErrorKind::AuthenticationFailure,
            ValidationError::AltSignAddrLookup { .. } | ValidationError::LiveTicketQuery { .. } => {
                ErrorKind::InfrastructureFailure
            }
        }
    }
}
