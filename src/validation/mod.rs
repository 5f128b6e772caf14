//! Submission Validation Module
//!
//! Stateless checks run on client submissions before the VSP accepts a
//! ticket:
//! - vote choices against the consensus deployments
//! - treasury key and treasury spend policies
//! - request signatures (commitment address or alternate sign address)
//! - ticket transaction structure
//! - hash strings
//! - whether a ticket can still vote
//!
//! None of the checks call each other; request handlers combine them per
//! endpoint.

mod consensus;
mod eligibility;
mod hash;
mod policy;
mod signature;
mod ticket;


pub use consensus::validate_vote_choices;
pub use eligibility::can_ticket_vote;
pub use hash::validate_ticket_hash;
pub use policy::{
    PUB_KEY_BYTES_LEN_COMPRESSED, PolicyOption, validate_policy_option, validate_treasury_policy,
    validate_tspend_policy,
};
pub use signature::validate_signature;
pub use ticket::{TICKET_OUTPUTS, decode_transaction, validate_ticket};
