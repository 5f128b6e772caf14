//! Address Module
//!
//! Base58 Decred addresses and signed message verification, used to
//! authenticate the controller of a ticket.

mod addr;
mod message;

pub use addr::{Address, AddressError, AddressKind};
pub use message::{MessageError, message_hash, verify_message};

#[cfg(test)]
pub(crate) use message::test_util;
