//! Alternate Sign Address Registry Module
//!
//! Ticket owners may register an alternate address that is allowed to sign
//! requests on behalf of a ticket, for wallets which cannot sign with the
//! commitment address (e.g. hardware or multisig setups).
//!
//! Storage lives outside this crate; validators see it only through the
//! `AltSignAddrStore` lookup.

mod alt_sign;

pub use alt_sign::{AltSignAddrRecord, AltSignAddrStore, MemoryAltSignStore};
