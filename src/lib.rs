//! This crate implements the checks a Decred voting service provider runs on
//! client submissions before it takes responsibility for voting a ticket.
//! It includes modules for chain primitives, stake classification, address and
//! message signature handling, network parameters, the node and database
//! lookups it depends on, and the validators themselves.

pub mod types; // Error taxonomy and request-scoped data shared by the validators.
pub mod wire; // Hashes and transaction (de)serialization.
pub mod stake; // Ticket purchase classification and commitment outputs.
pub mod address; // Base58 addresses and signed message verification.
pub mod params; // Per-network consensus parameters and deployments.
pub mod node; // Live ticket query capability.
pub mod registry; // Alternate sign address lookup capability.
pub mod validation; // The submission validators.
pub mod config; // Defines and loads configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use params::NetworkParams;
