//! Node Query Module
//!
//! The VSP only needs one question answered by the chain node: is a ticket
//! currently in the live ticket pool. Real implementations wrap a dcrd RPC
//! client; `LiveTicketSet` is an in-memory stand-in.

mod live_tickets;

pub use live_tickets::LiveTicketSet;

use crate::wire::Hash;
use async_trait::async_trait;

/// Node query capability.
///
/// Timeouts and retries belong to the implementation; validators issue a
/// single call and propagate whatever error comes back.
#[async_trait]
pub trait Node: Send + Sync {
    /// Reports whether `ticket_hash` is in the live ticket pool.
    async fn exists_live_ticket(&self, ticket_hash: &Hash) -> anyhow::Result<bool>;
}
