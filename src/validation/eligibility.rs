use crate::node::Node;
use crate::params::NetworkParams;
use crate::{TicketChainState, ValidationError};
use tracing::debug;

/// Determines whether a ticket is able to vote at some point in the future,
/// i.e. whether it is currently either immature or live.
///
/// The node is only queried for tickets old enough to be live but not old
/// enough to have expired.
pub async fn can_ticket_vote(
    ticket: &TicketChainState,
    node: &dyn Node,
    params: &NetworkParams,
) -> Result<bool, ValidationError> {
    let maturity = i64::from(params.ticket_maturity);
    let expiry = i64::from(params.ticket_expiry);

    // Too old to vote.
    if ticket.confirmations > maturity + expiry + 1 {
        debug!("Ticket {} has {} confirmations, expired", ticket.hash, ticket.confirmations);
        return Ok(false);
    }

    // Immature tickets will become live.
    if ticket.confirmations <= maturity {
        return Ok(true);
    }

    node.exists_live_ticket(&ticket.hash)
        .await
        .map_err(|source| ValidationError::LiveTicketQuery {
            ticket: ticket.hash,
            source,
        })
}
