use crate::address::verify_message;
use crate::params::NetworkParams;
use crate::registry::AltSignAddrStore;
use crate::{SigningContext, ValidationError};
use tracing::{debug, warn};

/// Authenticates a request against the ticket's commitment address, falling
/// back to an alternate sign address registered for the ticket.
///
/// The store is consulted only when the commitment address check fails. A
/// missing alternate address and a failed alternate check both produce
/// `ValidationError::BadSignature`, so callers cannot tell them apart.
/// Store failures are returned as `ValidationError::AltSignAddrLookup`.
pub async fn validate_signature(
    ctx: &SigningContext<'_>,
    store: &dyn AltSignAddrStore,
    params: &NetworkParams,
) -> Result<(), ValidationError> {
    let Err(first_err) = verify_message(ctx.commitment_address, ctx.signature, ctx.message, params) else {
        return Ok(());
    };
    debug!(
        "Commitment address signature check failed for ticket {}: {first_err}",
        ctx.ticket_hash
    );

    let alt_sig_data = store
        .alt_sign_addr_data(ctx.ticket_hash)
        .await
        .map_err(|source| ValidationError::AltSignAddrLookup { source })?;

    let Some(record) = alt_sig_data else {
        warn!("Bad signature for ticket {}", ctx.ticket_hash);
        return Err(ValidationError::BadSignature);
    };

    if let Err(alt_err) = verify_message(&record.alt_sign_addr, ctx.signature, ctx.message, params) {
        debug!(
            "Alternate sign address check failed for ticket {}: {alt_err}",
            ctx.ticket_hash
        );
        warn!("Bad signature for ticket {}", ctx.ticket_hash);
        return Err(ValidationError::BadSignature);
    }

    debug!("Ticket {} authenticated by alternate sign address", ctx.ticket_hash);
    Ok(())
}
