use crate::ValidationError;
use crate::stake::check_sstx;
use crate::wire::MsgTx;
use tracing::warn;

/// Outputs of a single-input ticket: submission, commitment, change.
pub const TICKET_OUTPUTS: usize = 3;

/// Decodes a hex encoded, fully serialized transaction.
pub fn decode_transaction(tx_hex: &str) -> Result<MsgTx, ValidationError> {
    let bytes = hex::decode(tx_hex).map_err(ValidationError::TransactionEncoding)?;
    MsgTx::from_bytes(&bytes).map_err(ValidationError::TransactionDecode)
}

/// Checks that `tx` is a ticket purchase the VSP can accept.
pub fn validate_ticket(tx: &MsgTx) -> Result<(), ValidationError> {
    check_sstx(tx).map_err(|e| {
        warn!("Transaction {} is not a ticket: {e}", tx.tx_hash());
        ValidationError::NotTicket(e)
    })?;

    if tx.tx_out.len() != TICKET_OUTPUTS {
        warn!(
            "Ticket {} has {} outputs, expected {TICKET_OUTPUTS}",
            tx.tx_hash(),
            tx.tx_out.len()
        );
        return Err(ValidationError::TicketOutputs(tx.tx_out.len()));
    }

    Ok(())
}
