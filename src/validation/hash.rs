use crate::ValidationError;
use crate::wire::{Hash, MAX_HASH_STRING_SIZE};

/// Ensures `hash` is a valid ticket hash: exactly 64 characters that parse
/// into a `Hash`.
pub fn validate_ticket_hash(hash: &str) -> Result<Hash, ValidationError> {
    if hash.len() != MAX_HASH_STRING_SIZE {
        return Err(ValidationError::HashLength {
            got: hash.len(),
            expected: MAX_HASH_STRING_SIZE,
        });
    }

    hash.parse().map_err(ValidationError::InvalidHash)
}
