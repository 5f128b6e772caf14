use crate::wire::{Hash, MAX_HASH_STRING_SIZE};
use crate::{PolicyMap, ValidationError};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Length of a serialized compressed secp256k1 public key.
pub const PUB_KEY_BYTES_LEN_COMPRESSED: usize = 33;

/// Treasury vote policy values understood by the voting wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyOption {
    Yes,
    No,
    Abstain,
    Invalid,
    /// Empty string: clear any previously set policy.
    Unset,
}

impl PolicyOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyOption::Yes => "yes",
            PolicyOption::No => "no",
            PolicyOption::Abstain => "abstain",
            PolicyOption::Invalid => "invalid",
            PolicyOption::Unset => "",
        }
    }
}

impl FromStr for PolicyOption {
    type Err = ValidationError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(PolicyOption::Yes),
            "no" => Ok(PolicyOption::No),
            "abstain" => Ok(PolicyOption::Abstain),
            "invalid" => Ok(PolicyOption::Invalid),
            "" => Ok(PolicyOption::Unset),
            other => Err(ValidationError::InvalidPolicyOption(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that `policy` is one of the values accepted by wallet RPCs.
pub fn validate_policy_option(policy: &str) -> Result<(), ValidationError> {
    policy.parse::<PolicyOption>().map(|_| ()).inspect_err(|_| {
        warn!("Rejected policy option {policy:?}");
    })
}

/// Validates a treasury key policy: keys must be hex encoded compressed
/// public keys.
pub fn validate_treasury_policy(policy: &PolicyMap) -> Result<(), ValidationError> {
    for (key, choice) in policy {
        let pikey = hex::decode(key).map_err(|source| {
            warn!("Rejected treasury key {key:?}: {source}");
            ValidationError::TreasuryKeyEncoding {
                key: key.clone(),
                source,
            }
        })?;
        if pikey.len() != PUB_KEY_BYTES_LEN_COMPRESSED {
            warn!("Rejected treasury key {key:?}: decodes to {} bytes", pikey.len());
            return Err(ValidationError::TreasuryKeyLength {
                key: key.clone(),
                expected: PUB_KEY_BYTES_LEN_COMPRESSED,
            });
        }

        validate_policy_option(choice)?;
    }

    Ok(())
}

/// Validates a treasury spend policy: keys must be tspend transaction hashes.
pub fn validate_tspend_policy(policy: &PolicyMap) -> Result<(), ValidationError> {
    for (hash, choice) in policy {
        if hash.len() != MAX_HASH_STRING_SIZE {
            warn!("Rejected tspend hash {hash:?}: length {}", hash.len());
            return Err(ValidationError::TSpendHashLength {
                got: hash.len(),
                expected: MAX_HASH_STRING_SIZE,
            });
        }

        hash.parse::<Hash>().map_err(|source| {
            warn!("Rejected tspend hash {hash:?}: {source}");
            ValidationError::TSpendHash {
                hash: hash.clone(),
                source,
            }
        })?;

        validate_policy_option(choice)?;
    }

    Ok(())
}
