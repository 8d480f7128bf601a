use thiserror::Error;

/// Base offset of delegation error codes.
const DELEGABLE_ERROR_BASE: u32 = 3000;

/// Error types related to delegation management and permit verification.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DelegableError {
    /// Only the holder may change their own delegations directly
    #[error("Delegable: only-holder")]
    HolderMismatch,
    /// A record already exists for (holder, delegate, selector)
    #[error("Delegable: already-delegated")]
    AlreadyDelegated,
    /// No record exists for (holder, delegate, selector)
    #[error("Delegable: not-delegated")]
    NotDelegated,
    /// Malformed signature, failed recovery, or signer is not the holder
    #[error("Delegable: invalid-signature")]
    InvalidSignature,
    /// The holder's permit counter cannot advance any further
    #[error("Delegable: counter-overflow")]
    CounterOverflow,
}

impl DelegableError {
    /// Numeric code of the error, stable across releases.
    pub fn code(&self) -> u32 {
        DELEGABLE_ERROR_BASE + *self as u32
    }
}

impl From<DelegableError> for u32 {
    fn from(e: DelegableError) -> Self {
        e.code()
    }
}
