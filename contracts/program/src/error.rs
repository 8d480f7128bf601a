//! Delegable Vault Error Types

use delegable_interface::TokenError;
use delegable_state::DelegableError;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Invalid instruction")]
    InvalidInstruction,

    #[error("Caller did not sign the instruction")]
    MissingRequiredSignature,

    #[error("Vault: post-access")]
    PostAccessDenied,

    #[error("Vault: withdraw-access")]
    WithdrawAccessDenied,

    #[error("Vault: mint-access")]
    MintAccessDenied,

    #[error("Vault: burn-access")]
    BurnAccessDenied,

    #[error("Vault: insufficient-collateral")]
    InsufficientCollateral,

    #[error("Vault: insufficient-debt")]
    InsufficientDebt,

    #[error("Vault: external transfer failed ({0})")]
    ExternalTransferFailed(#[from] TokenError),

    #[error("Vault: overflow")]
    Overflow,

    #[error("Clock cannot move backwards")]
    ClockWentBackwards,

    #[error(transparent)]
    Delegation(#[from] DelegableError),
}

impl VaultError {
    /// Numeric code of the error. Delegation errors keep their own codes.
    pub fn code(&self) -> u32 {
        match self {
            VaultError::InvalidInstruction => 0,
            VaultError::MissingRequiredSignature => 1,
            VaultError::PostAccessDenied => 2,
            VaultError::WithdrawAccessDenied => 3,
            VaultError::MintAccessDenied => 4,
            VaultError::BurnAccessDenied => 5,
            VaultError::InsufficientCollateral => 6,
            VaultError::InsufficientDebt => 7,
            VaultError::ExternalTransferFailed(_) => 8,
            VaultError::Overflow => 9,
            VaultError::ClockWentBackwards => 10,
            VaultError::Delegation(e) => e.code(),
        }
    }
}

pub type VaultResult<T = ()> = Result<T, VaultError>;
