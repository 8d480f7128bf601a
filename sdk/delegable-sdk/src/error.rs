use delegable_vault::VaultError;
use thiserror::Error;

/// SDK-specific error types for Delegable operations
#[derive(Debug, Error)]
pub enum DelegableSdkError {
    /// Connection or transport error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Signer failed or refused to sign
    #[error("Signer error: {0}")]
    Signer(String),

    /// Permit is incomplete, or not signed by its holder
    #[error("Invalid permit: {0}")]
    InvalidPermit(String),

    /// Borsh serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] std::io::Error),

    /// Vault rejected the instruction
    #[error("Program error: {0}")]
    Program(#[from] VaultError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl DelegableSdkError {
    /// Keeps vault rejections typed; anything else is a connection failure.
    pub fn from_connection(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match error.downcast::<VaultError>() {
            Ok(vault_error) => DelegableSdkError::Program(*vault_error),
            Err(other) => DelegableSdkError::Connection(other.to_string()),
        }
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, DelegableSdkError>;
