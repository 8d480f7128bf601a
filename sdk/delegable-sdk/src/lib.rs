pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::client::VaultClient;
pub use crate::basic::permit::{PermitBuilder, SignedPermit};
pub use crate::core::connection::VaultConnection;
pub use crate::core::local::LocalConnection;
pub use crate::core::signer::{DelegableSigner, LocalSigner};
pub use crate::error::{DelegableSdkError, Result};
pub use crate::types::{AccountPosition, DelegationInfo};
pub use crate::utils::{default_domain, fetch_delegation, fetch_position};

pub mod state {
    pub use delegable_state::{Address, DomainConfig, Selector, Signature, TypedDataDomain};
    pub use delegable_vault::{VaultError, VaultInstruction};
}
