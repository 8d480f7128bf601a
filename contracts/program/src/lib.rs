//! Delegable Vault
//!
//! Collateralized minting vault whose operations can be delegated per
//! operation, directly or through signed permits.

pub mod actions;
pub mod clock;
pub mod error;
pub mod instruction;
pub mod ledger;
pub mod processor;
pub mod vault;

pub use clock::Clock;
pub use error::{VaultError, VaultResult};
pub use instruction::{InstructionDiscriminator, VaultInstruction};
pub use ledger::Ledger;
pub use vault::{Vault, VaultConfig};
