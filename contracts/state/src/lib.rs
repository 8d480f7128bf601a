//! Delegable State Module
//!
//! Core state for the delegable vault: the delegation registry with its
//! per-holder permit counters, the access gate consulted by every gated
//! operation, and the EIP-712 permit protocol that lets a holder grant a
//! delegation with a signature instead of an instruction of their own.

pub mod access;
pub mod address;
pub mod domain;
pub mod error;
pub mod hash;
pub mod permit;
pub mod registry;
pub mod selector;
pub mod signature;

pub use access::AccessGate;
pub use address::Address;
pub use domain::{DomainConfig, TypedDataDomain};
pub use error::DelegableError;
pub use hash::keccak256;
pub use permit::{PermitMessage, PERMIT_TYPE};
pub use registry::{DelegationKey, DelegationRegistry};
pub use selector::Selector;
pub use signature::{recover, Signature};
