pub mod connection;
pub mod constants;
pub mod local;
pub mod signer;
