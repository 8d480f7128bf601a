// Signing domain defaults for a local development chain
pub const DEFAULT_DOMAIN_NAME: &str = "Delegable";
pub const DEFAULT_VERSION: &str = "1";
pub const DEFAULT_CHAIN_ID: u64 = 31337;
