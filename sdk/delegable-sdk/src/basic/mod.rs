pub mod client;
pub mod permit;
