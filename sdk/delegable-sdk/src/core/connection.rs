use async_trait::async_trait;
use delegable_state::{Address, Selector};
use std::error::Error;

#[async_trait]
pub trait VaultConnection: Send + Sync {
    /// Submits borsh-encoded instruction data signed by `signer`.
    async fn send_instruction(
        &self,
        signer: &Address,
        data: &[u8],
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
    async fn get_delegation(
        &self,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
    ) -> Result<u64, Box<dyn Error + Send + Sync>>;
    async fn get_count(&self, holder: &Address) -> Result<u64, Box<dyn Error + Send + Sync>>;
    async fn get_posted(&self, account: &Address) -> Result<u128, Box<dyn Error + Send + Sync>>;
    async fn get_minted(&self, account: &Address) -> Result<u128, Box<dyn Error + Send + Sync>>;
    async fn get_debt_balance(
        &self,
        account: &Address,
    ) -> Result<u128, Box<dyn Error + Send + Sync>>;
    async fn get_timestamp(&self) -> Result<u64, Box<dyn Error + Send + Sync>>;
}
