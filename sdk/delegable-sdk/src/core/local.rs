use async_trait::async_trait;
use delegable_interface::TokenInterface;
use delegable_state::{Address, Selector};
use delegable_vault::Vault;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::core::connection::VaultConnection;

/// Connection to an in-process vault. Instructions run one at a time under
/// the lock.
pub struct LocalConnection<C, D> {
    vault: Arc<Mutex<Vault<C, D>>>,
}

impl<C, D> Clone for LocalConnection<C, D> {
    fn clone(&self) -> Self {
        Self {
            vault: Arc::clone(&self.vault),
        }
    }
}

impl<C, D> LocalConnection<C, D> {
    pub fn new(vault: Vault<C, D>) -> Self {
        Self {
            vault: Arc::new(Mutex::new(vault)),
        }
    }

    /// Shared handle for setting up balances, approvals and the clock.
    pub fn vault(&self) -> Arc<Mutex<Vault<C, D>>> {
        Arc::clone(&self.vault)
    }
}

#[async_trait]
impl<C, D> VaultConnection for LocalConnection<C, D>
where
    C: TokenInterface + Send + 'static,
    D: TokenInterface + Send + 'static,
{
    async fn send_instruction(
        &self,
        signer: &Address,
        data: &[u8],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        debug!("Sending {} bytes signed by {}", data.len(), signer);
        self.vault
            .lock()
            .await
            .process_instruction(signer, data)
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }

    async fn get_delegation(
        &self,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Ok(self.vault.lock().await.delegates(holder, delegate, selector))
    }

    async fn get_count(&self, holder: &Address) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Ok(self.vault.lock().await.count(holder))
    }

    async fn get_posted(&self, account: &Address) -> Result<u128, Box<dyn Error + Send + Sync>> {
        Ok(self.vault.lock().await.posted(account))
    }

    async fn get_minted(&self, account: &Address) -> Result<u128, Box<dyn Error + Send + Sync>> {
        Ok(self.vault.lock().await.minted(account))
    }

    async fn get_debt_balance(
        &self,
        account: &Address,
    ) -> Result<u128, Box<dyn Error + Send + Sync>> {
        Ok(self.vault.lock().await.debt_balance_of(account))
    }

    async fn get_timestamp(&self) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Ok(self.vault.lock().await.clock().unix_timestamp)
    }
}
