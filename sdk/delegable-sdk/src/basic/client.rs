use delegable_state::{Address, DomainConfig, Selector, TypedDataDomain};
use tracing::debug;

use crate::advanced::instructions;
use crate::basic::permit::{PermitBuilder, SignedPermit};
use crate::core::connection::VaultConnection;
use crate::core::signer::DelegableSigner;
use crate::error::{DelegableSdkError, Result};
use crate::types::{AccountPosition, DelegationInfo};
use crate::utils;

/// Typed access to a vault over a connection.
pub struct VaultClient<C> {
    connection: C,
    domain: TypedDataDomain,
}

impl<C: VaultConnection> VaultClient<C> {
    pub fn new(connection: C, domain: DomainConfig) -> Self {
        Self {
            connection,
            domain: TypedDataDomain::new(domain),
        }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn domain(&self) -> &TypedDataDomain {
        &self.domain
    }

    /// Vault address, which is the domain's verifying contract
    pub fn address(&self) -> Address {
        self.domain.config().verifying_contract
    }

    async fn send(&self, signer: &Address, data: Vec<u8>) -> Result<()> {
        self.connection
            .send_instruction(signer, &data)
            .await
            .map_err(DelegableSdkError::from_connection)
    }

    pub async fn add_delegate(
        &self,
        holder: &impl DelegableSigner,
        delegate: &Address,
        selector: &Selector,
        expiry: u64,
    ) -> Result<()> {
        let holder = holder.address();
        let data = instructions::add_delegate(&holder, delegate, selector, expiry)?;
        self.send(&holder, data).await
    }

    pub async fn revoke_delegate(
        &self,
        holder: &impl DelegableSigner,
        delegate: &Address,
        selector: &Selector,
    ) -> Result<()> {
        let holder = holder.address();
        let data = instructions::revoke_delegate(&holder, delegate, selector)?;
        self.send(&holder, data).await
    }

    /// Signs a permit for the holder's current counter.
    pub async fn sign_permit(
        &self,
        holder: &impl DelegableSigner,
        delegate: &Address,
        selector: &Selector,
        expiry: u64,
    ) -> Result<SignedPermit> {
        PermitBuilder::new()
            .with_holder(holder.address())
            .with_delegate(*delegate)
            .with_selector(*selector)
            .with_expiry(expiry)
            .fetch_count(&self.connection)
            .await?
            .sign(holder, &self.domain)
            .await
    }

    pub async fn relay_permit(
        &self,
        relayer: &impl DelegableSigner,
        permit: &SignedPermit,
    ) -> Result<()> {
        permit.verify(&self.domain)?;
        debug!(
            "Relaying permit {} of {} via {}",
            permit.count,
            permit.holder,
            relayer.address()
        );
        let data = instructions::add_delegate_by_permit(
            &permit.holder,
            &permit.delegate,
            &permit.selector,
            permit.expiry,
            &permit.signature,
        )?;
        self.send(&relayer.address(), data).await
    }

    pub async fn post(
        &self,
        caller: &impl DelegableSigner,
        account: &Address,
        amount: u128,
    ) -> Result<()> {
        let caller = caller.address();
        self.send(&caller, instructions::post(account, &caller, amount)?)
            .await
    }

    pub async fn withdraw(
        &self,
        caller: &impl DelegableSigner,
        account: &Address,
        amount: u128,
    ) -> Result<()> {
        let caller = caller.address();
        self.send(&caller, instructions::withdraw(account, &caller, amount)?)
            .await
    }

    pub async fn mint(
        &self,
        caller: &impl DelegableSigner,
        account: &Address,
        amount: u128,
    ) -> Result<()> {
        let caller = caller.address();
        self.send(&caller, instructions::mint(account, &caller, amount)?)
            .await
    }

    pub async fn burn(
        &self,
        caller: &impl DelegableSigner,
        account: &Address,
        amount: u128,
    ) -> Result<()> {
        let caller = caller.address();
        self.send(&caller, instructions::burn(account, &caller, amount)?)
            .await
    }

    pub async fn delegation(
        &self,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
    ) -> Result<DelegationInfo> {
        utils::fetch_delegation(&self.connection, holder, delegate, selector).await
    }

    pub async fn position(&self, account: &Address) -> Result<AccountPosition> {
        utils::fetch_position(&self.connection, account).await
    }

    pub async fn debt_balance(&self, account: &Address) -> Result<u128> {
        self.connection
            .get_debt_balance(account)
            .await
            .map_err(DelegableSdkError::from_connection)
    }

    pub async fn timestamp(&self) -> Result<u64> {
        self.connection
            .get_timestamp()
            .await
            .map_err(DelegableSdkError::from_connection)
    }
}
