//! Collateralized minting vault.

use delegable_interface::TokenInterface;
use delegable_state::{
    Address, DelegationRegistry, DomainConfig, Selector, Signature, TypedDataDomain,
};
use serde::{Deserialize, Serialize};

use crate::{
    actions,
    clock::Clock,
    error::VaultResult,
    ledger::Ledger,
    processor,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Signing domain. Its verifying contract is the vault's own address.
    pub domain: DomainConfig,
    /// Initial clock value in unix seconds
    #[serde(default)]
    pub start_time: u64,
}

impl VaultConfig {
    pub fn new(domain: DomainConfig) -> Self {
        Self {
            domain,
            start_time: 0,
        }
    }

    pub fn with_start_time(mut self, start_time: u64) -> Self {
        self.start_time = start_time;
        self
    }
}

/// A vault holding collateral of token `C` and issuing debt token `D`.
///
/// Every operation is all-or-nothing: failures leave the registry, the
/// ledger and both tokens untouched.
#[derive(Debug)]
pub struct Vault<C, D> {
    pub(crate) address: Address,
    pub(crate) domain: TypedDataDomain,
    pub(crate) clock: Clock,
    pub(crate) registry: DelegationRegistry,
    pub(crate) ledger: Ledger,
    pub(crate) collateral: C,
    pub(crate) debt: D,
}

impl<C: TokenInterface, D: TokenInterface> Vault<C, D> {
    pub fn new(config: VaultConfig, collateral: C, debt: D) -> Self {
        Self {
            address: config.domain.verifying_contract,
            domain: TypedDataDomain::new(config.domain),
            clock: Clock::new(config.start_time),
            registry: DelegationRegistry::new(),
            ledger: Ledger::new(),
            collateral,
            debt,
        }
    }

    /// Decodes and executes a borsh-encoded [`crate::VaultInstruction`].
    pub fn process_instruction(&mut self, signer: &Address, instruction_data: &[u8]) -> VaultResult {
        processor::process_instruction(self, signer, instruction_data)
    }

    pub fn add_delegate(
        &mut self,
        signer: &Address,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
        expiry: u64,
    ) -> VaultResult {
        actions::process_add_delegate(self, signer, holder, delegate, selector, expiry)
    }

    pub fn revoke_delegate(
        &mut self,
        signer: &Address,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
    ) -> VaultResult {
        actions::process_revoke_delegate(self, signer, holder, delegate, selector)
    }

    pub fn add_delegate_by_permit(
        &mut self,
        signer: &Address,
        holder: &Address,
        delegate: &Address,
        selector: &Selector,
        expiry: u64,
        signature: &Signature,
    ) -> VaultResult {
        actions::process_add_delegate_by_permit(
            self, signer, holder, delegate, selector, expiry, signature,
        )
    }

    pub fn post(
        &mut self,
        signer: &Address,
        account: &Address,
        caller: &Address,
        amount: u128,
    ) -> VaultResult {
        actions::process_post(self, signer, account, caller, amount)
    }

    pub fn withdraw(
        &mut self,
        signer: &Address,
        account: &Address,
        caller: &Address,
        amount: u128,
    ) -> VaultResult {
        actions::process_withdraw(self, signer, account, caller, amount)
    }

    pub fn mint(
        &mut self,
        signer: &Address,
        account: &Address,
        caller: &Address,
        amount: u128,
    ) -> VaultResult {
        actions::process_mint(self, signer, account, caller, amount)
    }

    pub fn burn(
        &mut self,
        signer: &Address,
        account: &Address,
        caller: &Address,
        amount: u128,
    ) -> VaultResult {
        actions::process_burn(self, signer, account, caller, amount)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn domain(&self) -> &TypedDataDomain {
        &self.domain
    }

    pub fn registry(&self) -> &DelegationRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn warp_to(&mut self, unix_timestamp: u64) -> VaultResult {
        self.clock.warp_to(unix_timestamp)
    }

    pub fn delegates(&self, holder: &Address, delegate: &Address, selector: &Selector) -> u64 {
        self.registry.delegates(holder, delegate, selector)
    }

    pub fn count(&self, holder: &Address) -> u64 {
        self.registry.count(holder)
    }

    pub fn posted(&self, account: &Address) -> u128 {
        self.ledger.posted(account)
    }

    pub fn minted(&self, account: &Address) -> u128 {
        self.ledger.minted(account)
    }

    /// Debt tokens held by `account`, independent of any ledger position.
    pub fn debt_balance_of(&self, account: &Address) -> u128 {
        self.debt.balance_of(account)
    }

    pub fn collateral(&self) -> &C {
        &self.collateral
    }

    /// The collateral token, for funding and approvals outside the vault.
    pub fn collateral_mut(&mut self) -> &mut C {
        &mut self.collateral
    }

    pub fn debt(&self) -> &D {
        &self.debt
    }

    /// Sets how much of `owner`'s debt tokens the vault may burn on their
    /// behalf.
    pub fn approve_debt(&mut self, owner: &Address, amount: u128) {
        self.debt.approve(owner, &self.address, amount);
    }

    /// Moves debt tokens between holders. Supply only changes through
    /// `mint` and `burn`.
    pub fn transfer_debt(&mut self, sender: &Address, to: &Address, amount: u128) -> VaultResult {
        self.debt.transfer(sender, to, amount)?;
        Ok(())
    }
}
