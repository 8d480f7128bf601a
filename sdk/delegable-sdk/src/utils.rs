use crate::core::connection::VaultConnection;
use crate::core::constants::{DEFAULT_CHAIN_ID, DEFAULT_DOMAIN_NAME, DEFAULT_VERSION};
use crate::error::{DelegableSdkError, Result};
use crate::types::{AccountPosition, DelegationInfo};
use delegable_state::{Address, DomainConfig, Selector};

/// Domain of a vault deployed at `verifying_contract` on the development chain
pub fn default_domain(verifying_contract: Address) -> DomainConfig {
    DomainConfig::new(DEFAULT_DOMAIN_NAME, DEFAULT_CHAIN_ID, verifying_contract)
        .with_version(DEFAULT_VERSION)
}

pub async fn fetch_delegation(
    connection: &impl VaultConnection,
    holder: &Address,
    delegate: &Address,
    selector: &Selector,
) -> Result<DelegationInfo> {
    let expiry = connection
        .get_delegation(holder, delegate, selector)
        .await
        .map_err(DelegableSdkError::from_connection)?;

    Ok(DelegationInfo {
        holder: *holder,
        delegate: *delegate,
        selector: *selector,
        expiry,
    })
}

pub async fn fetch_position(
    connection: &impl VaultConnection,
    account: &Address,
) -> Result<AccountPosition> {
    let posted = connection
        .get_posted(account)
        .await
        .map_err(DelegableSdkError::from_connection)?;
    let minted = connection
        .get_minted(account)
        .await
        .map_err(DelegableSdkError::from_connection)?;

    Ok(AccountPosition { posted, minted })
}
