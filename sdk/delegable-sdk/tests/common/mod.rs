#![allow(dead_code)]

use delegable_interface::{MintableToken, TokenInterface};
use delegable_sdk::core::signer::LocalSigner;
use delegable_sdk::state::Address;
use delegable_sdk::{default_domain, DelegableSigner, LocalConnection, VaultClient};
use delegable_vault::{Vault, VaultConfig};

pub const VAULT: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
pub const DEV_KEY: &str = "0xc5e8f61d1ab959b397eecc0a37a6517b8e67a0e7cf1f4bce5591f3ed80199122";
pub const START_TIME: u64 = 1_700_000_000;
pub const FUNDING: u128 = 1_000_000;

pub type Connection = LocalConnection<MintableToken, MintableToken>;

pub struct TestContext {
    pub client: VaultClient<Connection>,
    pub holder: LocalSigner,
    pub delegate: LocalSigner,
    pub relayer: LocalSigner,
}

impl TestContext {
    pub async fn new() -> Self {
        let address: Address = VAULT.parse().unwrap();
        let domain = default_domain(address);
        let vault = Vault::new(
            VaultConfig::new(domain.clone()).with_start_time(START_TIME),
            MintableToken::new("Collateral", "CLT"),
            MintableToken::new("Debt", "DBT"),
        );
        let connection = LocalConnection::new(vault);

        let holder = LocalSigner::from_hex(DEV_KEY).unwrap();
        let delegate = LocalSigner::random();
        let relayer = LocalSigner::random();

        {
            let handle = connection.vault();
            let mut vault = handle.lock().await;
            for account in [holder.address(), delegate.address()] {
                vault.collateral_mut().mint(&account, FUNDING).unwrap();
                vault.collateral_mut().approve(&account, &address, u128::MAX);
                vault.approve_debt(&account, u128::MAX);
            }
        }

        Self {
            client: VaultClient::new(connection, domain),
            holder,
            delegate,
            relayer,
        }
    }

    pub async fn warp_to(&self, unix_timestamp: u64) {
        let handle = self.client.connection().vault();
        handle.lock().await.warp_to(unix_timestamp).unwrap();
    }

    pub async fn collateral_balance(&self, account: &Address) -> u128 {
        let handle = self.client.connection().vault();
        let balance = handle.lock().await.collateral().balance_of(account);
        balance
    }
}
