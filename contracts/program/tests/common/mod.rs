#![allow(dead_code)]

use delegable_interface::{MintableToken, TokenInterface};
use delegable_state::{Address, DomainConfig, PermitMessage, Selector, Signature};
use delegable_vault::{Vault, VaultConfig};

pub const VAULT: Address = Address([0x5f; 20]);
pub const CHAIN_ID: u64 = 31337;
pub const START_TIME: u64 = 1_700_000_000;
pub const FUNDING: u128 = 1_000_000_000;

pub struct User {
    pub secret: libsecp256k1::SecretKey,
    pub address: Address,
}

impl User {
    pub fn new(seed: u8) -> Self {
        let secret = libsecp256k1::SecretKey::parse(&[seed; 32]).unwrap();
        let address = Address::from_public_key(&libsecp256k1::PublicKey::from_secret_key(&secret));
        Self { secret, address }
    }

    pub fn random() -> Self {
        let secret = loop {
            if let Ok(secret) = libsecp256k1::SecretKey::parse(&rand::random::<[u8; 32]>()) {
                break secret;
            }
        };
        let address = Address::from_public_key(&libsecp256k1::PublicKey::from_secret_key(&secret));
        Self { secret, address }
    }
}

pub struct TestContext {
    pub vault: Vault<MintableToken, MintableToken>,
    pub owner: User,
    pub user: User,
}

impl TestContext {
    pub fn new() -> Self {
        let config = VaultConfig::new(DomainConfig::new("Delegable", CHAIN_ID, VAULT))
            .with_start_time(START_TIME);
        let mut vault = Vault::new(
            config,
            MintableToken::new("Collateral", "CLT"),
            MintableToken::new("Debt", "DBT"),
        );

        let owner = User::new(0x11);
        let user = User::new(0x22);
        for account in [&owner.address, &user.address] {
            vault.collateral_mut().mint(account, FUNDING).unwrap();
            vault.collateral_mut().approve(account, &VAULT, FUNDING);
            vault.approve_debt(account, FUNDING);
        }

        Self { vault, owner, user }
    }

    pub fn permit(
        &self,
        holder: &User,
        delegate: &Address,
        selector: Selector,
        expiry: u64,
    ) -> Signature {
        let message = PermitMessage {
            holder: holder.address,
            delegate: *delegate,
            selector,
            expiry,
            count: self.vault.count(&holder.address),
        };
        sign(&message.digest(self.vault.domain()), &holder.secret)
    }

    pub fn collateral_balance(&self, account: &Address) -> u128 {
        self.vault.collateral().balance_of(account)
    }

    pub fn debt_balance(&self, account: &Address) -> u128 {
        self.vault.debt().balance_of(account)
    }
}

pub fn sign(digest: &[u8; 32], secret: &libsecp256k1::SecretKey) -> Signature {
    let (sig, recovery_id) = libsecp256k1::sign(&libsecp256k1::Message::parse(digest), secret);
    let mut rsv = [0u8; 65];
    rsv[..64].copy_from_slice(&sig.serialize());
    rsv[64] = 27 + recovery_id.serialize();
    Signature::from_rsv(&rsv)
}
