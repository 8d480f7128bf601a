// Example: Delegating minting rights with a relayed permit
//
// This example demonstrates how to:
// 1. Sign a permit offline as the holder
// 2. Hand it to a relayer as JSON
// 3. Mint on the holder's behalf as the delegate

use delegable_interface::MintableToken;
use delegable_sdk::state::{Address, Selector};
use delegable_sdk::{default_domain, DelegableSigner, LocalConnection, LocalSigner, SignedPermit, VaultClient};
use delegable_vault::{Vault, VaultConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let address: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse()?;
    let domain = default_domain(address);
    let vault = Vault::new(
        VaultConfig::new(domain.clone()),
        MintableToken::new("Collateral", "CLT"),
        MintableToken::new("Debt", "DBT"),
    );
    let client = VaultClient::new(LocalConnection::new(vault), domain);

    let holder = LocalSigner::random();
    let delegate = LocalSigner::random();
    let relayer = LocalSigner::random();

    // 1. Holder signs for their current counter
    let permit = client
        .sign_permit(&holder, &delegate.address(), &Selector::MINT, u64::MAX)
        .await?;
    let payload = serde_json::to_string_pretty(&permit)?;
    println!("Signed permit:\n{}", payload);

    // 2. Anyone can submit it
    let permit: SignedPermit = serde_json::from_str(&payload)?;
    client.relay_permit(&relayer, &permit).await?;

    // 3. Delegate mints against the holder's account
    client.mint(&delegate, &holder.address(), 1000).await?;

    let position = client.position(&holder.address()).await?;
    println!("Holder {}: minted {}", holder.address(), position.minted);
    println!(
        "Delegate {}: debt balance {}",
        delegate.address(),
        client.debt_balance(&delegate.address()).await?
    );

    Ok(())
}
