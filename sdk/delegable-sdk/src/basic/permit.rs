use delegable_state::{recover, Address, PermitMessage, Selector, Signature, TypedDataDomain};
use delegable_vault::VaultInstruction;
use serde::{Deserialize, Serialize};

use crate::core::connection::VaultConnection;
use crate::core::signer::DelegableSigner;
use crate::error::{DelegableSdkError, Result};

/// Builds and signs a permit granting `delegate` the right to call
/// `selector` for `holder`.
#[derive(Debug, Clone, Default)]
pub struct PermitBuilder {
    holder: Option<Address>,
    delegate: Option<Address>,
    selector: Option<Selector>,
    expiry: u64,
    count: Option<u64>,
}

impl PermitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holder(mut self, holder: Address) -> Self {
        self.holder = Some(holder);
        self
    }

    pub fn with_delegate(mut self, delegate: Address) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Zero expiry revokes the delegation once relayed.
    pub fn with_expiry(mut self, expiry: u64) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Uses the holder's current counter from the vault.
    pub async fn fetch_count(self, connection: &impl VaultConnection) -> Result<Self> {
        let holder = self
            .holder
            .ok_or_else(|| DelegableSdkError::InvalidPermit("Holder required".into()))?;
        let count = connection
            .get_count(&holder)
            .await
            .map_err(DelegableSdkError::from_connection)?;
        Ok(self.with_count(count))
    }

    pub fn message(&self) -> Result<PermitMessage> {
        Ok(PermitMessage {
            holder: self
                .holder
                .ok_or_else(|| DelegableSdkError::InvalidPermit("Holder required".into()))?,
            delegate: self
                .delegate
                .ok_or_else(|| DelegableSdkError::InvalidPermit("Delegate required".into()))?,
            selector: self
                .selector
                .ok_or_else(|| DelegableSdkError::InvalidPermit("Selector required".into()))?,
            expiry: self.expiry,
            count: self.count.ok_or_else(|| {
                DelegableSdkError::InvalidPermit("Count required, see fetch_count".into())
            })?,
        })
    }

    pub async fn sign(
        &self,
        signer: &impl DelegableSigner,
        domain: &TypedDataDomain,
    ) -> Result<SignedPermit> {
        let message = self.message()?;
        if signer.address() != message.holder {
            return Err(DelegableSdkError::InvalidPermit(format!(
                "Signer {} is not holder {}",
                signer.address(),
                message.holder
            )));
        }

        let signature = signer
            .sign_digest(&message.digest(domain))
            .await
            .map_err(DelegableSdkError::Signer)?;

        Ok(SignedPermit {
            holder: message.holder,
            delegate: message.delegate,
            selector: message.selector,
            expiry: message.expiry,
            count: message.count,
            signature,
        })
    }
}

/// A permit ready to hand to a relayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPermit {
    pub holder: Address,
    pub delegate: Address,
    pub selector: Selector,
    pub expiry: u64,
    /// Counter the permit was signed for. Not sent on-chain.
    pub count: u64,
    pub signature: Signature,
}

impl SignedPermit {
    pub fn message(&self) -> PermitMessage {
        PermitMessage {
            holder: self.holder,
            delegate: self.delegate,
            selector: self.selector,
            expiry: self.expiry,
            count: self.count,
        }
    }

    /// Checks the signature offline before spending a submission on it.
    pub fn verify(&self, domain: &TypedDataDomain) -> Result<()> {
        let signer = recover(&self.message().digest(domain), &self.signature)
            .map_err(|e| DelegableSdkError::InvalidPermit(e.to_string()))?;
        if signer != self.holder {
            return Err(DelegableSdkError::InvalidPermit(format!(
                "Signed by {} instead of {}",
                signer, self.holder
            )));
        }
        Ok(())
    }

    pub fn instruction(&self) -> VaultInstruction {
        VaultInstruction::AddDelegateByPermit {
            holder: self.holder,
            delegate: self.delegate,
            selector: self.selector,
            expiry: self.expiry,
            signature: self.signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::signer::LocalSigner;
    use delegable_state::DomainConfig;

    fn domain() -> TypedDataDomain {
        TypedDataDomain::new(DomainConfig::new(
            "Delegable",
            31337,
            "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap(),
        ))
    }

    #[test]
    fn test_message_requires_fields() {
        let builder = PermitBuilder::new()
            .with_holder(Address([1u8; 20]))
            .with_delegate(Address([2u8; 20]))
            .with_selector(Selector::MINT);
        assert!(matches!(builder.message(), Err(DelegableSdkError::InvalidPermit(_))));
        assert!(builder.clone().with_count(0).message().is_ok());
        assert!(matches!(
            PermitBuilder::new().with_count(0).message(),
            Err(DelegableSdkError::InvalidPermit(_))
        ));
    }

    #[tokio::test]
    async fn test_known_digest() {
        let signer = LocalSigner::from_hex(
            "c5e8f61d1ab959b397eecc0a37a6517b8e67a0e7cf1f4bce5591f3ed80199122",
        )
        .unwrap();
        let permit = PermitBuilder::new()
            .with_holder(signer.address())
            .with_delegate("0x0000000000000000000000000000000000000002".parse().unwrap())
            .with_selector(Selector::from_signature("mint(address,uint256)"))
            .with_expiry(100_000_000_000_000)
            .with_count(0)
            .sign(&signer, &domain())
            .await
            .unwrap();

        assert_eq!(
            permit.message().digest(&domain()),
            <[u8; 32]>::try_from(
                hex::decode("7af12f146f837669cde15b5357853cb23b6f7e09ca5b450ec8c7d98d08e84454")
                    .unwrap()
            )
            .unwrap()
        );
        permit.verify(&domain()).unwrap();
    }

    #[tokio::test]
    async fn test_sign_rejects_foreign_signer() {
        let holder = LocalSigner::random();
        let other = LocalSigner::random();
        let result = PermitBuilder::new()
            .with_holder(holder.address())
            .with_delegate(other.address())
            .with_selector(Selector::POST)
            .with_count(0)
            .sign(&other, &domain())
            .await;
        assert!(matches!(result, Err(DelegableSdkError::InvalidPermit(_))));
    }

    #[tokio::test]
    async fn test_verify_detects_tampering() {
        let holder = LocalSigner::random();
        let mut permit = PermitBuilder::new()
            .with_holder(holder.address())
            .with_delegate(Address([2u8; 20]))
            .with_selector(Selector::BURN)
            .with_expiry(1000)
            .with_count(3)
            .sign(&holder, &domain())
            .await
            .unwrap();
        permit.verify(&domain()).unwrap();

        permit.expiry += 1;
        assert!(permit.verify(&domain()).is_err());
    }
}
