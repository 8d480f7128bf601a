//! Delegable Vault Instruction Definitions

use borsh::{BorshDeserialize, BorshSerialize};
use delegable_state::{Address, Selector, Signature};

use crate::error::VaultError;

/// Instruction discriminators, in borsh variant order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InstructionDiscriminator {
    AddDelegate = 0,
    RevokeDelegate = 1,
    AddDelegateByPermit = 2,
    Post = 3,
    Withdraw = 4,
    Mint = 5,
    Burn = 6,
}

impl TryFrom<u8> for InstructionDiscriminator {
    type Error = VaultError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstructionDiscriminator::AddDelegate),
            1 => Ok(InstructionDiscriminator::RevokeDelegate),
            2 => Ok(InstructionDiscriminator::AddDelegateByPermit),
            3 => Ok(InstructionDiscriminator::Post),
            4 => Ok(InstructionDiscriminator::Withdraw),
            5 => Ok(InstructionDiscriminator::Mint),
            6 => Ok(InstructionDiscriminator::Burn),
            _ => Err(VaultError::InvalidInstruction),
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum VaultInstruction {
    /// Grant a delegation directly
    ///
    /// Signer: the holder
    AddDelegate {
        holder: Address,
        delegate: Address,
        /// Operation the delegate may call
        selector: Selector,
        /// Unix timestamp after which the grant is inactive
        expiry: u64,
    },

    /// Remove a delegation
    ///
    /// Signer: the holder
    RevokeDelegate {
        holder: Address,
        delegate: Address,
        selector: Selector,
    },

    /// Grant a delegation with the holder's EIP-712 signature
    ///
    /// Signer: anybody (relayer)
    AddDelegateByPermit {
        holder: Address,
        delegate: Address,
        selector: Selector,
        expiry: u64,
        /// Holder's signature over the permit for their current count
        signature: Signature,
    },

    /// Post collateral from `caller` for `account`
    ///
    /// Signer: `caller`
    Post {
        account: Address,
        caller: Address,
        amount: u128,
    },

    /// Withdraw `account`'s collateral to `caller`
    ///
    /// Signer: `caller`
    Withdraw {
        account: Address,
        caller: Address,
        amount: u128,
    },

    /// Mint debt against `account` to `caller`
    ///
    /// Signer: `caller`
    Mint {
        account: Address,
        caller: Address,
        amount: u128,
    },

    /// Burn `caller`'s debt tokens to repay `account`'s debt
    ///
    /// Signer: `caller`, who must have approved the vault on the debt token
    Burn {
        account: Address,
        caller: Address,
        amount: u128,
    },
}

impl VaultInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, VaultError> {
        Self::try_from_slice(input).map_err(|_| VaultError::InvalidInstruction)
    }

    pub fn pack(&self) -> std::io::Result<Vec<u8>> {
        borsh::to_vec(self)
    }

    pub fn discriminator(&self) -> InstructionDiscriminator {
        match self {
            VaultInstruction::AddDelegate { .. } => InstructionDiscriminator::AddDelegate,
            VaultInstruction::RevokeDelegate { .. } => InstructionDiscriminator::RevokeDelegate,
            VaultInstruction::AddDelegateByPermit { .. } => {
                InstructionDiscriminator::AddDelegateByPermit
            },
            VaultInstruction::Post { .. } => InstructionDiscriminator::Post,
            VaultInstruction::Withdraw { .. } => InstructionDiscriminator::Withdraw,
            VaultInstruction::Mint { .. } => InstructionDiscriminator::Mint,
            VaultInstruction::Burn { .. } => InstructionDiscriminator::Burn,
        }
    }
}
