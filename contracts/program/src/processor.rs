//! Instruction Processor
//!
//! Thin dispatcher that routes instructions to individual handlers.

use delegable_interface::TokenInterface;
use delegable_state::Address;
use tracing::{debug, warn};

use crate::actions;
use crate::error::VaultResult;
use crate::instruction::VaultInstruction;
use crate::vault::Vault;

pub fn process_instruction<C: TokenInterface, D: TokenInterface>(
    vault: &mut Vault<C, D>,
    signer: &Address,
    instruction_data: &[u8],
) -> VaultResult {
    debug!(
        "Processing Instruction from {}. Discriminator: {:?}",
        signer,
        instruction_data.first()
    );
    let instruction = VaultInstruction::unpack(instruction_data).map_err(|e| {
        warn!("Failed to unpack instruction: {:?}", e);
        e
    })?;
    match instruction {
        VaultInstruction::AddDelegate {
            holder,
            delegate,
            selector,
            expiry,
        } => actions::process_add_delegate(vault, signer, &holder, &delegate, &selector, expiry),

        VaultInstruction::RevokeDelegate {
            holder,
            delegate,
            selector,
        } => actions::process_revoke_delegate(vault, signer, &holder, &delegate, &selector),

        VaultInstruction::AddDelegateByPermit {
            holder,
            delegate,
            selector,
            expiry,
            signature,
        } => actions::process_add_delegate_by_permit(
            vault, signer, &holder, &delegate, &selector, expiry, &signature,
        ),

        VaultInstruction::Post {
            account,
            caller,
            amount,
        } => actions::process_post(vault, signer, &account, &caller, amount),

        VaultInstruction::Withdraw {
            account,
            caller,
            amount,
        } => actions::process_withdraw(vault, signer, &account, &caller, amount),

        VaultInstruction::Mint {
            account,
            caller,
            amount,
        } => actions::process_mint(vault, signer, &account, &caller, amount),

        VaultInstruction::Burn {
            account,
            caller,
            amount,
        } => actions::process_burn(vault, signer, &account, &caller, amount),
    }
}
