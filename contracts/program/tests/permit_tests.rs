mod common;

use common::*;
use delegable_state::{DelegableError, DomainConfig, PermitMessage, Selector, TypedDataDomain};
use delegable_vault::VaultError;

const FAR_FUTURE: u64 = 100_000_000_000_000;

#[test_log::test]
fn test_relayed_permit_grants_delegation() {
    let mut ctx = TestContext::new();
    let holder = ctx.owner.address;
    let delegate = ctx.user.address;
    let relayer = User::random().address;

    let signature = ctx.permit(&ctx.owner, &delegate, Selector::MINT, FAR_FUTURE);
    ctx.vault
        .add_delegate_by_permit(&relayer, &holder, &delegate, &Selector::MINT, FAR_FUTURE, &signature)
        .unwrap();

    assert_eq!(ctx.vault.delegates(&holder, &delegate, &Selector::MINT), FAR_FUTURE);
    assert_eq!(ctx.vault.count(&holder), 1);

    // The delegate can now act on the holder's behalf.
    ctx.vault.mint(&delegate, &holder, &delegate, 1000).unwrap();
    assert_eq!(ctx.vault.minted(&holder), 1000);
}

#[test_log::test]
fn test_permit_cannot_be_replayed() {
    let mut ctx = TestContext::new();
    let holder = ctx.owner.address;
    let delegate = ctx.user.address;

    let signature = ctx.permit(&ctx.owner, &delegate, Selector::POST, FAR_FUTURE);
    ctx.vault
        .add_delegate_by_permit(&delegate, &holder, &delegate, &Selector::POST, FAR_FUTURE, &signature)
        .unwrap();

    ctx.vault
        .revoke_delegate(&holder, &holder, &delegate, &Selector::POST)
        .unwrap();

    assert_eq!(
        ctx.vault.add_delegate_by_permit(
            &delegate,
            &holder,
            &delegate,
            &Selector::POST,
            FAR_FUTURE,
            &signature
        ),
        Err(VaultError::Delegation(DelegableError::InvalidSignature))
    );
    assert_eq!(ctx.vault.delegates(&holder, &delegate, &Selector::POST), 0);
    assert_eq!(ctx.vault.count(&holder), 1);
}

#[test_log::test]
fn test_permit_with_altered_fields_fails() {
    let mut ctx = TestContext::new();
    let holder = ctx.owner.address;
    let delegate = ctx.user.address;
    let signature = ctx.permit(&ctx.owner, &delegate, Selector::MINT, FAR_FUTURE);

    let altered = [
        (holder, delegate, Selector::MINT, FAR_FUTURE + 1),
        (holder, delegate, Selector::BURN, FAR_FUTURE),
        (holder, holder, Selector::MINT, FAR_FUTURE),
        (delegate, delegate, Selector::MINT, FAR_FUTURE),
    ];
    for (holder, delegate, selector, expiry) in altered {
        assert_eq!(
            ctx.vault
                .add_delegate_by_permit(&delegate, &holder, &delegate, &selector, expiry, &signature),
            Err(VaultError::Delegation(DelegableError::InvalidSignature))
        );
    }
    assert_eq!(ctx.vault.count(&holder), 0);
    assert_eq!(ctx.vault.count(&delegate), 0);
}

#[test_log::test]
fn test_permit_signed_by_someone_else_fails() {
    let mut ctx = TestContext::new();
    let holder = ctx.owner.address;
    let delegate = ctx.user.address;

    // Delegate signs a permit naming the holder.
    let message = PermitMessage {
        holder,
        delegate,
        selector: Selector::WITHDRAW,
        expiry: FAR_FUTURE,
        count: 0,
    };
    let signature = sign(&message.digest(ctx.vault.domain()), &ctx.user.secret);

    assert_eq!(
        ctx.vault.add_delegate_by_permit(
            &delegate,
            &holder,
            &delegate,
            &Selector::WITHDRAW,
            FAR_FUTURE,
            &signature
        ),
        Err(VaultError::Delegation(DelegableError::InvalidSignature))
    );
}

#[test_log::test]
fn test_permit_for_another_domain_fails() {
    let mut ctx = TestContext::new();
    let holder = ctx.owner.address;
    let delegate = ctx.user.address;

    let message = PermitMessage {
        holder,
        delegate,
        selector: Selector::MINT,
        expiry: FAR_FUTURE,
        count: 0,
    };
    let other_chain = TypedDataDomain::new(DomainConfig::new("Delegable", 1, VAULT));
    let signature = sign(&message.digest(&other_chain), &ctx.owner.secret);

    assert_eq!(
        ctx.vault
            .add_delegate_by_permit(&delegate, &holder, &delegate, &Selector::MINT, FAR_FUTURE, &signature),
        Err(VaultError::Delegation(DelegableError::InvalidSignature))
    );
}

#[test_log::test]
fn test_permit_overwrites_existing_delegation() {
    let mut ctx = TestContext::new();
    let holder = ctx.owner.address;
    let delegate = ctx.user.address;

    ctx.vault
        .add_delegate(&holder, &holder, &delegate, &Selector::MINT, START_TIME + 10)
        .unwrap();

    let signature = ctx.permit(&ctx.owner, &delegate, Selector::MINT, FAR_FUTURE);
    ctx.vault
        .add_delegate_by_permit(&delegate, &holder, &delegate, &Selector::MINT, FAR_FUTURE, &signature)
        .unwrap();
    assert_eq!(ctx.vault.delegates(&holder, &delegate, &Selector::MINT), FAR_FUTURE);

    // A permit with zero expiry revokes.
    let signature = ctx.permit(&ctx.owner, &delegate, Selector::MINT, 0);
    ctx.vault
        .add_delegate_by_permit(&delegate, &holder, &delegate, &Selector::MINT, 0, &signature)
        .unwrap();
    assert_eq!(ctx.vault.delegates(&holder, &delegate, &Selector::MINT), 0);
    assert_eq!(ctx.vault.count(&holder), 2);
}

#[test_log::test]
fn test_past_expiry_is_granted_but_inactive() {
    let mut ctx = TestContext::new();
    let holder = ctx.owner.address;
    let delegate = ctx.user.address;
    let expiry = START_TIME - 1;

    let signature = ctx.permit(&ctx.owner, &delegate, Selector::MINT, expiry);
    ctx.vault
        .add_delegate_by_permit(&delegate, &holder, &delegate, &Selector::MINT, expiry, &signature)
        .unwrap();
    assert_eq!(ctx.vault.delegates(&holder, &delegate, &Selector::MINT), expiry);

    assert_eq!(
        ctx.vault.mint(&delegate, &holder, &delegate, 1),
        Err(VaultError::MintAccessDenied)
    );
}
