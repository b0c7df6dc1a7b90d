use serenity::all::{ChannelId, MessageId, ReactionType, RoleId};

use crate::{
    data::BindingStore,
    error::AppError,
    model::reaction::EmojiKey,
    platform::fake::{Failure, FakePlatform},
    service::reaction_role::ReactionRoleService,
};

fn check() -> EmojiKey {
    EmojiKey::Unicode("✅".to_string())
}

/// Tests binding an emoji attaches the reaction and records the binding.
///
/// Expected: Ok with one reaction attached and resolve returning the role
#[tokio::test]
async fn binds_and_attaches_reaction() -> Result<(), AppError> {
    let bindings = BindingStore::new();
    let platform = FakePlatform::new().with_message(10, 123);
    let service = ReactionRoleService::new(&bindings, &platform);

    let created = service
        .bind(ChannelId::new(10), "123", "✅", RoleId::new(1))
        .await?;

    assert_eq!(created.message_id, MessageId::new(123));
    assert_eq!(created.replaced, None);
    assert_eq!(
        platform.reactions(),
        vec![(
            ChannelId::new(10),
            MessageId::new(123),
            ReactionType::Unicode("✅".to_string())
        )]
    );
    assert_eq!(
        bindings.resolve(MessageId::new(123), &check()).await,
        Some(RoleId::new(1))
    );

    Ok(())
}

/// Tests rebinding the same message and emoji keeps only the latest role.
///
/// Expected: resolve returns the second role and reports the replaced one
#[tokio::test]
async fn rebind_is_last_write_wins() -> Result<(), AppError> {
    let bindings = BindingStore::new();
    let platform = FakePlatform::new().with_message(10, 123);
    let service = ReactionRoleService::new(&bindings, &platform);

    service
        .bind(ChannelId::new(10), "123", "✅", RoleId::new(1))
        .await?;
    let created = service
        .bind(ChannelId::new(10), "123", "✅", RoleId::new(2))
        .await?;

    assert_eq!(created.replaced, Some(RoleId::new(1)));
    assert_eq!(
        bindings.resolve(MessageId::new(123), &check()).await,
        Some(RoleId::new(2))
    );
    assert_eq!(bindings.len().await, 1);

    Ok(())
}

/// Tests a non-numeric message ID is rejected before any platform call.
///
/// Expected: Err(AppError::BadRequest), no reaction attached, store empty
#[tokio::test]
async fn rejects_non_numeric_message_id() {
    let bindings = BindingStore::new();
    let platform = FakePlatform::new().with_message(10, 123);
    let service = ReactionRoleService::new(&bindings, &platform);

    let result = service
        .bind(ChannelId::new(10), "not-a-number", "✅", RoleId::new(1))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(platform.reactions().is_empty());
    assert_eq!(bindings.len().await, 0);
}

/// Tests a message that does not exist in the channel is reported as not found.
///
/// Expected: Err(AppError::NotFound), store empty
#[tokio::test]
async fn reports_unknown_message() {
    let bindings = BindingStore::new();
    let platform = FakePlatform::new().with_message(10, 123);
    let service = ReactionRoleService::new(&bindings, &platform);

    let result = service
        .bind(ChannelId::new(11), "123", "✅", RoleId::new(1))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(bindings.len().await, 0);
}

/// Tests a failure to attach the reaction stops the binding from being recorded.
///
/// Expected: Err(AppError::Forbidden), store empty
#[tokio::test]
async fn reaction_failure_skips_recording() {
    let bindings = BindingStore::new();
    let platform = FakePlatform::new()
        .with_message(10, 123)
        .failing_reactions(Failure::Forbidden);
    let service = ReactionRoleService::new(&bindings, &platform);

    let result = service
        .bind(ChannelId::new(10), "123", "✅", RoleId::new(1))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(bindings.len().await, 0);
}
