use super::*;

/// Tests marking another user's notification read.
///
/// Expected: Ok(None) and the notification stays unread
#[tokio::test]
async fn ignores_other_users_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo.create(owner.id, "low_stock", "Brake pads low").await?;

    let result = repo.mark_read(notification.id, other.id).await?;
    assert!(result.is_none());

    let unread = repo.get_by_user(owner.id, true).await?;
    assert_eq!(unread.len(), 1);

    Ok(())
}

/// Tests marking all notifications read.
///
/// Verifies that the count only includes notifications that were unread.
///
/// Expected: Ok(2), then Ok(0) on a second call
#[tokio::test]
async fn mark_all_counts_changed_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let read = repo.create(user.id, "low_stock", "one").await?;
    repo.create(user.id, "low_stock", "two").await?;
    repo.create(user.id, "low_stock", "three").await?;
    repo.mark_read(read.id, user.id).await?;

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.mark_all_read(user.id).await?, 0);

    Ok(())
}
