use super::*;

/// Tests listing a user's notifications.
///
/// Verifies that only the recipient's notifications are returned, newest first, and
/// that `unread_only` hides read ones.
///
/// Expected: Ok with two notifications, then one when unread only
#[tokio::test]
async fn lists_own_notifications_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let first = repo.create(user.id, "appointment_status", "first").await?;
    let second = repo.create(user.id, "appointment_status", "second").await?;
    repo.create(other.id, "appointment_status", "not yours").await?;

    let all = repo.get_by_user(user.id, false).await?;
    let ids: Vec<i32> = all.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    repo.mark_read(second.id, user.id).await?;

    let unread = repo.get_by_user(user.id, true).await?;
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].id, first.id);

    Ok(())
}
