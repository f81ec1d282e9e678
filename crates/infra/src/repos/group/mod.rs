mod inmemory;
mod postgres;

pub use inmemory::InMemoryGroupRepo;
pub use postgres::PostgresGroupRepo;
use remindly_domain::{ReminderGroup, ID};

#[async_trait::async_trait]
pub trait IGroupRepo: Send + Sync {
    /// Returns `false` without writing when the join code is already taken
    async fn insert(&self, group: &ReminderGroup) -> anyhow::Result<bool>;
    async fn find(&self, group_id: &ID) -> Option<ReminderGroup>;
    async fn find_by_join_code(&self, join_code: &str) -> Option<ReminderGroup>;
    /// All groups, newest first
    async fn find_all(&self) -> anyhow::Result<Vec<ReminderGroup>>;
    async fn delete(&self, group_id: &ID) -> Option<ReminderGroup>;
}

#[cfg(test)]
mod tests {
    use crate::RemindlyContext;
    use chrono::{Duration, Utc};
    use remindly_domain::ReminderGroup;

    #[tokio::test]
    async fn create_find_and_delete() {
        let ctx = RemindlyContext::create_inmemory();
        let group = ReminderGroup::new("Book club".into(), "".into(), Utc::now());

        assert!(ctx.repos.groups.insert(&group).await.unwrap());
        assert_eq!(ctx.repos.groups.find(&group.id).await, Some(group.clone()));
        assert_eq!(
            ctx.repos.groups.find_by_join_code(&group.join_code).await,
            Some(group.clone())
        );

        assert_eq!(ctx.repos.groups.delete(&group.id).await, Some(group.clone()));
        assert!(ctx.repos.groups.find(&group.id).await.is_none());
        assert!(ctx
            .repos
            .groups
            .find_by_join_code(&group.join_code)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let ctx = RemindlyContext::create_inmemory();
        let now = Utc::now();
        let older = ReminderGroup::new("Older".into(), "".into(), now - Duration::days(1));
        let newer = ReminderGroup::new("Newer".into(), "".into(), now);
        ctx.repos.groups.insert(&older).await.unwrap();
        ctx.repos.groups.insert(&newer).await.unwrap();

        let groups = ctx.repos.groups.find_all().await.unwrap();
        assert_eq!(groups, vec![newer, older]);
    }

    #[tokio::test]
    async fn rejects_taken_join_code() {
        let ctx = RemindlyContext::create_inmemory();
        let group = ReminderGroup::new("Book club".into(), "".into(), Utc::now());
        assert!(ctx.repos.groups.insert(&group).await.unwrap());

        let mut other = ReminderGroup::new("Chess club".into(), "".into(), Utc::now());
        other.join_code = group.join_code.clone();
        assert!(!ctx.repos.groups.insert(&other).await.unwrap());
        assert!(ctx.repos.groups.find(&other.id).await.is_none());
        assert_eq!(
            ctx.repos.groups.find_by_join_code(&group.join_code).await,
            Some(group)
        );
    }
}
