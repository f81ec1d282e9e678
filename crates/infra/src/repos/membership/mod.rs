mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryMembershipRepo;
pub use postgres::PostgresMembershipRepo;
use remindly_domain::{GroupMembership, ID};

#[async_trait::async_trait]
pub trait IMembershipRepo: Send + Sync {
    /// Inserts the `GroupMembership` unless the customer already has a
    /// membership in the group. Returns whether it was inserted.
    async fn insert_if_absent(&self, membership: &GroupMembership) -> anyhow::Result<bool>;
    async fn save(&self, membership: &GroupMembership) -> anyhow::Result<()>;
    async fn find(&self, membership_id: &ID) -> Option<GroupMembership>;
    async fn find_by_customer_and_group(
        &self,
        customer_id: &ID,
        group_id: &ID,
    ) -> Option<GroupMembership>;
    /// Memberships of the group in the order they joined
    async fn find_by_group(&self, group_id: &ID) -> anyhow::Result<Vec<GroupMembership>>;
    async fn count_by_group(&self, group_id: &ID) -> anyhow::Result<i64>;
    async fn delete(&self, membership_id: &ID) -> Option<GroupMembership>;
    async fn delete_by_group(&self, group_id: &ID) -> anyhow::Result<DeleteResult>;
    async fn delete_by_customer(&self, customer_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::RemindlyContext;
    use chrono::{Duration, Utc};
    use remindly_domain::{GroupMembership, MembershipStatus, ID};

    #[tokio::test]
    async fn one_membership_per_customer_and_group() {
        let ctx = RemindlyContext::create_inmemory();
        let customer_id = ID::new();
        let group_id = ID::new();
        let first = GroupMembership::new(customer_id, group_id, Utc::now());
        let second = GroupMembership::new(customer_id, group_id, Utc::now());

        assert!(ctx.repos.memberships.insert_if_absent(&first).await.unwrap());
        assert!(!ctx.repos.memberships.insert_if_absent(&second).await.unwrap());

        assert_eq!(
            ctx.repos
                .memberships
                .find_by_customer_and_group(&customer_id, &group_id)
                .await,
            Some(first)
        );
        assert_eq!(ctx.repos.memberships.count_by_group(&group_id).await.unwrap(), 1);
        assert!(ctx.repos.memberships.find(&second.id).await.is_none());
    }

    #[tokio::test]
    async fn save_and_list_in_join_order() {
        let ctx = RemindlyContext::create_inmemory();
        let group_id = ID::new();
        let now = Utc::now();
        let late = GroupMembership::new(ID::new(), group_id, now);
        let mut early = GroupMembership::new(ID::new(), group_id, now - Duration::hours(1));
        let other_group = GroupMembership::new(ID::new(), ID::new(), now);
        for m in [&late, &early, &other_group] {
            ctx.repos.memberships.insert_if_absent(m).await.unwrap();
        }

        early.activate();
        ctx.repos.memberships.save(&early).await.unwrap();

        let members = ctx.repos.memberships.find_by_group(&group_id).await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, early.id);
        assert_eq!(members[0].status, MembershipStatus::Active);
        assert_eq!(members[1].id, late.id);
    }

    #[tokio::test]
    async fn delete_by_group_and_customer() {
        let ctx = RemindlyContext::create_inmemory();
        let customer_id = ID::new();
        let group_id = ID::new();
        let m1 = GroupMembership::new(customer_id, group_id, Utc::now());
        let m2 = GroupMembership::new(ID::new(), group_id, Utc::now());
        let m3 = GroupMembership::new(customer_id, ID::new(), Utc::now());
        for m in [&m1, &m2, &m3] {
            ctx.repos.memberships.insert_if_absent(m).await.unwrap();
        }

        let res = ctx.repos.memberships.delete_by_group(&group_id).await.unwrap();
        assert_eq!(res.deleted_count, 2);
        let res = ctx
            .repos
            .memberships
            .delete_by_customer(&customer_id)
            .await
            .unwrap();
        assert_eq!(res.deleted_count, 1);
        assert!(ctx.repos.memberships.find(&m3.id).await.is_none());
    }
}
