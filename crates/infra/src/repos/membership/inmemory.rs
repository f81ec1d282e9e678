use super::IMembershipRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use remindly_domain::{GroupMembership, ID};

pub struct InMemoryMembershipRepo {
    memberships: std::sync::Mutex<Vec<GroupMembership>>,
}

impl InMemoryMembershipRepo {
    pub fn new() -> Self {
        Self {
            memberships: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMembershipRepo for InMemoryMembershipRepo {
    async fn insert_if_absent(&self, membership: &GroupMembership) -> anyhow::Result<bool> {
        // Check and insert under the same lock so concurrent joins can't race
        let mut memberships = self.memberships.lock().unwrap();
        let exists = memberships.iter().any(|m| {
            m.customer_id == membership.customer_id && m.group_id == membership.group_id
        });
        if exists {
            return Ok(false);
        }
        memberships.push(membership.clone());
        Ok(true)
    }

    async fn save(&self, membership: &GroupMembership) -> anyhow::Result<()> {
        save(membership, &self.memberships);
        Ok(())
    }

    async fn find(&self, membership_id: &ID) -> Option<GroupMembership> {
        find(membership_id, &self.memberships)
    }

    async fn find_by_customer_and_group(
        &self,
        customer_id: &ID,
        group_id: &ID,
    ) -> Option<GroupMembership> {
        find_by(&self.memberships, |m| {
            m.customer_id == *customer_id && m.group_id == *group_id
        })
        .into_iter()
        .next()
    }

    async fn find_by_group(&self, group_id: &ID) -> anyhow::Result<Vec<GroupMembership>> {
        let mut memberships = find_by(&self.memberships, |m| m.group_id == *group_id);
        memberships.sort_by_key(|m| m.joined);
        Ok(memberships)
    }

    async fn count_by_group(&self, group_id: &ID) -> anyhow::Result<i64> {
        Ok(find_by(&self.memberships, |m| m.group_id == *group_id).len() as i64)
    }

    async fn delete(&self, membership_id: &ID) -> Option<GroupMembership> {
        delete(membership_id, &self.memberships)
    }

    async fn delete_by_group(&self, group_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.memberships, |m| m.group_id == *group_id))
    }

    async fn delete_by_customer(&self, customer_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.memberships, |m| m.customer_id == *customer_id))
    }
}
