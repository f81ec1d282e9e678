use super::IGroupRepo;
use crate::repos::shared::inmemory_repo::*;
use remindly_domain::{ReminderGroup, ID};

pub struct InMemoryGroupRepo {
    groups: std::sync::Mutex<Vec<ReminderGroup>>,
}

impl InMemoryGroupRepo {
    pub fn new() -> Self {
        Self {
            groups: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IGroupRepo for InMemoryGroupRepo {
    async fn insert(&self, group: &ReminderGroup) -> anyhow::Result<bool> {
        let mut groups = self.groups.lock().unwrap();
        if groups.iter().any(|g| g.join_code == group.join_code) {
            return Ok(false);
        }
        groups.push(group.clone());
        Ok(true)
    }

    async fn find(&self, group_id: &ID) -> Option<ReminderGroup> {
        find(group_id, &self.groups)
    }

    async fn find_by_join_code(&self, join_code: &str) -> Option<ReminderGroup> {
        find_by(&self.groups, |g| g.join_code == join_code)
            .into_iter()
            .next()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ReminderGroup>> {
        let mut groups = find_by(&self.groups, |_| true);
        groups.sort_by(|g1, g2| g2.created.cmp(&g1.created));
        Ok(groups)
    }

    async fn delete(&self, group_id: &ID) -> Option<ReminderGroup> {
        delete(group_id, &self.groups)
    }
}
