use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use remindly_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |_| true);
        reminders.sort_by(|r1, r2| r2.created.cmp(&r1.created));
        Ok(reminders)
    }

    async fn find_active_from(&self, from: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.is_active && r.datetime >= from);
        reminders.sort_by_key(|r| r.datetime);
        Ok(reminders)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn detach_group(&self, group_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.reminders,
            |r| r.group_id == Some(*group_id),
            |r| r.group_id = None,
        );
        Ok(())
    }

    async fn detach_customer(&self, customer_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.reminders,
            |r| r.customer_id == Some(*customer_id),
            |r| r.customer_id = None,
        );
        Ok(())
    }
}
