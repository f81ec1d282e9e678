mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use chrono::{DateTime, Utc};
use remindly_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All reminders, newest first
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Active reminders with a datetime at or after `from`, ordered by datetime
    async fn find_active_from(&self, from: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Unlinks the group from all its reminders
    async fn detach_group(&self, group_id: &ID) -> anyhow::Result<()>;
    /// Unlinks the customer from all its reminders
    async fn detach_customer(&self, customer_id: &ID) -> anyhow::Result<()>;
}
