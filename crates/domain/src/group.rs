use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use remindly_utils::create_join_code;

/// A set of `Customer`s that can be addressed by a single group `Reminder`.
///
/// The `join_code` is the only way to discover a group, there is no lookup by
/// name.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderGroup {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub join_code: String,
    pub created: DateTime<Utc>,
}

impl ReminderGroup {
    pub fn new(name: String, description: String, created: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name,
            description,
            join_code: create_join_code(),
            created,
        }
    }

    /// Draws a fresh join code, used when the current one collides
    /// with an existing group
    pub fn regenerate_join_code(&mut self) {
        self.join_code = create_join_code();
    }
}

impl Entity<ID> for ReminderGroup {
    fn id(&self) -> ID {
        self.id
    }
}
