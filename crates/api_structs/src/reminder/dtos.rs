use crate::dtos::GroupDTO;
use chrono::{DateTime, Utc};
use remindly_domain::{Channel, Reminder, ReminderGroup, ReminderType, Repeat, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub title: String,
    pub reminder_type: ReminderType,
    pub message: String,
    pub datetime: DateTime<Utc>,
    pub repeat: Repeat,
    pub channels: Vec<Channel>,
    pub is_active: bool,
    pub customer_id: Option<ID>,
    pub group: Option<GroupDTO>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub created: DateTime<Utc>,
}

impl ReminderDTO {
    /// `group` is the linked `ReminderGroup` and its member count
    pub fn new(reminder: Reminder, group: Option<(ReminderGroup, i64)>) -> Self {
        Self {
            id: reminder.id,
            title: reminder.title,
            reminder_type: reminder.reminder_type,
            message: reminder.message,
            datetime: reminder.datetime,
            repeat: reminder.repeat,
            channels: reminder.channels.into_iter().collect(),
            is_active: reminder.is_active,
            customer_id: reminder.customer_id,
            group: group.map(|(group, members)| GroupDTO::new(group, members)),
            contact_name: reminder.contact_name,
            contact_phone: reminder.contact_phone,
            contact_email: reminder.contact_email,
            created: reminder.created,
        }
    }
}
