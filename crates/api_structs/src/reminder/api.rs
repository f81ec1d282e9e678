use crate::dtos::ReminderDTO;
use chrono::{DateTime, Utc};
use remindly_domain::{Channel, Reminder, ReminderGroup, ReminderType, Repeat, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder, group: Option<(ReminderGroup, i64)>) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder, group),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReminderPathParams {
    pub reminder_id: ID,
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub reminder_type: ReminderType,
        pub datetime: DateTime<Utc>,
        #[serde(default)]
        pub message: Option<String>,
        /// Defaults to `Once`
        #[serde(default)]
        pub repeat: Option<Repeat>,
        #[serde(default)]
        pub channels: Option<Vec<Channel>>,
        #[serde(default)]
        pub is_active: Option<bool>,
        #[serde(default)]
        pub contact_name: Option<String>,
        #[serde(default)]
        pub contact_phone: Option<String>,
        #[serde(default)]
        pub contact_email: Option<String>,
        /// Required for group reminders
        #[serde(default)]
        pub group_id: Option<ID>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<(Reminder, Option<(ReminderGroup, i64)>)>) -> Self {
            Self {
                reminders: reminders
                    .into_iter()
                    .map(|(reminder, group)| ReminderDTO::new(reminder, group))
                    .collect(),
            }
        }
    }
}

pub mod update_reminder {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub message: Option<String>,
        #[serde(default)]
        pub datetime: Option<DateTime<Utc>>,
        #[serde(default)]
        pub repeat: Option<Repeat>,
        #[serde(default)]
        pub channels: Option<Vec<Channel>>,
        #[serde(default)]
        pub is_active: Option<bool>,
        #[serde(default)]
        pub contact_name: Option<String>,
        #[serde(default)]
        pub contact_phone: Option<String>,
        #[serde(default)]
        pub contact_email: Option<String>,
        #[serde(default)]
        pub group_id: Option<ID>,
    }

    pub type PathParams = ReminderPathParams;

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;

    pub type APIResponse = ReminderResponse;
}

pub mod toggle_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub id: ID,
        pub is_active: bool,
    }
}
