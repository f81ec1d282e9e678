use crate::{APIResponse, BaseClient, ID};
use chrono::{DateTime, Utc};
use remindly_api_structs::*;
use remindly_domain::{Channel, ReminderType, Repeat};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub title: String,
    pub reminder_type: ReminderType,
    pub datetime: DateTime<Utc>,
    pub message: Option<String>,
    pub repeat: Option<Repeat>,
    pub channels: Vec<Channel>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub group_id: Option<ID>,
}

impl CreateReminderInput {
    pub fn new(title: &str, reminder_type: ReminderType, datetime: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            reminder_type,
            datetime,
            message: None,
            repeat: None,
            channels: Vec::new(),
            contact_name: None,
            contact_phone: None,
            contact_email: None,
            group_id: None,
        }
    }
}

pub type UpdateReminderInput = update_reminder::RequestBody;

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            title: input.title,
            reminder_type: input.reminder_type,
            datetime: input.datetime,
            message: input.message,
            repeat: input.repeat,
            channels: Some(input.channels),
            is_active: None,
            contact_name: input.contact_name,
            contact_phone: input.contact_phone,
            contact_email: input.contact_email,
            group_id: input.group_id,
        };
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn update(
        &self,
        reminder_id: ID,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        self.base
            .put(input, format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn toggle_active(&self, reminder_id: ID) -> APIResponse<toggle_reminder::APIResponse> {
        self.base
            .patch(
                format!("reminders/{}/toggle_active", reminder_id),
                StatusCode::OK,
            )
            .await
    }
}
