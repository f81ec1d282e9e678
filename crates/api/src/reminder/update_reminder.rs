use super::find_reminder_group;
use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::update_reminder::*;
use remindly_domain::{Reminder, Repeat, ID};
use remindly_infra::RemindlyContext;

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id,
        changes: body.0,
    };

    let reminder = execute(usecase, &ctx)
        .await
        .map_err(RemindlyError::from)?;
    let group = find_reminder_group(&ctx, &reminder).await;
    Ok(HttpResponse::Ok().json(APIResponse::new(reminder, group)))
}

#[derive(Debug)]
struct UpdateReminderUseCase {
    reminder_id: ID,
    changes: RequestBody,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    EmptyTitle,
    UnsupportedRepeat(String),
    GroupNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::EmptyTitle => {
                Self::BadClientData("The reminder title can not be empty.".into())
            }
            UseCaseError::UnsupportedRepeat(repeat) => Self::BadClientData(format!(
                "The repeat value: {}, is not supported.",
                repeat
            )),
            UseCaseError::GroupNotFound(group_id) => Self::NotFound(format!(
                "The group with id: {}, was not found.",
                group_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or(UseCaseError::NotFound(self.reminder_id))?;

        let changes = &self.changes;
        if let Some(title) = &changes.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(UseCaseError::EmptyTitle);
            }
            reminder.title = title.to_string();
        }
        if let Some(message) = &changes.message {
            reminder.message = message.clone();
        }
        if let Some(datetime) = changes.datetime {
            reminder.datetime = datetime;
        }
        if let Some(repeat) = &changes.repeat {
            if let Repeat::Unsupported(value) = repeat {
                return Err(UseCaseError::UnsupportedRepeat(value.clone()));
            }
            reminder.repeat = repeat.clone();
        }
        if let Some(channels) = &changes.channels {
            reminder.channels = channels.iter().copied().collect();
        }
        if let Some(is_active) = changes.is_active {
            reminder.is_active = is_active;
        }
        if let Some(contact_name) = &changes.contact_name {
            reminder.contact_name = Some(contact_name.clone()).filter(|v| !v.is_empty());
        }
        if let Some(contact_phone) = &changes.contact_phone {
            reminder.contact_phone = Some(contact_phone.clone()).filter(|v| !v.is_empty());
        }
        if let Some(contact_email) = &changes.contact_email {
            reminder.contact_email = Some(contact_email.clone()).filter(|v| !v.is_empty());
        }
        if let Some(group_id) = changes.group_id {
            let group = ctx
                .repos
                .groups
                .find(&group_id)
                .await
                .ok_or(UseCaseError::GroupNotFound(group_id))?;
            reminder.group_id = Some(group.id);
        }

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseError::StorageError)
    }
}
