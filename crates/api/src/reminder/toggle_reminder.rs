use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::toggle_reminder::*;
use remindly_domain::{Reminder, ID};
use remindly_infra::RemindlyContext;

pub async fn toggle_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let usecase = ToggleReminderUseCase {
        reminder_id: path_params.reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| {
            HttpResponse::Ok().json(APIResponse {
                id: reminder.id,
                is_active: reminder.is_active,
            })
        })
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct ToggleReminderUseCase {
    reminder_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ToggleReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "ToggleReminder";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or(UseCaseError::NotFound(self.reminder_id))?;

        reminder.toggle_active();
        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use remindly_domain::ReminderType;

    #[actix_web::main]
    #[test]
    async fn toggles_back_and_forth() {
        let ctx = RemindlyContext::create_inmemory();
        let reminder = Reminder::new("Dentist".into(), ReminderType::Personal, Utc::now(), Utc::now());
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let toggled = execute(ToggleReminderUseCase { reminder_id: reminder.id }, &ctx)
            .await
            .unwrap();
        assert!(!toggled.is_active);
        assert!(!ctx.repos.reminders.find(&reminder.id).await.unwrap().is_active);

        let toggled = execute(ToggleReminderUseCase { reminder_id: reminder.id }, &ctx)
            .await
            .unwrap();
        assert!(toggled.is_active);
    }
}
