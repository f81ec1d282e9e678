use super::find_reminder_group;
use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::get_reminder::*;
use remindly_domain::{Reminder, ReminderGroup, ID};
use remindly_infra::RemindlyContext;

pub async fn get_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let usecase = GetReminderUseCase {
        reminder_id: path_params.reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|(reminder, group)| HttpResponse::Ok().json(APIResponse::new(reminder, group)))
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct GetReminderUseCase {
    reminder_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = (Reminder, Option<(ReminderGroup, i64)>);

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or(UseCaseError::NotFound(self.reminder_id))?;
        let group = find_reminder_group(ctx, &reminder).await;
        Ok((reminder, group))
    }
}
