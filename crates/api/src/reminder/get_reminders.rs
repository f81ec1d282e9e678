use super::find_reminder_group;
use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::get_reminders::*;
use remindly_domain::{Reminder, ReminderGroup};
use remindly_infra::RemindlyContext;

pub async fn get_reminders_controller(
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    execute(GetRemindersUseCase {}, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(|_| RemindlyError::InternalError)
}

#[derive(Debug)]
struct GetRemindersUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<(Reminder, Option<(ReminderGroup, i64)>)>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut res = Vec::with_capacity(reminders.len());
        for reminder in reminders {
            let group = find_reminder_group(ctx, &reminder).await;
            res.push((reminder, group));
        }
        Ok(res)
    }
}
